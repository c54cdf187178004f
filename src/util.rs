use log::error;
use crate::labeler;

pub fn truncate_string(s: &str, max_len: usize) -> String {
    match s.char_indices().nth(max_len) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

pub fn log_on_err<T>(result: Result<T, labeler::Error>) -> Result<T, labeler::Error> {
    match result {
        Ok(t) => Ok(t),
        Err(e) => {
            error!("{}", e);
            Err(e)
        }
    }
}
