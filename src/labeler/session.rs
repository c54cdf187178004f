use log::{info, warn};
use snafu::prelude::*;
use std::path::PathBuf;

use super::{catalog, Error, Label, LabelerConfig, NothingToLabelSnafu, ResultsLog};

/// How far the current run has got.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub labeled: usize,
    pub total: usize,
}

/// Walks the unlabeled files of a folder one at a time.
#[derive(Debug)]
pub struct LabelingSession {
    folder: PathBuf,
    pending: Vec<String>,
    index: usize,
    labeled: usize,
    previously_labeled: usize,
    results: ResultsLog,
}

impl LabelingSession {
    /// Opens the results log and queues every file it does not mention yet.
    pub fn open(config: &LabelerConfig) -> Result<Self, Error> {
        let results = ResultsLog::open(&config.output)?;
        let pending = catalog::pending_files(&config.folder, &config.extension, |name| {
            results.contains(name)
        })?;
        let previously_labeled = results.len();

        info!(
            "Queued {} files from {:?} ({} already labeled)",
            pending.len(),
            config.folder,
            previously_labeled
        );

        Ok(LabelingSession {
            folder: config.folder.clone(),
            pending,
            index: 0,
            labeled: 0,
            previously_labeled,
            results,
        })
    }

    pub fn current(&self) -> Option<&str> {
        self.pending.get(self.index).map(String::as_str)
    }

    pub fn current_path(&self) -> Option<PathBuf> {
        self.current().map(|name| self.folder.join(name))
    }

    /// Writes `label` for the current file and moves on to the next one.
    ///
    /// Stays on the current file if the write fails.
    pub fn record(&mut self, label: Label) -> Result<Progress, Error> {
        let name = self.current().context(NothingToLabelSnafu)?.to_string();
        self.results.append(&name, label)?;
        info!("Labeled {} as {}", name, label);

        self.labeled += 1;
        self.index += 1;
        Ok(self.progress())
    }

    /// Moves past the current file without writing anything.
    pub fn skip(&mut self) -> Result<Progress, Error> {
        let name = self.current().context(NothingToLabelSnafu)?;
        warn!("Skipped {}", name);
        self.index += 1;
        Ok(self.progress())
    }

    pub fn progress(&self) -> Progress {
        Progress {
            labeled: self.labeled,
            total: self.pending.len(),
        }
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn is_complete(&self) -> bool {
        self.index >= self.pending.len()
    }

    pub fn previously_labeled(&self) -> usize {
        self.previously_labeled
    }

    pub fn results(&self) -> &ResultsLog {
        &self.results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use std::path::Path;

    fn config_for(dir: &Path, names: &[&str]) -> LabelerConfig {
        let folder = dir.join("gifs");
        fs::create_dir(&folder).unwrap();
        for name in names {
            fs::write(folder.join(name), b"").unwrap();
        }

        LabelerConfig {
            folder,
            output: dir.join("manual_labels.csv"),
            ..LabelerConfig::default()
        }
    }

    fn logged_rows(path: &Path) -> Vec<(String, String)> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(path)
            .unwrap();
        reader
            .records()
            .map(|r| {
                let r = r.unwrap();
                (r[0].to_string(), r[1].to_string())
            })
            .collect()
    }

    #[test]
    fn full_run_logs_every_file_once() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path(), &["a.gif", "b.gif", "c.gif", "skip.txt"]);

        let mut session = LabelingSession::open(&config).unwrap();
        assert_eq!(session.current(), Some("a.gif"));
        assert_eq!(session.current_path(), Some(config.folder.join("a.gif")));

        let mut labels = Label::ALL.into_iter().cycle();
        while !session.is_complete() {
            session.record(labels.next().unwrap()).unwrap();
        }

        assert_eq!(session.current(), None);
        assert_eq!(session.progress(), Progress { labeled: 3, total: 3 });

        let rows = logged_rows(&config.output);
        let counts = rows.iter().fold(HashMap::new(), |mut acc, (name, _)| {
            *acc.entry(name.clone()).or_insert(0) += 1;
            acc
        });
        assert_eq!(counts.len(), 3);
        assert!(counts.values().all(|&n| n == 1));
        assert_eq!(rows[0], ("a.gif".to_string(), "Anger".to_string()));
        assert_eq!(rows[2], ("c.gif".to_string(), "Fear".to_string()));
    }

    #[test]
    fn second_run_resumes_where_first_stopped() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path(), &["a.gif", "b.gif", "c.gif"]);

        let mut first = LabelingSession::open(&config).unwrap();
        first.record(Label::Sadness).unwrap();
        drop(first);

        let mut second = LabelingSession::open(&config).unwrap();
        assert_eq!(second.previously_labeled(), 1);
        assert_eq!(second.progress(), Progress { labeled: 0, total: 2 });
        assert_eq!(second.current(), Some("b.gif"));

        second.record(Label::Neutral).unwrap();
        second.record(Label::Happiness).unwrap();
        assert!(second.is_complete());

        let third = LabelingSession::open(&config).unwrap();
        assert!(third.is_complete());
        assert_eq!(logged_rows(&config.output).len(), 3);
    }

    #[test]
    fn skipped_files_are_not_logged() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path(), &["a.gif", "b.gif"]);

        let mut session = LabelingSession::open(&config).unwrap();
        session.skip().unwrap();
        session.record(Label::Disgust).unwrap();
        assert!(session.is_complete());
        assert_eq!(session.progress(), Progress { labeled: 1, total: 2 });

        let reopened = LabelingSession::open(&config).unwrap();
        assert_eq!(reopened.current(), Some("a.gif"));
    }

    #[test]
    fn exhausted_session_refuses_more_labels() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path(), &[]);

        let mut session = LabelingSession::open(&config).unwrap();
        assert!(session.is_complete());
        assert!(matches!(
            session.record(Label::Fear),
            Err(Error::NothingToLabel)
        ));
        assert!(matches!(session.skip(), Err(Error::NothingToLabel)));
        assert!(!config.output.exists());
    }

    #[test]
    fn failed_write_keeps_current_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_for(dir.path(), &["a.gif"]);
        config.output = dir.path().join("missing").join("labels.csv");

        let mut session = LabelingSession::open(&config).unwrap();
        assert!(session.record(Label::Anger).is_err());
        assert_eq!(session.current(), Some("a.gif"));
        assert_eq!(session.progress().labeled, 0);
    }
}
