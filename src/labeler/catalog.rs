use log::debug;
use snafu::prelude::*;
use std::fs;
use std::path::Path;

use super::{Error, FolderUnreadableSnafu};

/// Lists the files directly inside `folder` whose names end in `.{extension}`.
///
/// Matching is case-sensitive. Names are returned sorted.
pub fn list_files(folder: &Path, extension: &str) -> Result<Vec<String>, Error> {
    let suffix = format!(".{}", extension.trim_start_matches('.'));
    let entries = fs::read_dir(folder).context(FolderUnreadableSnafu { path: folder })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.context(FolderUnreadableSnafu { path: folder })?;
        if !entry.path().is_file() {
            continue;
        }

        let Ok(name) = entry.file_name().into_string() else {
            debug!("Skipping non UTF-8 file name in {:?}", folder);
            continue;
        };
        if name.ends_with(&suffix) {
            names.push(name);
        }
    }

    names.sort();
    Ok(names)
}

/// Same as `list_files`, minus anything `is_labeled` accepts.
pub fn pending_files(
    folder: &Path,
    extension: &str,
    is_labeled: impl Fn(&str) -> bool,
) -> Result<Vec<String>, Error> {
    let mut names = list_files(folder, extension)?;
    names.retain(|name| !is_labeled(name));
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn lists_matching_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "b.gif");
        touch(dir.path(), "a.gif");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "upper.GIF");
        fs::create_dir(dir.path().join("nested.gif")).unwrap();

        let names = list_files(dir.path(), "gif").unwrap();
        assert_eq!(names, vec!["a.gif", "b.gif"]);
    }

    #[test]
    fn leading_dot_in_extension_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "clip.gif");

        assert_eq!(list_files(dir.path(), ".gif").unwrap(), vec!["clip.gif"]);
    }

    #[test]
    fn missing_folder_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");

        assert!(matches!(
            list_files(&missing, "gif"),
            Err(Error::FolderUnreadable { .. })
        ));
    }

    #[test]
    fn pending_excludes_labeled_names() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.gif");
        touch(dir.path(), "b.gif");
        touch(dir.path(), "c.gif");

        let labeled: HashSet<String> = ["b.gif".to_string(), "z.gif".to_string()].into();
        let names = pending_files(dir.path(), "gif", |name| labeled.contains(name)).unwrap();
        assert_eq!(names, vec!["a.gif", "c.gif"]);
    }
}
