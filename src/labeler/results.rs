use log::{debug, info};
use snafu::prelude::*;
use std::borrow::Cow;
use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::{AlreadyLabeledSnafu, Error, Label, ResultsCsvSnafu, ResultsIoSnafu};

/// Append-only `filename,label` CSV file.
///
/// Keeps the set of names already written so the same file is never
/// recorded twice.
#[derive(Debug)]
pub struct ResultsLog {
    path: PathBuf,
    labeled: HashSet<String>,
    // Set when the file does not end with a line break.
    needs_newline: bool,
}

impl ResultsLog {
    /// Reads the names already present in `path`. A missing file is an
    /// empty log.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, Error> {
        let path = path.into();
        let contents = match fs::read(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e).context(ResultsIoSnafu { path }),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(contents.as_slice());

        let mut labeled = HashSet::new();
        for record in reader.byte_records() {
            let record = record.context(ResultsCsvSnafu { path: &path })?;
            match record.get(0).map(String::from_utf8_lossy) {
                Some(name) if !name.is_empty() => {
                    if let Cow::Owned(_) = name {
                        debug!("Row with non UTF-8 file name read as {:?}", name);
                    }
                    labeled.insert(name.into_owned());
                }
                _ => debug!("Ignoring row without a file name: {:?}", record),
            }
        }

        let log = ResultsLog {
            needs_newline: contents.last().is_some_and(|&b| b != b'\n'),
            path,
            labeled,
        };
        if log.is_empty() {
            info!("No results yet at {:?}, starting fresh", log.path);
        } else {
            info!("Loaded {} labeled files from {:?}", log.len(), log.path);
        }
        Ok(log)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contains(&self, name: &str) -> bool {
        self.labeled.contains(name)
    }

    pub fn len(&self) -> usize {
        self.labeled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labeled.is_empty()
    }

    /// Writes one row and flushes it before returning.
    pub fn append(&mut self, name: &str, label: Label) -> Result<(), Error> {
        ensure!(
            !self.labeled.contains(name),
            AlreadyLabeledSnafu {
                name,
                path: &self.path
            }
        );

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .context(ResultsIoSnafu { path: &self.path })?;

        if self.needs_newline {
            file.write_all(b"\n")
                .context(ResultsIoSnafu { path: &self.path })?;
            self.needs_newline = false;
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer
            .write_record([name, label.as_str()])
            .context(ResultsCsvSnafu { path: &self.path })?;
        writer
            .flush()
            .context(ResultsIoSnafu { path: &self.path })?;

        self.labeled.insert(name.to_string());
        Ok(())
    }
}
