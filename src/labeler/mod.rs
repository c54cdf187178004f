pub mod catalog;
pub mod frame;
pub mod label;
pub mod results;
pub mod session;

use snafu::prelude::*;
use std::path::PathBuf;

pub use label::Label;
pub use results::ResultsLog;
pub use session::{LabelingSession, Progress};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Failed to read folder '{}': {source}", path.display()))]
    FolderUnreadable {
        source: std::io::Error,
        path: PathBuf,
    },

    #[snafu(display("Failed to access results file '{}': {source}", path.display()))]
    ResultsIo {
        source: std::io::Error,
        path: PathBuf,
    },

    #[snafu(display("Malformed results file '{}': {source}", path.display()))]
    ResultsCsv { source: csv::Error, path: PathBuf },

    #[snafu(display("'{name}' is already labeled in '{}'", path.display()))]
    AlreadyLabeled { name: String, path: PathBuf },

    #[snafu(display("Failed to decode '{}': {source}", path.display()))]
    Decode {
        source: image::ImageError,
        path: PathBuf,
    },

    #[snafu(display("'{}' contains no frames", path.display()))]
    EmptyAnimation { path: PathBuf },

    #[snafu(display("Unknown label '{value}'"))]
    UnknownLabel { value: String },

    #[snafu(display("No file left to label"))]
    NothingToLabel,
}

/// Where the labeler reads files from and writes its results to.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LabelerConfig {
    pub folder: PathBuf,
    pub extension: String,
    pub output: PathBuf,
    pub display_size: u32,
}

impl Default for LabelerConfig {
    fn default() -> Self {
        LabelerConfig {
            folder: PathBuf::from("."),
            extension: "gif".to_string(),
            output: PathBuf::from("manual_labels.csv"),
            display_size: frame::DEFAULT_DISPLAY_SIZE,
        }
    }
}
