use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort the quiz before the first question is shown.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("error opening file {}: {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("error reading csv file {}: {source}", .path.display())]
    Parse { path: PathBuf, source: csv::Error },
}
