use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the dashboard core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    /// The dataset file is missing, unreadable, or lacks the required columns.
    /// Fatal at startup.
    #[error("failed to load dataset from {}: {reason}", path.display())]
    DataLoad { path: PathBuf, reason: String },

    /// A site selector value that is neither `ALL_SITES` nor a known site.
    #[error("invalid site selection: '{0}'")]
    InvalidSelection(String),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
