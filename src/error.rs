use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordscanError {
    // Config
    #[error("invalid worker count: {0} (must be at least 1)")]
    InvalidWorkerCount(usize),

    // Runtime
    #[error("worker {worker} failed: {reason}")]
    WorkerFailure { worker: usize, reason: String },

    // Word list / benchmark log
    #[error("no words found in {}", .0.display())]
    EmptyWordList(PathBuf),

    #[error("IO error at {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WordscanError {
    /// The path this error occurred at, if applicable.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::EmptyWordList(p) | Self::Io { path: p, .. } => Some(p),
            _ => None,
        }
    }

    /// Whether this error aborted a search invocation outright.
    ///
    /// Configuration errors are rejected before any worker starts; worker
    /// failures abort after launch and discard every partial result. The
    /// remaining variants come from the loader and log, not from a search.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::InvalidWorkerCount(_) | Self::WorkerFailure { .. }
        )
    }
}
