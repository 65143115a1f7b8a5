use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RandFilesError {
    #[error("cannot create file {path:?}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write to file {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write to output")]
    Output(#[from] io::Error),
}

impl RandFilesError {
    /// The file the error is about, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            RandFilesError::Create { path, .. } | RandFilesError::Write { path, .. } => Some(path),
            RandFilesError::Output(_) => None,
        }
    }
}
