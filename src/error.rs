use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Custom(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),

    #[error("invalid manifest: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    CommandFailed(String),

    #[error("archive tool not found on PATH: {0}")]
    ToolNotFound(String),

    #[error("official archive not found at {0}")]
    ArchiveNotFound(String),

    #[error("plugin manifest not found at {0}")]
    ManifestNotFound(String),
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error::Custom(err.to_string())
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::Custom(err)
    }
}
