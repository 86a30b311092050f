use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] json::error::Error),

    #[error("{0}")]
    Yaml(#[from] yaml::error::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
