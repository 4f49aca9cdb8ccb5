use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not access revenues file")]
    FileError(#[from] std::io::Error),
    #[error("could not parse JSON content to revenues")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
