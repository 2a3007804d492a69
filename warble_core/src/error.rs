use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Object `{0}` not found")]
    ObjectNotFound(String),
    #[error("Object `{0}` already exists")]
    ObjectAlreadyExists(String),
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
