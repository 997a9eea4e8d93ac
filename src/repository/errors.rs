use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Response envelope is missing `data`")]
    MissingData,

    #[error("Unexpected status code: {0}")]
    Status(u16),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
