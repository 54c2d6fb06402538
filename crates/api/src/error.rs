#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Status code: {0}")]
    StatusCode(u16),

    #[error("Invalid url: {0}")]
    InvalidUrl(String),

    #[error("Max retries exceeded: {0}")]
    MaxRetriesExceeded(String),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::StatusCode(404))
    }
}
