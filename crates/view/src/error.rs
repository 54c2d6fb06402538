#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Postview API error: {0}")]
    PostviewApi(#[from] postview_api::error::Error),

    #[error("Render error: {0}")]
    Render(#[from] askama::Error),

    #[error("Request cancelled")]
    Cancelled,
}
