//! Plot fetch error type, kept typed so it can be classified before it is
//! converted to anyhow.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (timeout, connection, etc.).
    #[error(transparent)]
    Curl(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// 2xx response whose body is not an image (missing or non-`image/*` Content-Type).
    #[error("response is not an image (content type: {})", .0.as_deref().unwrap_or("none"))]
    NotAnImage(Option<String>),
}
