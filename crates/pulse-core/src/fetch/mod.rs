//! Plot image retrieval.
//!
//! Performs the GET that a browser `<img>` would: follow redirects, require a
//! 2xx status and an `image/*` body. Blocking (libcurl easy interface); call
//! from `spawn_blocking` in async code.

mod parse;

use crate::retry::{run_with_retry, FetchError, RetryPolicy};
use sha2::{Digest, Sha256};
use std::str;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(60),
            user_agent: format!("pulse/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// A rendered plot as returned by the plot service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotImage {
    /// URL the image was requested from.
    pub url: Url,
    /// Media type, e.g. `image/png`.
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl PlotImage {
    /// SHA-256 of the image bytes as lowercase hex.
    pub fn sha256_hex(&self) -> String {
        hex::encode(Sha256::digest(&self.bytes))
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Fetches one plot image with a single attempt.
pub fn fetch_plot(url: &Url, opts: &FetchOptions) -> Result<PlotImage, FetchError> {
    let mut headers: Vec<String> = Vec::new();
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url.as_str())?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.useragent(&opts.user_agent)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.timeout(opts.timeout)?;

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                headers.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http(code));
    }

    let content_type = parse::content_type(&headers);
    match content_type {
        Some(ct) if parse::is_image(&ct) => {
            tracing::debug!(%url, content_type = %ct, bytes = body.len(), "plot fetched");
            Ok(PlotImage {
                url: url.clone(),
                content_type: ct,
                bytes: body,
            })
        }
        other => Err(FetchError::NotAnImage(other)),
    }
}

/// Fetches one plot image, retrying transient failures per `policy`.
pub fn fetch_plot_with_retry(
    url: &Url,
    opts: &FetchOptions,
    policy: &RetryPolicy,
) -> Result<PlotImage, FetchError> {
    tracing::info!(%url, "fetching plot");
    run_with_retry(policy, || fetch_plot(url, opts))
}
