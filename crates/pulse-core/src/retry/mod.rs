//! Retry and backoff policy for plot fetches.
//!
//! Classifies fetch failures (timeouts, throttling, connection errors) and
//! decides exponential backoff so every caller of the fetcher shares one
//! policy.

mod classify;
mod error;
mod policy;
mod run;

pub use classify::{classify, classify_curl_error, classify_http_status};
pub use error::FetchError;
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::run_with_retry;
