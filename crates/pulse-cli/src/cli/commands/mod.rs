//! CLI command handlers, one file per command.

pub(crate) mod catalog;
mod completions;
mod fetch;
mod url;

pub use catalog::run_catalog;
pub use completions::run_completions;
pub use fetch::run_fetch;
pub use url::run_url;
