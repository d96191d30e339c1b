pub mod config;
pub mod logging;

pub mod catalog;
pub mod fetch;
pub mod output;
pub mod panel;
pub mod plot_url;
pub mod retry;
