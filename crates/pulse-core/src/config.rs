use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::fetch::FetchOptions;
use crate::plot_url::{PlotUrlBuilder, DEFAULT_BASE_URL};
use crate::retry::RetryPolicy;

/// Retry policy parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts per fetch (including the first).
    pub max_attempts: u32,
    /// Base delay in seconds for exponential backoff (e.g. 0.5 = 500ms).
    pub base_delay_secs: f64,
    /// Maximum backoff delay in seconds.
    pub max_delay_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_secs: 0.5,
            max_delay_secs: 10,
        }
    }
}

fn default_user_agent() -> String {
    format!("pulse/{}", env!("CARGO_PKG_VERSION"))
}

/// Global configuration loaded from `~/.config/pulse/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PulseConfig {
    /// Base URL of the plot service; `/weekly` and `/national` are appended.
    pub base_url: String,
    /// Seconds allowed for establishing the connection.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for the whole request, including rendering time on the service.
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
    /// Directory for fetched plots when `--output` is not given (None = current directory).
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_secs: 15,
            timeout_secs: 60,
            user_agent: default_user_agent(),
            retry: None,
            output_dir: None,
        }
    }
}

impl PulseConfig {
    /// Rejects values that parse as TOML but cannot drive a fetch.
    pub fn validate(&self) -> Result<()> {
        if let Some(retry) = &self.retry {
            let delay = retry.base_delay_secs;
            if !delay.is_finite() || delay < 0.0 || delay > retry.max_delay_secs as f64 {
                anyhow::bail!(
                    "retry.base_delay_secs = {} must be between 0 and retry.max_delay_secs ({})",
                    delay,
                    retry.max_delay_secs
                );
            }
        }
        if self.timeout_secs == 0 {
            anyhow::bail!("timeout_secs must be greater than 0");
        }
        Ok(())
    }

    pub fn url_builder(&self) -> Result<PlotUrlBuilder> {
        PlotUrlBuilder::parse(&self.base_url)
            .with_context(|| format!("config base_url {:?}", self.base_url))
    }

    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            timeout: Duration::from_secs(self.timeout_secs),
            user_agent: self.user_agent.clone(),
        }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
            .as_ref()
            .map(RetryPolicy::from)
            .unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pulse")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PulseConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PulseConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: PulseConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = PulseConfig::default();
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.connect_timeout_secs, 15);
        assert_eq!(cfg.timeout_secs, 60);
        assert!(cfg.user_agent.starts_with("pulse/"));
        assert!(cfg.retry.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = PulseConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: PulseConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.base_url, cfg.base_url);
        assert_eq!(parsed.timeout_secs, cfg.timeout_secs);
        assert_eq!(parsed.user_agent, cfg.user_agent);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            base_url = "http://localhost:8000/api"
            connect_timeout_secs = 2
            timeout_secs = 5
            output_dir = "/tmp/plots"

            [retry]
            max_attempts = 4
            base_delay_secs = 0.1
            max_delay_secs = 2
        "#;
        let cfg: PulseConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.output_dir.as_deref(), Some(std::path::Path::new("/tmp/plots")));
        assert!(cfg.user_agent.starts_with("pulse/"));

        let builder = cfg.url_builder().unwrap();
        assert_eq!(builder.base().as_str(), "http://localhost:8000/api/");

        let opts = cfg.fetch_options();
        assert_eq!(opts.connect_timeout, Duration::from_secs(2));
        assert_eq!(opts.timeout, Duration::from_secs(5));

        let policy = cfg.retry_policy();
        assert_eq!(policy.max_attempts, 4);
        assert_eq!(policy.max_delay, Duration::from_secs(2));
    }

    #[test]
    fn validate_rejects_unusable_retry_delay() {
        for delay in ["inf", "nan", "1e30", "-1.0", "11.0"] {
            let toml = format!(
                "base_url = \"http://localhost\"\n\
                 connect_timeout_secs = 1\n\
                 timeout_secs = 1\n\
                 [retry]\n\
                 max_attempts = 3\n\
                 base_delay_secs = {}\n\
                 max_delay_secs = 10\n",
                delay
            );
            let cfg: PulseConfig = toml::from_str(&toml).unwrap();
            let err = cfg.validate().unwrap_err();
            assert!(err.to_string().contains("base_delay_secs"), "{}: {}", delay, err);
            // Even unvalidated, the policy must not panic.
            assert!(cfg.retry_policy().base_delay <= Duration::from_secs(10));
        }
    }

    #[test]
    fn validate_accepts_defaults_and_zero_timeout_is_rejected() {
        let mut cfg = PulseConfig::default();
        assert!(cfg.validate().is_ok());
        cfg.retry = Some(RetryConfig::default());
        assert!(cfg.validate().is_ok());
        cfg.timeout_secs = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn invalid_base_url_is_reported() {
        let cfg = PulseConfig {
            base_url: "::nope".to_string(),
            ..PulseConfig::default()
        };
        assert!(cfg.url_builder().is_err());
    }
}
