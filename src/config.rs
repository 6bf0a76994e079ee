use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "adastra=info,tower_http=info";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid log filter {filter:?}: {reason}")]
    InvalidLogFilter { filter: String, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

/// Process settings read from the environment (after `.env` is loaded)
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub log_filter: String,
    pub production: bool,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_filter = lookup("RUST_LOG")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.into());

        Self {
            log_filter,
            production: lookup("PRODUCTION").is_some(),
        }
    }

    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        EnvFilter::try_new(&self.log_filter).map_err(|e| ConfigError::InvalidLogFilter {
            filter: self.log_filter.clone(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(|_| None);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert!(!config.production);
        assert!(config.env_filter().is_ok());
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(|key| match key {
            "RUST_LOG" => Some("debug".into()),
            "PRODUCTION" => Some("1".into()),
            _ => None,
        });
        assert_eq!(config.log_filter, "debug");
        assert!(config.production);
    }

    #[test]
    fn blank_filter_falls_back() {
        let config = ServerConfig::from_lookup(|key| (key == "RUST_LOG").then(|| "  ".into()));
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn bad_filter_is_reported() {
        let config = ServerConfig {
            log_filter: "adastra=loudest".into(),
            production: false,
        };
        let err = config.env_filter().unwrap_err();
        assert!(err.to_string().contains("adastra=loudest"));
    }
}
