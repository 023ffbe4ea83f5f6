use std::time::Duration;

/// Default API root. Endpoint paths are resolved relative to it.
pub const DEFAULT_API_BASE_URL: &str = "https://api.moimtable.com/";

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// HTTP client configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    /// API root, always ending in `/`.
    pub base_url: String,
    /// Whole-request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// TCP/TLS connect timeout in seconds (default: `10`).
    pub connect_timeout_secs: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

impl NetworkConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                     | Default                       |
    /// |-----------------------------|-------------------------------|
    /// | `MOIM_API_BASE_URL`         | `https://api.moimtable.com/`  |
    /// | `MOIM_REQUEST_TIMEOUT_SECS` | `30`                          |
    /// | `MOIM_CONNECT_TIMEOUT_SECS` | `10`                          |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reading variables through
    /// `lookup`, so callers can supply values from somewhere other than the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup("MOIM_API_BASE_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.into());

        let request_timeout_secs = parse_secs(&lookup, "MOIM_REQUEST_TIMEOUT_SECS", 30)?;
        let connect_timeout_secs = parse_secs(&lookup, "MOIM_CONNECT_TIMEOUT_SECS", 10)?;

        Ok(Self {
            base_url: with_trailing_slash(base_url),
            request_timeout_secs,
            connect_timeout_secs,
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

/// Parse a positive number of seconds, falling back to `default` when unset.
pub fn parse_secs(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: u64,
) -> Result<u64, ConfigError> {
    let Some(raw) = lookup(var) else {
        return Ok(default);
    };
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::Invalid {
            var,
            expected: "a positive number of seconds",
            value: raw,
        }),
    }
}

fn with_trailing_slash(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}
