use moim_network::{ConfigError, NetworkConfig};

/// Default prefix of shared invite links; the invite code is appended.
pub const DEFAULT_INVITE_URL_BASE: &str = "https://moimtable.com/invite/";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub network: NetworkConfig,
    /// Prefix of shared invite links (default: `https://moimtable.com/invite/`).
    pub invite_url_base: String,
    /// Bearer token to start with, if the session is already signed in.
    pub access_token: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            network: NetworkConfig::default(),
            invite_url_base: DEFAULT_INVITE_URL_BASE.to_string(),
            access_token: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                         |
    /// |------------------------|---------------------------------|
    /// | `MOIM_INVITE_URL_BASE` | `https://moimtable.com/invite/` |
    /// | `MOIM_ACCESS_TOKEN`    | unset                           |
    ///
    /// plus everything [`NetworkConfig::from_env`] reads.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let network = NetworkConfig::from_lookup(&lookup)?;

        let invite_url_base = lookup("MOIM_INVITE_URL_BASE")
            .map(|base| base.trim().to_string())
            .filter(|base| !base.is_empty())
            .unwrap_or_else(|| DEFAULT_INVITE_URL_BASE.into());

        let access_token = lookup("MOIM_ACCESS_TOKEN")
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty());

        Ok(Self {
            network,
            invite_url_base,
            access_token,
        })
    }

    /// Shareable link for an invite code.
    pub fn invite_url(&self, code: &str) -> String {
        format!("{}{}", self.invite_url_base, code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.invite_url("ABC"), "https://moimtable.com/invite/ABC");
    }

    #[test]
    fn blank_token_counts_as_unset() {
        let config = AppConfig::from_lookup(|var| match var {
            "MOIM_ACCESS_TOKEN" => Some("  ".into()),
            "MOIM_INVITE_URL_BASE" => Some("https://example.com/i/".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.access_token, None);
        assert_eq!(config.invite_url("X1"), "https://example.com/i/X1");
    }

    #[test]
    fn network_errors_surface() {
        let result = AppConfig::from_lookup(|var| {
            (var == "MOIM_CONNECT_TIMEOUT_SECS").then(|| "-1".to_string())
        });
        assert!(result.is_err());
    }
}
