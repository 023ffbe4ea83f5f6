use std::sync::RwLock;

/// Holds the bearer token attached to API requests.
///
/// Persisting the token across launches is up to the embedding platform;
/// it only has to hand the current value to the client on demand.
pub trait TokenStore: Send + Sync {
    fn access_token(&self) -> Option<String>;
    fn set_access_token(&self, token: Option<String>);
}

/// Process-local token store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: RwLock::new(token),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn access_token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn set_access_token(&self, token: Option<String>) {
        *self
            .token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = token;
    }
}
