use moim_core::DataError;

/// Errors from the REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, or a
    /// body that could not be read or decoded).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The configured API root is not a usable `http(s)` URL.
    #[error("Invalid API base URL {url:?}: {reason}")]
    BaseUrl { url: String, reason: String },

    /// A local file meant for upload could not be read.
    #[error("Failed to read upload: {0}")]
    Upload(#[from] std::io::Error),
}

impl From<NetworkError> for DataError {
    fn from(err: NetworkError) -> Self {
        match err {
            NetworkError::Request(e) if e.is_decode() => DataError::Decode(e.to_string()),
            NetworkError::Request(e) => DataError::Network(e.to_string()),
            NetworkError::Api { status, body } => DataError::Server {
                status,
                message: server_message(status, &body),
            },
            NetworkError::Upload(e) => DataError::Network(e.to_string()),
            e @ NetworkError::BaseUrl { .. } => DataError::Network(e.to_string()),
        }
    }
}

/// The `message` field of a JSON error body, else the raw body, else the
/// status line.
fn server_message(status: u16, body: &str) -> String {
    let from_json = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_owned))
        .filter(|m| !m.is_empty());

    match from_json {
        Some(message) => message,
        None if !body.trim().is_empty() => body.trim().to_string(),
        None => reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Unknown error")
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_errors_prefer_the_json_message() {
        let err = DataError::from(NetworkError::Api {
            status: 409,
            body: r#"{"code":"M001","message":"Already a member"}"#.into(),
        });
        assert_eq!(
            err,
            DataError::Server { status: 409, message: "Already a member".into() }
        );
    }

    #[test]
    fn api_errors_fall_back_to_body_then_reason() {
        let err = DataError::from(NetworkError::Api { status: 502, body: "bad gateway".into() });
        assert_eq!(err.to_string(), "Server error (502): bad gateway");

        let err = DataError::from(NetworkError::Api { status: 404, body: String::new() });
        assert_eq!(err, DataError::Server { status: 404, message: "Not Found".into() });
    }

    #[test]
    fn unreadable_upload_is_a_network_failure() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        assert_eq!(
            DataError::from(NetworkError::from(io)).kind(),
            moim_core::ErrorKind::Network
        );
    }
}
