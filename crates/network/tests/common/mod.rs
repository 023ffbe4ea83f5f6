use std::sync::Arc;

use axum::Router;
use moim_network::{ApiClient, MemoryTokenStore, NetworkConfig, Services};

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/")
}

/// Build the resource services against `base_url`, optionally signed in.
pub fn services(base_url: &str, token: Option<&str>) -> Services {
    let config = NetworkConfig {
        base_url: base_url.to_string(),
        request_timeout_secs: 5,
        connect_timeout_secs: 2,
    };
    let tokens = Arc::new(MemoryTokenStore::new(token.map(str::to_string)));
    Services::new(ApiClient::new(&config, tokens).unwrap())
}
