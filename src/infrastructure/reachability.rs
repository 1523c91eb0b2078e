// src/infrastructure/reachability.rs
use crate::{
    application::ports::reachability::ReachabilityProbe,
    infrastructure::http::{RequestOptions, TimeoutHttpClient},
};
use async_trait::async_trait;

/// Fixed answer. `offline()` is the default deployment mode: the remote API
/// is never contacted and everything is served from the local store.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticReachability {
    reachable: bool,
}

impl StaticReachability {
    pub fn offline() -> Self {
        Self { reachable: false }
    }

    pub fn online() -> Self {
        Self { reachable: true }
    }
}

#[async_trait]
impl ReachabilityProbe for StaticReachability {
    async fn is_reachable(&self) -> bool {
        self.reachable
    }
}

/// Asks a health endpoint before every call. Any 2xx means reachable;
/// everything else, including transport errors, means not.
#[derive(Debug, Clone)]
pub struct HttpReachability {
    http: TimeoutHttpClient,
    url: String,
}

impl HttpReachability {
    pub fn new(url: impl Into<String>, http: TimeoutHttpClient) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }
}

#[async_trait]
impl ReachabilityProbe for HttpReachability {
    async fn is_reachable(&self) -> bool {
        match self.http.send(&self.url, RequestOptions::get()).await {
            Ok(response) if response.status.is_success() => true,
            Ok(response) => {
                tracing::debug!(
                    url = %self.url,
                    status = %response.status,
                    "health check rejected"
                );
                false
            }
            Err(err) => {
                tracing::debug!(url = %self.url, error = %err, "health check failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::time::Duration;

    #[tokio::test]
    async fn static_probe_defaults_to_offline() {
        assert!(!StaticReachability::default().is_reachable().await);
        assert!(StaticReachability::online().is_reachable().await);
    }

    #[tokio::test]
    async fn http_probe_follows_health_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/health");
                then.status(200);
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/sick");
                then.status(503);
            })
            .await;

        let http = TimeoutHttpClient::new(Duration::from_millis(500));
        assert!(HttpReachability::new(server.url("/health"), http.clone()).is_reachable().await);
        assert!(!HttpReachability::new(server.url("/sick"), http).is_reachable().await);
    }
}
