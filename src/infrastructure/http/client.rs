// src/infrastructure/http/client.rs
use crate::application::ports::remote::{TransportError, TransportResult};
use bytes::Bytes;
use reqwest::{
    Client, Method, StatusCode,
    header::{CONTENT_TYPE, HeaderMap, HeaderValue},
};
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Method, headers and body of one outbound request.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn delete() -> Self {
        Self {
            method: Method::DELETE,
            ..Self::default()
        }
    }

    pub fn json(method: Method, body: impl Into<Bytes>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Self {
            method,
            headers,
            body: Some(body.into()),
        }
    }
}

/// Whatever came back, including non-2xx statuses; judging the status is
/// the caller's job.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Single-attempt HTTP client that abandons a request once its deadline
/// passes. No retries.
#[derive(Debug, Clone)]
pub struct TimeoutHttpClient {
    client: Client,
    timeout: Duration,
}

impl Default for TimeoutHttpClient {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl TimeoutHttpClient {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            timeout,
        }
    }

    pub async fn send(&self, url: &str, options: RequestOptions) -> TransportResult<RawResponse> {
        self.send_with_timeout(url, options, self.timeout).await
    }

    pub async fn send_with_timeout(
        &self,
        url: &str,
        options: RequestOptions,
        timeout: Duration,
    ) -> TransportResult<RawResponse> {
        tracing::debug!(url, method = %options.method, "attempting remote request");

        let mut request = self
            .client
            .request(options.method, url)
            .headers(options.headers);
        if let Some(body) = options.body {
            request = request.body(body);
        }

        let exchange = async move {
            let response = request.send().await?;
            let status = response.status();
            let body = response.bytes().await?;
            Ok::<_, reqwest::Error>(RawResponse { status, body })
        };

        // Dropping the in-flight future on expiry aborts the request.
        match tokio::time::timeout(timeout, exchange).await {
            Ok(Ok(response)) => Ok(response),
            Ok(Err(err)) => {
                tracing::warn!(url, error = %err, "remote request failed");
                Err(TransportError::Network {
                    url: url.to_string(),
                    message: err.to_string(),
                })
            }
            Err(_) => {
                let timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
                tracing::warn!(url, timeout_ms, "remote request timed out");
                Err(TransportError::Timeout {
                    url: url.to_string(),
                    timeout_ms,
                })
            }
        }
    }
}
