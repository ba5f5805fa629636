//! Access to the upstream transactions API

use async_trait::async_trait;
use gofinances_config::Config;
#[cfg(any(test, feature = "test-util"))]
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::error::{CoreError, CoreResult};
use crate::models::TransactionsResponse;

/// Source of the transaction list and balance
#[async_trait]
pub trait TransactionsApi: Send + Sync {
    /// Read the full list and balance. One call is one upstream request.
    async fn fetch_transactions(&self) -> CoreResult<TransactionsResponse>;
}

/// Shared handle to the API
pub type ApiRef = Arc<dyn TransactionsApi>;

/// reqwest-backed client for `GET /transactions`
pub struct HttpTransactionsApi {
    http_client: reqwest::Client,
    url: String,
}

impl HttpTransactionsApi {
    /// Use a preconfigured reqwest client
    pub fn with_client(http_client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http_client,
            url: url.into(),
        }
    }

    /// Client for the configured URL, honouring `api.timeout_secs` when set.
    /// The config is validated first since it may have been built in code.
    pub fn from_config(config: &Config) -> CoreResult<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.api.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder.build().map_err(|e| CoreError::ConfigError {
            message: format!("Failed to build HTTP client: {}", e),
        })?;

        Ok(Self {
            http_client,
            url: config.transactions_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl TransactionsApi for HttpTransactionsApi {
    async fn fetch_transactions(&self) -> CoreResult<TransactionsResponse> {
        log::debug!("GET {}", self.url);

        let response = self.http_client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CoreError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let payload: TransactionsResponse = serde_json::from_slice(&bytes)?;
        log::debug!(
            "Received {} transactions from {}",
            payload.transactions.len(),
            self.url
        );
        Ok(payload)
    }
}

/// Serves a fixed response, or a fixed failure, and counts calls.
/// Stands in for the API in tests.
#[cfg(any(test, feature = "test-util"))]
#[derive(Debug)]
pub struct StaticTransactionsApi {
    response: Option<TransactionsResponse>,
    failure_status: u16,
    calls: AtomicUsize,
}

#[cfg(any(test, feature = "test-util"))]
impl StaticTransactionsApi {
    pub fn new(response: TransactionsResponse) -> Self {
        Self {
            response: Some(response),
            failure_status: 0,
            calls: AtomicUsize::new(0),
        }
    }

    /// Every call fails as if the API answered with `status`
    pub fn failing(status: u16) -> Self {
        Self {
            response: None,
            failure_status: status,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of fetches served so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[cfg(any(test, feature = "test-util"))]
#[async_trait]
impl TransactionsApi for StaticTransactionsApi {
    async fn fetch_transactions(&self) -> CoreResult<TransactionsResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Some(response) => Ok(response.clone()),
            None => Err(CoreError::UpstreamStatus {
                status: self.failure_status,
                body: String::new(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use axum::{http::StatusCode, routing::get, Router};

    /// Serve `router` on an ephemeral local port and return its base URL
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn local_api(base: &str) -> HttpTransactionsApi {
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        HttpTransactionsApi::with_client(client, format!("{}/transactions", base))
    }

    #[tokio::test]
    async fn test_http_client_reads_payload() {
        let router = Router::new().route(
            "/transactions",
            get(|| async {
                (
                    [("content-type", "application/json")],
                    r#"{"transactions":[{"id":"1","title":"Salary","value":500,"type":"income","category":{"title":"Work"},"created_at":"2020-05-24T00:00:00Z"}],"balance":{"income":500,"outcome":200,"total":300}}"#,
                )
            }),
        );
        let base = serve(router).await;

        let api = local_api(&base);
        let response = api.fetch_transactions().await.unwrap();
        assert_eq!(response.transactions.len(), 1);
        assert_eq!(response.transactions[0].title, "Salary");
        assert_eq!(response.balance.total, 300.0);
    }

    #[tokio::test]
    async fn test_http_client_reports_status() {
        let router = Router::new().route(
            "/transactions",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
        );
        let base = serve(router).await;

        let api = local_api(&base);
        let error = api.fetch_transactions().await.unwrap_err();
        assert!(matches!(error, CoreError::UpstreamStatus { status: 503, ref body } if body == "down"));
    }

    #[tokio::test]
    async fn test_http_client_rejects_malformed_payload() {
        let router = Router::new().route("/transactions", get(|| async { r#"{"transactions": []}"# }));
        let base = serve(router).await;

        let api = local_api(&base);
        let error = api.fetch_transactions().await.unwrap_err();
        assert_eq!(error.code(), ErrorCode::InvalidPayload);
    }

    #[test]
    fn test_from_config_uses_transactions_url() {
        let config = Config::from_yaml("api:\n  base_url: http://api.local:3333\n  timeout_secs: 5\n").unwrap();
        let api = HttpTransactionsApi::from_config(&config).unwrap();
        assert_eq!(api.url(), "http://api.local:3333/transactions");
    }

    #[test]
    fn test_from_config_rejects_invalid_config() {
        let mut config = Config::default();
        config.api.base_url = "localhost:3333".to_string();
        let error = HttpTransactionsApi::from_config(&config).err().unwrap();
        assert_eq!(error.code(), ErrorCode::ConfigError);
        assert!(error.to_string().contains("api.base_url"));
    }

    #[tokio::test]
    async fn test_static_api_counts_calls() {
        let api = StaticTransactionsApi::new(TransactionsResponse::default());
        api.fetch_transactions().await.unwrap();
        assert_eq!(api.calls(), 1);

        let failing = StaticTransactionsApi::failing(500);
        assert!(failing.fetch_transactions().await.is_err());
        assert_eq!(failing.calls(), 1);
    }
}
