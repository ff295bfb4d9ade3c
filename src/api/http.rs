//! reqwest-backed implementation of the quote API

use super::{ApiError, QuoteApi};
use crate::constants::*;
use crate::types::QuoteResponse;
use futures::future::{BoxFuture, FutureExt};
use std::time::Duration;
use tracing::{debug, warn};

/// Connection settings for [`HttpQuoteApi`]
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub limit: u32,
    /// Skip TLS certificate and hostname verification. Never enable this
    /// outside of testing against a broken endpoint.
    pub insecure_transport: bool,
    pub timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            limit: DEFAULT_RESULT_LIMIT,
            insecure_transport: false,
            timeout: None,
        }
    }
}

pub struct HttpQuoteApi {
    client: reqwest::Client,
    search_url: reqwest::Url,
}

impl HttpQuoteApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let search_url = search_url(&config.base_url)?;

        let mut builder = reqwest::Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if config.insecure_transport {
            warn!(
                base_url = %config.base_url,
                "TLS certificate and hostname verification disabled"
            );
            builder = builder
                .danger_accept_invalid_certs(true)
                .danger_accept_invalid_hostnames(true);
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        debug!(url = %search_url, "Quote API ready");
        Ok(Self { client, search_url })
    }

    pub fn search_url(&self) -> &reqwest::Url {
        &self.search_url
    }
}

/// Resolve the search endpoint against the base URL. A base without a
/// trailing slash is treated as a directory so its last segment survives.
fn search_url(base_url: &str) -> Result<reqwest::Url, ApiError> {
    let invalid = |reason: String| ApiError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason,
    };

    let trimmed = base_url.trim();
    let mut base = reqwest::Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
    if base.cannot_be_a_base() {
        return Err(invalid("URL cannot be a base".into()));
    }
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(SEARCH_PATH).map_err(|e| invalid(e.to_string()))
}

impl QuoteApi for HttpQuoteApi {
    fn search_quotes(
        &self,
        query: String,
        limit: u32,
    ) -> BoxFuture<'static, Result<QuoteResponse, ApiError>> {
        let client = self.client.clone();
        let url = self.search_url.clone();

        async move {
            let response = client
                .get(url)
                .query(&[("query", query.as_str())])
                .query(&[("limit", limit)])
                .send()
                .await?;

            let status = response.status();
            debug!(status = %status, "Search response received");
            if !status.is_success() {
                let body = response.text().await.ok();
                return Err(ApiError::Status {
                    status: status.as_u16(),
                    body,
                });
            }

            // 204 and `null` both mean no results
            let body = response.bytes().await?;
            if body.iter().all(u8::is_ascii_whitespace) {
                return Ok(QuoteResponse::default());
            }
            serde_json::from_slice::<Option<QuoteResponse>>(&body)
                .map(Option::unwrap_or_default)
                .map_err(|e| ApiError::Decode(format!("error decoding response body: {}", e)))
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Quote;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    fn http_response(status_line: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        )
    }

    /// Accept one connection, answer it with `response` and hand back the
    /// raw request head.
    async fn serve_once(response: String) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&request).into_owned()
        });
        (format!("http://{}/", addr), handle)
    }

    fn api_for(base_url: String) -> HttpQuoteApi {
        HttpQuoteApi::new(&ApiConfig {
            base_url,
            ..ApiConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn search_url_keeps_base_path() {
        assert_eq!(
            search_url("https://api.quotable.io/").unwrap().as_str(),
            "https://api.quotable.io/search/quotes"
        );
        assert_eq!(
            search_url("http://localhost:8080/v1").unwrap().as_str(),
            "http://localhost:8080/v1/search/quotes"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = HttpQuoteApi::new(&ApiConfig {
            base_url: "not a url".into(),
            ..ApiConfig::default()
        })
        .err()
        .unwrap();
        assert!(matches!(err, ApiError::InvalidBaseUrl { .. }));
        assert_eq!(err.category(), "configuration");
    }

    #[test]
    fn insecure_transport_still_builds() {
        let api = HttpQuoteApi::new(&ApiConfig {
            insecure_transport: true,
            timeout: Some(Duration::from_secs(5)),
            ..ApiConfig::default()
        })
        .unwrap();
        assert_eq!(api.search_url().path(), "/search/quotes");
    }

    #[tokio::test]
    async fn sends_query_and_limit() {
        let body = r#"{"count":1,"results":[{"content":"C1","author":"A1"}]}"#;
        let (base, server) = serve_once(http_response("200 OK", body)).await;

        let response = api_for(base)
            .search_quotes("hello world".into(), 5)
            .await
            .unwrap();
        let request = server.await.unwrap();

        assert!(request.starts_with("GET /search/quotes?"), "{request}");
        assert!(request.contains("query=hello+world"), "{request}");
        assert!(request.contains("limit=5"), "{request}");
        assert_eq!(
            response.results,
            vec![Quote {
                content: "C1".into(),
                author: "A1".into()
            }]
        );
    }

    #[tokio::test]
    async fn server_error_keeps_body() {
        let (base, server) =
            serve_once(http_response("500 Internal Server Error", "boom")).await;

        let err = api_for(base)
            .search_quotes("x".into(), 5)
            .await
            .unwrap_err();
        server.await.unwrap();

        assert_eq!(
            err,
            ApiError::Status {
                status: 500,
                body: Some("boom".into())
            }
        );
        assert_eq!(err.user_message(), "Load error: boom");
    }

    #[tokio::test]
    async fn no_content_is_empty_results() {
        let (base, server) = serve_once(
            "HTTP/1.1 204 No Content\r\nConnection: close\r\n\r\n".to_string(),
        )
        .await;

        let response = api_for(base)
            .search_quotes("x".into(), 5)
            .await
            .unwrap();
        server.await.unwrap();

        assert!(response.results.is_empty());
    }

    #[tokio::test]
    async fn null_body_is_empty_results() {
        let (base, server) = serve_once(http_response("200 OK", "null")).await;

        let response = api_for(base)
            .search_quotes("x".into(), 5)
            .await
            .unwrap();
        server.await.unwrap();

        assert!(response.results.is_empty());
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let (base, server) = serve_once(http_response("200 OK", "<html>")).await;

        let err = api_for(base)
            .search_quotes("x".into(), 5)
            .await
            .unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, ApiError::Decode(_)), "{err:?}");
    }

    #[tokio::test]
    async fn refused_connection_is_a_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = api_for(format!("http://{}/", addr))
            .search_quotes("x".into(), 5)
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Transport(_)), "{err:?}");
        assert!(err.user_message().starts_with("Connection error: "));
    }
}
