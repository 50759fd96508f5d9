//! Authenticated GitHub REST client
//!
//! [`GitHubApi`] is the seam between the fetch logic and the network: the
//! real [`GitHubClient`] wraps a reqwest client, tests plug in fakes.

use async_trait::async_trait;
use reqwest::{header, Client};

use crate::config::{ClientConfig, ACCEPT, API_VERSION};
use crate::error::{Error, Result};

/// Raw HTTP outcome; status handling is left to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Minimal GET access to the GitHub REST API
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// API base URL without trailing slash, e.g. `https://api.github.com`
    fn base_url(&self) -> &str;

    /// GET an absolute URL with query parameters.
    ///
    /// Non-200 statuses are returned as responses, not errors; only transport
    /// failures are `Err`.
    async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<ApiResponse>;
}

/// GitHub REST API client with bearer auth and version headers preset
pub struct GitHubClient {
    base_url: String,
    client: Client,
}

impl GitHubClient {
    /// Build the client. No request is made here.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT, header::HeaderValue::from_static(ACCEPT));
        headers.insert(
            "x-github-api-version",
            header::HeaderValue::from_static(API_VERSION),
        );

        let mut auth_value = header::HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|_| Error::config("Token contains characters not allowed in a header"))?;
        auth_value.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth_value);

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            base_url: config.api_url.clone(),
            client,
        })
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<ApiResponse> {
        log::debug!("GET {} {:?}", url, query);
        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();

        // Error bodies are informational only
        let body = if status.is_success() {
            response.text().await?
        } else {
            response.text().await.unwrap_or_default()
        };

        Ok(ApiResponse {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(token: &str) -> ClientConfig {
        ClientConfig {
            api_url: "https://api.github.com".to_string(),
            token: token.to_string(),
            user_agent: "ghreport/test".to_string(),
        }
    }

    #[test]
    fn test_client_builds_without_network() {
        let client = GitHubClient::new(&config("ghp_abc123")).unwrap();
        assert_eq!(client.base_url(), "https://api.github.com");
    }

    #[test]
    fn test_client_rejects_header_breaking_token() {
        let result = GitHubClient::new(&config("abc\ndef"));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    /// Local server answering once with `status`, announcing more body bytes
    /// than it sends
    async fn truncated_body_server(status: u16) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let head = format!(
                "HTTP/1.1 {} Fixture\r\nContent-Length: 100\r\nConnection: close\r\n\r\n{{\"ite",
                status
            );
            let _ = socket.write_all(head.as_bytes()).await;
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_body_read_failure_on_success_is_transport_error() {
        let base = truncated_body_server(200).await;
        let client = GitHubClient::new(&config("ghp_abc123")).unwrap();

        let result = client.get(&format!("{}/search/issues", base), &[]).await;
        assert!(matches!(result, Err(Error::Http(_))));
    }

    #[tokio::test]
    async fn test_body_read_failure_on_error_status_keeps_status() {
        let base = truncated_body_server(500).await;
        let client = GitHubClient::new(&config("ghp_abc123")).unwrap();

        let response = client.get(&format!("{}/search/issues", base), &[]).await.unwrap();
        assert_eq!(response.status, 500);
    }

    #[test]
    fn test_api_response_is_ok() {
        assert!(ApiResponse::new(200, "{}").is_ok());
        assert!(!ApiResponse::new(201, "{}").is_ok());
        assert!(!ApiResponse::new(403, "").is_ok());
    }
}
