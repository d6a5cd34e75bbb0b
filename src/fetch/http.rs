// src/fetch/http.rs
// =============================================================================
// The real page fetcher, backed by reqwest.
//
// Before any request goes out, the URL goes through check_url so scheme
// problems get their own error kinds instead of a generic builder error.
// Once a request is sent, reqwest's error flags decide between a
// connection failure and everything else.
//
// HTTP status codes are not inspected: a 404 page is still a page, and it
// may still contain addresses and links.
// =============================================================================

use super::{check_url, FetchError, PageFetcher};
use crate::config::CrawlConfig;
use reqwest::Client;
use tracing::debug;

const MAX_REDIRECTS: usize = 10;

// Fetches pages over HTTP(S)
//
// Holds one reqwest Client so every request of a crawl shares its
// connection pool.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &CrawlConfig) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;

        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let target = check_url(url)?;

        let response = self
            .client
            .get(target)
            .send()
            .await
            .map_err(|e| categorize_error(url, e))?;

        debug!("{} answered HTTP {}", url, response.status().as_u16());

        response.text().await.map_err(|e| categorize_error(url, e))
    }
}

// Timeouts count as connection failures: the page never arrived
fn categorize_error(url: &str, error: reqwest::Error) -> FetchError {
    if error.is_connect() || error.is_timeout() {
        FetchError::ConnectionFailure {
            url: url.to_string(),
            source: Box::new(error),
        }
    } else {
        FetchError::Request {
            url: url.to_string(),
            source: Box::new(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::{
        matchers::{header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn fetcher() -> HttpFetcher {
        HttpFetcher::new(&CrawlConfig::default().with_timeout(Duration::from_secs(2))).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .and(header("user-agent", CrawlConfig::default().user_agent.as_str()))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/html")
                    .set_body_string("<p>hi@there.org</p>"),
            )
            .mount(&mock_server)
            .await;

        let body = fetcher().fetch(&format!("{}/", mock_server.uri())).await.unwrap();
        assert_eq!(body, "<p>hi@there.org</p>");
    }

    #[tokio::test]
    async fn test_error_status_still_yields_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("lost@example.com"))
            .mount(&mock_server)
            .await;

        let body = fetcher()
            .fetch(&format!("{}/missing", mock_server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "lost@example.com");
    }

    #[tokio::test]
    async fn test_refused_connection_is_recoverable() {
        // Bind then drop a listener so the port is very likely closed
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let err = fetcher()
            .fetch(&format!("http://127.0.0.1:{}/", port))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::ConnectionFailure { .. }));
        assert!(err.is_recoverable());
    }

    #[tokio::test]
    async fn test_timeout_is_connection_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&mock_server)
            .await;

        let fetcher = HttpFetcher::new(
            &CrawlConfig::default().with_timeout(Duration::from_millis(200)),
        )
        .unwrap();

        let err = fetcher.fetch(&mock_server.uri()).await.unwrap_err();
        assert!(matches!(err, FetchError::ConnectionFailure { .. }));
    }
}
