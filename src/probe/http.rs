//! HEAD-request prober backed by `reqwest`.

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use url::Url;

use super::{Probe, ValidationResult};
use crate::error_handling::{categorize_reqwest_error, describe_error, InfoType, ProcessingStats};

/// Probes URLs with a HEAD request, following redirects.
///
/// The client is supplied by the caller (see `initialization::init_client`),
/// so its User-Agent and redirect policy are configured once and shared
/// across every probe.
#[derive(Clone)]
pub struct HttpProber {
    client: Arc<reqwest::Client>,
    stats: Option<Arc<ProcessingStats>>,
}

impl HttpProber {
    /// Creates a prober over `client`.
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        Self {
            client,
            stats: None,
        }
    }

    /// Records probe counts and failure categories into `stats`.
    pub fn with_stats(mut self, stats: Arc<ProcessingStats>) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Shared statistics, if attached.
    pub fn stats(&self) -> Option<&Arc<ProcessingStats>> {
        self.stats.as_ref()
    }

    async fn head(&self, url: &str, timeout: Duration) -> ValidationResult {
        // Dropping the send future on timeout aborts the request and frees its connection
        let response = match tokio::time::timeout(timeout, self.client.head(url).send()).await {
            Ok(Ok(resp)) => resp,
            Ok(Err(e)) if e.is_timeout() => return ValidationResult::timeout(),
            Ok(Err(e)) => {
                return ValidationResult::transport_error(
                    categorize_reqwest_error(&e),
                    describe_error(&e),
                );
            }
            Err(_) => return ValidationResult::timeout(),
        };

        let final_url = response.url();
        // Compare parsed forms; reqwest adds a trailing slash to bare origins
        if Url::parse(url).ok().as_ref() != Some(final_url) {
            self.record_info(InfoType::HttpRedirect);
            if url.starts_with("http://") && final_url.scheme() == "https" {
                self.record_info(InfoType::HttpsRedirect);
            }
            debug!("Probe for {url} ended at {final_url}");
        }

        ValidationResult::from_status(response.status().as_u16())
    }

    fn record_info(&self, info: InfoType) {
        if let Some(stats) = &self.stats {
            stats.increment_info(info);
        }
    }
}

impl Probe for HttpProber {
    async fn probe(&self, url: &str, timeout: Duration) -> ValidationResult {
        let result = self.head(url, timeout).await;

        if let Some(stats) = &self.stats {
            stats.increment_probes();
            if let Some(failure) = result.failure {
                stats.increment_error(failure);
            }
        }

        match (&result.status, &result.message) {
            _ if result.is_timeout() => {
                debug!("Probe {url} timed out after {}ms", timeout.as_millis())
            }
            (Some(status), _) => debug!("Probe {url} -> {status}"),
            (None, Some(message)) => debug!("Probe {url} failed: {message}"),
            (None, None) => debug!("Probe {url} failed"),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_USER_AGENT;
    use crate::error_handling::ErrorType;
    use crate::initialization::init_client;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn prober_with_stats() -> (HttpProber, Arc<ProcessingStats>) {
        let client = init_client(DEFAULT_USER_AGENT).expect("client");
        let stats = Arc::new(ProcessingStats::new());
        (HttpProber::new(client).with_stats(Arc::clone(&stats)), stats)
    }

    #[tokio::test]
    async fn test_probe_success_uses_head_and_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .and(path("/dp/B0CHX3TM6V"))
            .and(header("user-agent", DEFAULT_USER_AGENT))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let (prober, stats) = prober_with_stats();
        let url = format!("{}/dp/B0CHX3TM6V", server.uri());
        let result = prober.probe(&url, Duration::from_secs(5)).await;

        assert!(result.is_valid);
        assert_eq!(result.status, Some(200));
        assert_eq!(stats.total_probes(), 1);
        assert_eq!(stats.total_errors(), 0);
    }

    #[tokio::test]
    async fn test_probe_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let (prober, stats) = prober_with_stats();
        let result = prober
            .probe(&format!("{}/itm/12345", server.uri()), Duration::from_secs(5))
            .await;

        assert!(!result.is_valid);
        assert_eq!(result.status, Some(404));
        assert_eq!(result.message.as_deref(), Some("HTTP 404"));
        assert_eq!(stats.get_error_count(ErrorType::HttpRequestNotFound), 1);
    }

    #[tokio::test]
    async fn test_probe_follows_redirects() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .and(path("/old"))
            .respond_with(
                ResponseTemplate::new(301)
                    .insert_header("location", format!("{}/new", server.uri()).as_str()),
            )
            .mount(&server)
            .await;
        Mock::given(method("HEAD"))
            .and(path("/new"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let (prober, stats) = prober_with_stats();
        let result = prober
            .probe(&format!("{}/old", server.uri()), Duration::from_secs(5))
            .await;

        assert!(result.is_valid);
        assert_eq!(result.status, Some(200));
        assert_eq!(stats.get_info_count(InfoType::HttpRedirect), 1);
    }

    #[tokio::test]
    async fn test_bare_origin_is_not_counted_as_redirect() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let (prober, stats) = prober_with_stats();
        // No trailing slash: the request goes to "/" but the URL is unchanged
        let result = prober.probe(&server.uri(), Duration::from_secs(5)).await;

        assert!(result.is_valid);
        assert_eq!(stats.get_info_count(InfoType::HttpRedirect), 0);
        assert_eq!(stats.total_info(), 0);
    }

    #[tokio::test]
    async fn test_probe_redirect_to_missing_page_is_invalid() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .and(path("/old"))
            .respond_with(
                ResponseTemplate::new(302)
                    .insert_header("location", format!("{}/gone", server.uri()).as_str()),
            )
            .mount(&server)
            .await;
        Mock::given(method("HEAD"))
            .and(path("/gone"))
            .respond_with(ResponseTemplate::new(410))
            .mount(&server)
            .await;

        let (prober, _) = prober_with_stats();
        let result = prober
            .probe(&format!("{}/old", server.uri()), Duration::from_secs(5))
            .await;

        assert!(!result.is_valid);
        assert_eq!(result.status, Some(410));
    }

    #[tokio::test]
    async fn test_probe_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&server)
            .await;

        let (prober, stats) = prober_with_stats();
        let start = std::time::Instant::now();
        let result = prober
            .probe(&format!("{}/slow", server.uri()), Duration::from_millis(200))
            .await;

        assert!(start.elapsed() < Duration::from_secs(2));
        assert!(!result.is_valid);
        assert!(result.status.is_none());
        assert_eq!(result.message.as_deref(), Some("timeout"));
        assert_eq!(stats.get_error_count(ErrorType::HttpRequestTimeoutError), 1);
    }

    #[tokio::test]
    async fn test_probe_connection_refused() {
        // Bind then drop a listener so the port is very likely closed
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().expect("addr").port();
        drop(listener);

        let (prober, stats) = prober_with_stats();
        let result = prober
            .probe(&format!("http://127.0.0.1:{port}/"), Duration::from_secs(5))
            .await;

        assert!(!result.is_valid);
        assert!(result.status.is_none());
        assert!(result.message.is_some_and(|m| !m.is_empty()));
        assert_eq!(stats.total_errors(), 1);
    }

    #[tokio::test]
    async fn test_probe_unparsable_url() {
        let (prober, stats) = prober_with_stats();
        let result = prober
            .probe("www.amazon.com/dp/B000123", Duration::from_secs(1))
            .await;

        assert!(!result.is_valid);
        assert_eq!(result.failure, Some(ErrorType::HttpRequestBuilderError));
        assert_eq!(stats.total_probes(), 1);
    }

    #[tokio::test]
    async fn test_long_search_url_is_sent() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        // 60 CJK product names encode to well over 2 KB of query string
        let name = "无线耳机".repeat(60);
        let url = format!("{}/search?q={}", server.uri(), urlencoding::encode(&name));
        assert!(url.len() > 2048);

        let (prober, stats) = prober_with_stats();
        let result = prober.probe(&url, Duration::from_secs(5)).await;

        assert!(result.is_valid);
        assert_eq!(result.status, Some(200));
        assert_eq!(stats.total_errors(), 0);
    }

    #[tokio::test]
    async fn test_prober_without_stats() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = init_client(DEFAULT_USER_AGENT).expect("client");
        let prober = HttpProber::new(client);
        let result = prober.probe(&server.uri(), Duration::from_secs(5)).await;

        assert!(result.is_valid);
        assert!(prober.stats().is_none());
    }
}
