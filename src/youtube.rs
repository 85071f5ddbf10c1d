use std::future::Future;
use std::time::Duration;

use eyre::{Result, WrapErr};
use log::{debug, warn};

use crate::config::Config;

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Remote source of caption documents.
///
/// `Ok(None)` means the remote refused or could not be reached, which the
/// pipeline reports as an unavailable transcript. `Err` is reserved for
/// failures after a successful response.
pub trait CaptionProvider {
    /// Raw caption-list document for a video
    fn caption_list(&self, video_id: &str) -> impl Future<Output = Result<Option<String>>> + Send;

    /// Raw timed-text document for a video in `lang`
    fn transcript(&self, video_id: &str, lang: &str) -> impl Future<Output = Result<Option<String>>> + Send;
}

/// Client for the public timed-text endpoints
#[derive(Debug, Clone)]
pub struct TimedTextClient {
    client: reqwest::Client,
    caption_list_url: String,
    transcript_url: String,
}

impl TimedTextClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().wrap_err("failed to build HTTP client")?;

        Ok(Self {
            client,
            caption_list_url: config.caption_list_url.clone(),
            transcript_url: config.transcript_url.clone(),
        })
    }

    async fn get_text(&self, url: &str, query: &[(&str, &str)]) -> Result<Option<String>> {
        debug!("GET {url} {query:?}");

        let resp = match self.client.get(url).query(query).send().await {
            Ok(resp) => resp,
            Err(e) => {
                warn!("Request to {url} failed: {e}");
                return Ok(None);
            }
        };

        if !resp.status().is_success() {
            warn!("{url} returned {}", resp.status());
            return Ok(None);
        }

        let body = resp.text().await.wrap_err_with(|| format!("failed to read body from {url}"))?;
        Ok(Some(body))
    }
}

impl CaptionProvider for TimedTextClient {
    async fn caption_list(&self, video_id: &str) -> Result<Option<String>> {
        self.get_text(&self.caption_list_url, &[("type", "list"), ("v", video_id)])
            .await
    }

    async fn transcript(&self, video_id: &str, lang: &str) -> Result<Option<String>> {
        self.get_text(&self.transcript_url, &[("v", video_id), ("lang", lang)])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_uses_configured_endpoints() {
        let config = Config {
            caption_list_url: "http://localhost:1/list".to_string(),
            transcript_url: "http://localhost:1/text".to_string(),
            request_timeout_secs: Some(2),
            ..Config::default()
        };
        let client = TimedTextClient::new(&config).unwrap();
        assert_eq!(client.caption_list_url, "http://localhost:1/list");
        assert_eq!(client.transcript_url, "http://localhost:1/text");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_unavailable() {
        let config = Config {
            caption_list_url: "http://127.0.0.1:1/timedtext".to_string(),
            transcript_url: "http://127.0.0.1:1/timedtext".to_string(),
            request_timeout_secs: Some(2),
            ..Config::default()
        };
        let client = TimedTextClient::new(&config).unwrap();
        assert!(client.caption_list("dQw4w9WgXcQ").await.unwrap().is_none());
        assert!(client.transcript("dQw4w9WgXcQ", "en").await.unwrap().is_none());
    }
}
