use async_trait::async_trait;

use lafires_core::UPSTREAM_TIMEOUT_SECS;

use crate::deadlines::{parse_deadlines, Deadline};
use crate::error::TrackerError;
use crate::extract::extract_content;

const DEFAULT_PROGRESS_URL: &str = "https://www.ca.gov/lafires/track-progress/";
const DEFAULT_DEADLINES_URL: &str = "https://www.ca.gov/lafires/";

/// Capability: cleaned text from the external status pages.
#[async_trait]
pub trait ProgressTracker: Send + Sync {
    /// Recovery-progress content, one string per text block.
    async fn progress(&self) -> Result<Vec<String>, TrackerError>;

    /// Published deadlines, sorted ascending by date.
    async fn deadlines(&self) -> Result<Vec<Deadline>, TrackerError>;
}

/// Tracker backed by the ca.gov LA fires pages.
#[derive(Debug)]
pub struct CaGovTracker {
    client: reqwest::Client,
    progress_url: String,
    deadlines_url: String,
}

impl CaGovTracker {
    /// Creates a tracker for the default ca.gov pages.
    ///
    /// `LAFIRES_PROGRESS_URL` and `LAFIRES_DEADLINES_URL` override the
    /// page locations, mainly so tests can point at a local server.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new() -> Result<Self, TrackerError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(UPSTREAM_TIMEOUT_SECS))
            .build()
            .map_err(|e| TrackerError::ClientInit(e.to_string()))?;
        Ok(Self {
            client,
            progress_url: std::env::var("LAFIRES_PROGRESS_URL")
                .unwrap_or_else(|_| DEFAULT_PROGRESS_URL.to_owned()),
            deadlines_url: std::env::var("LAFIRES_DEADLINES_URL")
                .unwrap_or_else(|_| DEFAULT_DEADLINES_URL.to_owned()),
        })
    }

    async fn fetch_page(&self, url: &str) -> Result<String, TrackerError> {
        tracing::debug!(url, "fetching status page");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TrackerError::HttpStatus { code: status.as_u16() });
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl ProgressTracker for CaGovTracker {
    async fn progress(&self) -> Result<Vec<String>, TrackerError> {
        let html = self.fetch_page(&self.progress_url).await?;
        let content = extract_content(&html);
        if content.is_empty() {
            tracing::warn!(url = %self.progress_url, "progress page had no extractable content");
        }
        Ok(content)
    }

    async fn deadlines(&self) -> Result<Vec<Deadline>, TrackerError> {
        let html = self.fetch_page(&self.deadlines_url).await?;
        let deadlines = parse_deadlines(&html);
        if deadlines.is_empty() {
            tracing::warn!(url = %self.deadlines_url, "no deadline cards found on page");
        }
        Ok(deadlines)
    }
}
