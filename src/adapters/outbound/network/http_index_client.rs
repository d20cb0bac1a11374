use crate::dependency_resolution::domain::INDEX_ARTIFACT_NAMES;
use crate::ports::outbound::FetchedIndex;
use crate::shared::security::{validate_file_size, MAX_INDEX_SIZE};
use crate::shared::{ApkError, Result};
use std::time::Duration;

/// Per-request timeout for index downloads
const REQUEST_TIMEOUT_SECS: u64 = 20;

/// HttpIndexClient adapter for downloading an APKINDEX over HTTP(S)
///
/// Tries `APKINDEX.tar.gz` first and `APKINDEX` second below the
/// repository base URL. There is no retry beyond that fallback.
pub struct HttpIndexClient {
    client: reqwest::blocking::Client,
}

impl HttpIndexClient {
    /// Creates a client with the default 20 second timeout
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let user_agent = format!("apk-deps/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    /// Downloads the first non-empty index artifact below `repo_url`
    ///
    /// # Errors
    /// Returns [`ApkError::FetchError`] carrying the base URL and the last
    /// failure if no candidate could be downloaded
    pub fn fetch(&self, repo_url: &str) -> Result<FetchedIndex> {
        let base_url = normalize_base_url(repo_url);
        let mut last_error = None;

        for artifact in INDEX_ARTIFACT_NAMES {
            let url = format!("{}{}", base_url, artifact);
            match self.download(&url) {
                Ok(bytes) => return Ok(FetchedIndex::new(url, bytes)),
                Err(e) => last_error = Some(e),
            }
        }

        Err(ApkError::FetchError {
            location: base_url,
            details: last_error
                .map(|e| format!("{:#}", e))
                .unwrap_or_else(|| "no candidate was tried".to_string()),
            hint: "Check that the URL points at a repository directory containing APKINDEX.tar.gz (e.g. .../alpine/v3.18/main/x86_64/)".to_string(),
        }
        .into())
    }

    /// Single GET; non-2xx statuses and empty bodies count as failures
    fn download(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("{} returned HTTP status {}", url, status);
        }

        let body = response.bytes()?;
        if body.is_empty() {
            anyhow::bail!("{} returned an empty body", url);
        }
        validate_file_size(body.len() as u64, url, MAX_INDEX_SIZE)?;

        Ok(body.to_vec())
    }
}

/// Ensures exactly one trailing `/` so artifact names can be appended
fn normalize_base_url(url: &str) -> String {
    format!("{}/", url.trim_end_matches('/'))
}
