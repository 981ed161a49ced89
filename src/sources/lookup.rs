//! Data source backed by a JSON catalog lookup API.

use std::time::Duration;

use reqwest::{Client, Url, header};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::{FETCH_TIMEOUT, SourceConfiguration, USER_AGENT};
use crate::error::SourceError;
use crate::model::{LookupResult, VersionRecord};
use crate::source::{SourceType, VersionSource};

/// Default base URL for the catalog lookup API
const DEFAULT_BASE_URL: &str = "https://itunes.apple.com";

/// Response from the catalog lookup API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupResponse {
    #[serde(default)]
    result_count: i64,
    #[serde(default)]
    results: Vec<LookupEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupEntry {
    #[serde(default)]
    track_id: i64,
    version: String,
    #[serde(default)]
    release_notes: String,
    #[serde(default)]
    current_version_release_date: String,
    #[serde(default)]
    minimum_os_version: String,
}

/// Data source that queries a catalog lookup API by bundle identifier.
///
/// The request URL is derived from the configured bundle identifier, country
/// and optional language tag; unlike [`crate::sources::ManifestSource`] there
/// is no late-bound endpoint to set.
pub struct LookupSource {
    client: Client,
    config: SourceConfiguration,
    base_url: String,
}

impl LookupSource {
    /// Creates a lookup source against the default catalog. The country
    /// defaults to the default region; `language` of `None` leaves metadata
    /// in the catalog's default language.
    pub fn new(
        country: Option<&str>,
        language: Option<String>,
        bundle_identifier: Option<String>,
    ) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, country, language, bundle_identifier)
    }

    /// Creates a lookup source against a custom catalog base URL.
    pub fn with_base_url(
        base_url: &str,
        country: Option<&str>,
        language: Option<String>,
        bundle_identifier: Option<String>,
    ) -> Self {
        Self {
            client: build_client(FETCH_TIMEOUT),
            config: SourceConfiguration::new(country, language, bundle_identifier),
            base_url: base_url.to_string(),
        }
    }

    /// Creates a lookup source against the default catalog from a prebuilt
    /// configuration. The configuration's `endpoint` field is not used; the
    /// lookup URL is derived from the other fields.
    pub fn from_configuration(config: SourceConfiguration) -> Self {
        Self {
            client: build_client(FETCH_TIMEOUT),
            config,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Replaces the request timeout so tests do not wait out the real one.
    #[cfg(test)]
    fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.client = build_client(timeout);
        self
    }

    fn lookup_url(&self, bundle_identifier: &str) -> Result<Url, SourceError> {
        let mut url = Url::parse(&format!("{}/lookup", self.base_url))
            .map_err(|_| SourceError::MalformedUrl)?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("bundleId", bundle_identifier);
            query.append_pair("country", self.config.country.code());
            if let Some(language) = &self.config.language {
                query.append_pair("lang", language);
            }
        }
        Ok(url)
    }
}

fn build_client(timeout: Duration) -> Client {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .expect("Failed to create HTTP client")
}

#[async_trait::async_trait]
impl VersionSource for LookupSource {
    fn source_type(&self) -> SourceType {
        SourceType::Lookup
    }

    async fn fetch_version_info(&self) -> Result<LookupResult, SourceError> {
        let Some(bundle_identifier) = self.config.bundle_identifier.as_deref() else {
            return Err(SourceError::MissingBundleIdentifier);
        };

        let url = self.lookup_url(bundle_identifier)?;
        debug!("Fetching lookup catalog: {}", url);

        let response = self
            .client
            .get(url)
            .header(header::CACHE_CONTROL, "no-cache")
            .header(header::PRAGMA, "no-cache")
            .send()
            .await?;

        let response = match response.error_for_status() {
            Ok(response) => response,
            Err(err) => {
                warn!("Lookup catalog returned error status: {}", err);
                return Err(SourceError::DataRetrieval { source: Some(err) });
            }
        };

        let body = response.bytes().await?;
        if body.is_empty() {
            return Err(SourceError::DataRetrieval { source: None });
        }

        let lookup: LookupResponse = serde_json::from_slice(&body).map_err(|e| {
            warn!("Failed to parse lookup response: {}", e);
            SourceError::Parse(e)
        })?;

        debug!(
            "Lookup returned {} results for {}",
            lookup.result_count, bundle_identifier
        );

        if lookup.results.is_empty() {
            return Err(SourceError::EmptyResults);
        }

        let records = lookup
            .results
            .into_iter()
            .map(|entry| VersionRecord {
                app_id: entry.track_id,
                current_version_release_date: entry.current_version_release_date,
                minimum_os_version: entry.minimum_os_version,
                release_notes: entry.release_notes,
                version: entry.version,
            })
            .collect();

        LookupResult::new(records)
    }
}
