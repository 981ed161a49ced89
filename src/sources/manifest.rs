//! Data source backed by a statically hosted manifest document.

use std::time::Duration;

use reqwest::{Client, Url, header};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::{
    FETCH_TIMEOUT, PLACEHOLDER_APP_ID, PLACEHOLDER_MINIMUM_OS_VERSION, SourceConfiguration,
    USER_AGENT,
};
use crate::error::SourceError;
use crate::model::{LookupResult, VersionRecord};
use crate::source::{SourceType, VersionSource};

/// Raw decoded shape of a remote manifest payload.
///
/// Lives only for the duration of a single fetch; it is mapped into a
/// [`LookupResult`] and dropped. Unknown wire keys are tolerated; a missing
/// `metadata` block or `bundle-identifier`/`bundle-version` key fails the
/// decode.
#[derive(Debug, Deserialize)]
struct ManifestDocument {
    #[serde(default)]
    items: Vec<ManifestItem>,
}

#[derive(Debug, Deserialize)]
struct ManifestItem {
    /// Present in the wire format but not used by normalization.
    #[serde(default)]
    #[allow(dead_code)]
    assets: Vec<ManifestAsset>,
    metadata: ManifestMetadata,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct ManifestAsset {
    #[serde(default)]
    kind: String,
    #[serde(default)]
    url: String,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct ManifestMetadata {
    #[serde(rename = "bundle-identifier")]
    bundle_identifier: String,
    #[serde(rename = "bundle-version")]
    bundle_version: String,
    #[serde(rename = "release-date", default)]
    release_date: String,
    #[serde(rename = "release-notes", default)]
    release_notes: String,
    #[serde(default)]
    kind: String,
    #[serde(rename = "platform-identifier", default)]
    platform_identifier: String,
    #[serde(default)]
    title: String,
}

/// Data source that fetches a manifest document from a caller-supplied URL.
///
/// Unlike [`crate::sources::LookupSource`], the endpoint is late-bound: it
/// must be set with [`ManifestSource::set_endpoint`] after construction and
/// before the first fetch. The country and language fields exist on the
/// configuration but do not shape the manifest URL.
///
/// The manifest wire format carries no catalog id and no minimum OS version,
/// so those fields of the resulting [`VersionRecord`] hold the placeholder
/// constants from [`crate::config`].
pub struct ManifestSource {
    client: Client,
    config: SourceConfiguration,
}

impl ManifestSource {
    /// Creates a manifest source. The country defaults to the default region
    /// and the language to the source default when unset; the endpoint must
    /// still be supplied via [`ManifestSource::set_endpoint`].
    pub fn new(
        country: Option<&str>,
        language: Option<String>,
        bundle_identifier: Option<String>,
    ) -> Self {
        Self::from_configuration(SourceConfiguration::new(country, language, bundle_identifier))
    }

    /// Creates a manifest source from a prebuilt configuration. An endpoint
    /// already present in the configuration makes the
    /// [`ManifestSource::set_endpoint`] step unnecessary.
    pub fn from_configuration(config: SourceConfiguration) -> Self {
        Self {
            client: build_client(FETCH_TIMEOUT),
            config,
        }
    }

    /// Replaces the request timeout so tests do not wait out the real one.
    #[cfg(test)]
    fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.client = build_client(timeout);
        self
    }

    /// Sets the resolved manifest location. Must be called before fetching;
    /// taking `&mut self` keeps the endpoint immutable while a fetch borrows
    /// the source.
    pub fn set_endpoint(&mut self, endpoint: Url) {
        self.config.endpoint = Some(endpoint);
    }

    /// Returns the configured manifest location, if set.
    pub fn endpoint(&self) -> Option<&Url> {
        self.config.endpoint.as_ref()
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
impl VersionSource for ManifestSource {
    fn source_type(&self) -> SourceType {
        SourceType::Manifest
    }

    async fn fetch_version_info(&self) -> Result<LookupResult, SourceError> {
        if self.config.bundle_identifier.is_none() {
            return Err(SourceError::MissingBundleIdentifier);
        }

        let endpoint = self
            .config
            .endpoint
            .as_ref()
            .ok_or(SourceError::MalformedUrl)?;

        debug!("Fetching manifest: {}", endpoint);

        let response = self
            .client
            .get(endpoint.clone())
            .header(header::CACHE_CONTROL, "no-cache")
            .header(header::PRAGMA, "no-cache")
            .send()
            .await?;

        let response = match response.error_for_status() {
            Ok(response) => response,
            Err(err) => {
                warn!("Manifest endpoint returned error status: {}", err);
                return Err(SourceError::DataRetrieval { source: Some(err) });
            }
        };

        let body = response.bytes().await?;
        if body.is_empty() {
            return Err(SourceError::DataRetrieval { source: None });
        }

        let document: ManifestDocument = serde_json::from_slice(&body).map_err(|e| {
            warn!("Failed to parse manifest document: {}", e);
            SourceError::Parse(e)
        })?;

        // A manifest describes exactly one application, so only the first
        // item is relevant.
        let Some(item) = document.items.first() else {
            return Err(SourceError::EmptyResults);
        };

        let record = VersionRecord {
            app_id: PLACEHOLDER_APP_ID,
            current_version_release_date: item.metadata.release_date.clone(),
            minimum_os_version: PLACEHOLDER_MINIMUM_OS_VERSION.to_string(),
            release_notes: item.metadata.release_notes.clone(),
            version: item.metadata.bundle_version.clone(),
        };

        LookupResult::new(vec![record])
    }
}
