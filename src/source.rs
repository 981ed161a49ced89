//! The fetch-and-normalize contract every data source implements.

#[cfg(test)]
use mockall::automock;

use crate::error::SourceError;
use crate::model::LookupResult;

/// Kind of data source backing a version check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceType {
    /// JSON catalog API queried by bundle identifier and region.
    Lookup,
    /// Statically hosted manifest document at a caller-supplied URL.
    Manifest,
    /// No concrete source selected yet.
    Unconfigured,
}

impl SourceType {
    /// Returns the string representation of the source type.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Lookup => "lookup",
            SourceType::Manifest => "manifest",
            SourceType::Unconfigured => "unconfigured",
        }
    }
}

/// Trait for fetching normalized version metadata from a remote catalog.
///
/// Implementations perform exactly one outbound request per call, own all
/// per-call state, and surface every failure as a [`SourceError`]. Dropping
/// the returned future aborts the request; no partial result is ever
/// produced.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionSource: Send + Sync {
    /// Returns the kind of source this implementation queries.
    fn source_type(&self) -> SourceType;

    /// Fetches the remote catalog and normalizes the payload.
    ///
    /// # Returns
    /// * `Ok(LookupResult)` - Non-empty set of version records
    /// * `Err(SourceError)` - If any step of the fetch or decode fails
    async fn fetch_version_info(&self) -> Result<LookupResult, SourceError>;
}

/// Placeholder source used before a concrete source is selected.
///
/// Fetching always fails with [`SourceError::NotConfigured`] and performs no
/// I/O, so accidental use of an unconfigured checker surfaces loudly instead
/// of returning stale or empty data.
#[derive(Debug, Default)]
pub struct UnconfiguredSource;

#[async_trait::async_trait]
impl VersionSource for UnconfiguredSource {
    fn source_type(&self) -> SourceType {
        SourceType::Unconfigured
    }

    async fn fetch_version_info(&self) -> Result<LookupResult, SourceError> {
        Err(SourceError::NotConfigured)
    }
}
