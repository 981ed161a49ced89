//! Per-source configuration and shared constants.

use reqwest::Url;
use std::time::Duration;

// =============================================================================
// Fetch constants
// =============================================================================

/// Timeout applied to every fetch request (30 seconds).
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// User-Agent sent with every outbound request.
pub(crate) const USER_AGENT: &str = concat!("update-check/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Placeholder values
// =============================================================================

/// Catalog id reported by sources whose wire format carries no native
/// application id (manifest sources).
pub const PLACEHOLDER_APP_ID: i64 = 0;

/// Minimum OS version reported by sources whose wire format does not carry
/// the field (manifest sources).
pub const PLACEHOLDER_MINIMUM_OS_VERSION: &str = "0.0.0";

/// Two-letter region code identifying the catalog storefront to query.
///
/// Construction never fails: anything that is not a two-ASCII-letter code
/// falls back to the default region. The full region validation table lives
/// with the catalog, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Country(String);

impl Country {
    /// Builds a country from a raw code, falling back to the default region
    /// for `None` or anything that is not a two-ASCII-letter code.
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some(raw) => {
                let trimmed = raw.trim();
                if trimmed.len() == 2 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
                    Country(trimmed.to_ascii_lowercase())
                } else {
                    Self::default()
                }
            }
            None => Self::default(),
        }
    }

    /// Returns the normalized lowercase code (e.g. `"us"`).
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl Default for Country {
    fn default() -> Self {
        Country("us".to_string())
    }
}

/// Immutable configuration a source is constructed with.
///
/// `endpoint` is the one late-bound field: manifest sources require the
/// caller to set it after construction, before the first fetch. Lookup
/// sources derive their URL from the other fields instead and ignore it.
#[derive(Debug, Clone)]
pub struct SourceConfiguration {
    /// Identifier of the application being checked. Required at fetch time.
    pub bundle_identifier: Option<String>,
    /// Catalog region to query.
    pub country: Country,
    /// Locale tag for localized metadata; `None` means the source default.
    pub language: Option<String>,
    /// Resolved URL a manifest source will query.
    pub endpoint: Option<Url>,
}

impl SourceConfiguration {
    pub fn new(
        country: Option<&str>,
        language: Option<String>,
        bundle_identifier: Option<String>,
    ) -> Self {
        Self {
            bundle_identifier,
            country: Country::from_code(country),
            language,
            endpoint: None,
        }
    }
}
