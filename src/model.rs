//! Normalized version-metadata model shared by every data source.

use crate::error::SourceError;

/// One version record from a catalog, normalized across sources.
///
/// String fields are carried verbatim from the wire; no date or version
/// parsing happens here. Sources whose wire format lacks a field substitute
/// the placeholder constants from [`crate::config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRecord {
    /// Catalog id of the application, or [`crate::config::PLACEHOLDER_APP_ID`]
    /// when the source has no native id.
    pub app_id: i64,
    /// Release date of the current version, in the source's own format.
    pub current_version_release_date: String,
    /// Minimum supported OS version, or
    /// [`crate::config::PLACEHOLDER_MINIMUM_OS_VERSION`] when the source
    /// does not carry the field.
    pub minimum_os_version: String,
    /// Release notes; may be empty.
    pub release_notes: String,
    /// Raw version string, never semantically parsed here.
    pub version: String,
}

/// The normalized outcome of a successful version check.
///
/// Immutable once constructed and guaranteed non-empty: absence of records
/// is signaled via [`SourceError::EmptyResults`], never an empty result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    entries: Vec<VersionRecord>,
}

impl LookupResult {
    /// Wraps the given records, rejecting an empty set.
    pub fn new(entries: Vec<VersionRecord>) -> Result<Self, SourceError> {
        if entries.is_empty() {
            return Err(SourceError::EmptyResults);
        }
        Ok(Self { entries })
    }

    /// All records, in the order the source returned them.
    pub fn entries(&self) -> &[VersionRecord] {
        &self.entries
    }

    /// The best-matching record (the first one the source returned).
    pub fn best_entry(&self) -> &VersionRecord {
        // Non-empty by construction.
        &self.entries[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(version: &str) -> VersionRecord {
        VersionRecord {
            app_id: 42,
            current_version_release_date: "2024-01-01".to_string(),
            minimum_os_version: "13.0".to_string(),
            release_notes: "Bug fixes".to_string(),
            version: version.to_string(),
        }
    }

    #[test]
    fn new_rejects_empty_record_set() {
        let result = LookupResult::new(vec![]);
        assert!(matches!(result, Err(SourceError::EmptyResults)));
    }

    #[test]
    fn best_entry_is_the_first_record() {
        let result = LookupResult::new(vec![record("2.0.0"), record("1.9.0")]).unwrap();

        assert_eq!(result.entries().len(), 2);
        assert_eq!(result.best_entry().version, "2.0.0");
    }

    #[test]
    fn results_with_equal_records_compare_equal() {
        let a = LookupResult::new(vec![record("2.0.0")]).unwrap();
        let b = LookupResult::new(vec![record("2.0.0")]).unwrap();

        assert_eq!(a, b);
    }
}
