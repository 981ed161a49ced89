use thiserror::Error;

/// Every way a version check can fail.
///
/// Each variant maps to exactly one failure point in the fetch pipeline;
/// callers never observe a raw transport or decode error without one of
/// these wrappers. Variants that wrap an underlying cause expose it via
/// [`std::error::Error::source`] for diagnostics.
#[derive(Debug, Error)]
pub enum SourceError {
    /// A fetch was invoked before a concrete data source was selected.
    #[error("no data source configured")]
    NotConfigured,

    /// The source requires a bundle identifier and none was provided.
    #[error("missing bundle identifier")]
    MissingBundleIdentifier,

    /// The endpoint URL is unset or could not be built.
    #[error("endpoint URL is unset or malformed")]
    MalformedUrl,

    /// The source answered but returned no usable data (error status or an
    /// empty body). Carries the transport cause when one exists.
    #[error("no data was returned by the source")]
    DataRetrieval { source: Option<reqwest::Error> },

    /// The payload decoded cleanly but contained no version records.
    #[error("the source returned no version records")]
    EmptyResults,

    /// The payload could not be decoded into the expected wire structure.
    #[error("failed to parse the source response")]
    Parse(#[source] serde_json::Error),

    /// The request itself failed in transit (DNS, TLS, timeout, reset).
    #[error("network request failed")]
    Network(#[from] reqwest::Error),
}
