//! Checks whether a newer version of an application is available.
//!
//! A version check queries a remote catalog — either a JSON lookup API keyed
//! by bundle identifier or a self-hosted manifest document at a caller-supplied
//! URL — and decodes the response into a normalized [`LookupResult`].
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐      ┌───────────────┐
//! │ VersionSource│─────▶│  LookupResult │
//! │   (trait)    │      │ (normalized)  │
//! └──────────────┘      └───────────────┘
//!        │
//!        ▼
//! ┌──────────────┐      ┌───────────────┐
//! │ LookupSource │      │ManifestSource │
//! │ (catalog API)│      │ (hosted file) │
//! └──────────────┘      └───────────────┘
//! ```
//!
//! Every source implements the same fetch-and-normalize contract and fails
//! with the same [`SourceError`] taxonomy, so callers can swap sources
//! without changing their handling code.
//!
//! # Modules
//!
//! - [`source`]: the [`VersionSource`] trait shared by all data sources
//! - [`sources`]: concrete source implementations (lookup API, manifest)
//! - [`model`]: the normalized version-metadata model
//! - [`config`]: per-source configuration and shared constants
//! - [`error`]: the error taxonomy for fetch and decode failures
//!
//! # Example
//!
//! ```no_run
//! use update_check::{ManifestSource, VersionSource};
//! use reqwest::Url;
//!
//! # async fn run() -> Result<(), update_check::SourceError> {
//! let mut source = ManifestSource::new(Some("us"), None, Some("com.example.app".into()));
//! source.set_endpoint(Url::parse("https://example.com/manifest.json").unwrap());
//!
//! let result = source.fetch_version_info().await?;
//! println!("latest version: {}", result.best_entry().version);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod source;
pub mod sources;

pub use config::{Country, SourceConfiguration};
pub use error::SourceError;
pub use model::{LookupResult, VersionRecord};
pub use source::{SourceType, UnconfiguredSource, VersionSource};
pub use sources::{LookupSource, ManifestSource};
