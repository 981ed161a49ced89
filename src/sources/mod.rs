//! Concrete data source implementations.

pub mod lookup;
pub mod manifest;

pub use lookup::LookupSource;
pub use manifest::ManifestSource;
