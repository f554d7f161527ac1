//! Catalog record schema
//!
//! Both the built-in reference dataset and user overlays are JSON documents
//! with two top-level arrays, `units` and `categories`. Either array may be
//! omitted, so an overlay can extend just one table.

use metron_core::{Dimension, RegistryError};
use serde::{Deserialize, Serialize};

/// One named unit of measure with its affine conversion factors.
///
/// A value in this unit maps to the SI basis as `(value + plus) * times`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitRecord {
    /// Lookup key, case-sensitive. Trimmed of surrounding whitespace on load.
    pub name: String,
    /// Human-readable text, may be empty
    #[serde(default)]
    pub description: String,
    /// Name of the category this unit belongs to
    pub category: String,
    /// Multiplicative factor to SI
    pub times: f64,
    /// Additive offset, applied before multiplication
    #[serde(default)]
    pub plus: f64,
}

/// One dimensional class of quantity (e.g. "Pressure", "Temperature").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRecord {
    /// Lookup key, case-sensitive
    pub name: String,
    /// Default display label for downstream consumers; opaque here
    #[serde(default)]
    pub display_unit: String,
    /// Canonical SI unit name for the category. Expected, but not required
    /// at load time, to resolve as a unit record.
    pub si_unit: String,
    /// Exponents over the 8 base axes
    pub dimension: Dimension,
}

/// A parsed catalog source: the built-in dataset or a user overlay.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSource {
    #[serde(default)]
    pub units: Vec<UnitRecord>,
    #[serde(default)]
    pub categories: Vec<CategoryRecord>,
}

impl CatalogSource {
    /// Parse a catalog source from JSON text.
    ///
    /// Any schema violation (missing required field, non-numeric factor,
    /// wrong dimension arity) is a `MalformedCatalog` error naming the
    /// source.
    pub fn parse(text: &str, source: &str) -> Result<Self, RegistryError> {
        serde_json::from_str(text).map_err(|e| RegistryError::malformed(source, e.to_string()))
    }
}
