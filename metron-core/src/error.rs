//! Registry and conversion errors
//!
//! Errors are values that propagate to the immediate caller. Lookups are
//! deterministic, so nothing here is retried: a failed lookup cannot succeed
//! without new catalog data.

use thiserror::Error;

/// Error type for catalog lookups and conversions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    /// No record with the given name exists in the effective unit catalog.
    #[error("unknown unit: {0}")]
    UnitNotFound(String),

    /// A unit record names a category that is absent from the category
    /// catalog. Surfaced distinctly from [`RegistryError::UnitNotFound`] so
    /// callers can tell a bad lookup from an inconsistent catalog.
    #[error("unit '{unit}' declares unknown category '{category}'")]
    CategoryNotFound { unit: String, category: String },

    /// A catalog source failed to parse. Fatal to initialization: the
    /// registry is poisoned for the process lifetime and every query fails.
    #[error("malformed catalog data in {origin}: {detail}")]
    MalformedCatalog { origin: String, detail: String },

    /// Category-checked conversion between units of different categories.
    #[error("cannot convert '{from}' ({from_category}) to '{to}' ({to_category}): incompatible categories")]
    IncompatibleCategories {
        from: String,
        from_category: String,
        to: String,
        to_category: String,
    },

    /// A unit with a zero multiplicative factor was used as a conversion
    /// target. Such an entry is malformed but only detected on use.
    #[error("division by zero: unit '{0}' has a zero conversion factor")]
    DivisionByZero(String),
}

impl RegistryError {
    pub fn malformed(origin: impl Into<String>, detail: impl Into<String>) -> Self {
        RegistryError::MalformedCatalog {
            origin: origin.into(),
            detail: detail.into(),
        }
    }
}
