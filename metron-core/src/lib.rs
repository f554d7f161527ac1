//! Metron Core - Fundamental types
//!
//! This crate provides the core types used throughout Metron:
//! - `Dimension`: 8-axis physical dimension vectors
//! - `RegistryError`: typed errors for catalog lookups and conversions

mod dimension;
mod error;

pub use dimension::{Dimension, DIM_TOLERANCE, PHYSICAL_AXES};
pub use dimension::{AMOUNT, CURRENCY, CURRENT, LENGTH, LUMINOSITY, MASS, TEMPERATURE, TIME};
pub use error::RegistryError;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Dimension, RegistryError};
}
