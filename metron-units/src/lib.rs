//! Metron Units - Unit-of-Measure Registry and Conversion
//!
//! Maintains a catalog of named units and unit categories described by
//! affine conversion factors and 8-axis dimension vectors, and converts
//! magnitudes between any two units of a category through the SI basis.
//!
//! The catalogs are built once, on first access, from a built-in reference
//! dataset plus an optional user overlay file; a record loaded later
//! shadows an earlier record of the same name. After initialization every
//! operation is a pure read.
//!
//! Built-in categories:
//! - Length (m, cm, in, ft, mile, etc.)
//! - Mass (kg, g, lb, oz, etc.)
//! - Time (s, min, h, d)
//! - Temperature (K, Celsius, Fahrenheit, Rankine)
//! - Current (A, mA, kA)
//! - Amount (mol, mmol, kmol)
//! - Luminous intensity (cd)
//! - Currency (USD, kUSD)
//! - Area, Volume, Velocity, Force, Density
//! - Pressure (Pa, bar, atm, psi, etc.)
//! - Energy (J, kWh, cal, BTU, etc.)
//! - Power (W, kW, hp, etc.)
//! - Mass / molar / volumetric flowrates

mod catalog;
mod convert;
mod record;
mod registry;

pub use catalog::{CategoryCatalog, UnitCatalog};
pub use convert::{convert, convert_checked, from_si, to_si};
pub use record::{CatalogSource, CategoryRecord, UnitRecord};
pub use registry::{registry, UnitRegistry, DEFAULT_OVERLAY_PATH, OVERLAY_PATH_VAR};

pub use metron_core::{Dimension, RegistryError};
