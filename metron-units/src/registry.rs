//! The unit registry: catalogs, loader, and query API
//!
//! The registry is built once from the embedded reference catalog plus an
//! optional user overlay file, and is immutable afterwards. All queries are
//! pure reads, safe for unrestricted concurrent use.

use crate::catalog::{CategoryCatalog, UnitCatalog};
use crate::record::{CatalogSource, CategoryRecord, UnitRecord};
use metron_core::{Dimension, RegistryError};
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::debug;

/// The reference catalog bundled with the crate, always loaded first.
pub(crate) const BUILTIN_CATALOG: &str = include_str!("../data/units.json");

/// Environment variable naming the overlay file path
pub const OVERLAY_PATH_VAR: &str = "METRON_OVERLAY_PATH";

/// Overlay path used when the environment variable is unset, relative to
/// the process working directory
pub const DEFAULT_OVERLAY_PATH: &str = "metron-units.json";

/// Global registry, initialized on first access. A load failure poisons it
/// for the process lifetime: every later query returns the same error.
static REGISTRY: LazyLock<Result<UnitRegistry, RegistryError>> = LazyLock::new(UnitRegistry::load);

/// Access the process-wide registry.
pub fn registry() -> Result<&'static UnitRegistry, RegistryError> {
    REGISTRY.as_ref().map_err(Clone::clone)
}

fn overlay_path() -> PathBuf {
    env::var(OVERLAY_PATH_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_OVERLAY_PATH))
}

/// The effective unit and category catalogs.
#[derive(Debug, Clone)]
pub struct UnitRegistry {
    units: UnitCatalog,
    categories: CategoryCatalog,
}

impl UnitRegistry {
    /// Build from the built-in reference catalog only.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::from_sources(BUILTIN_CATALOG, None)
    }

    /// Build from the built-in catalog and the overlay file named by
    /// [`OVERLAY_PATH_VAR`] (or [`DEFAULT_OVERLAY_PATH`]).
    pub fn load() -> Result<Self, RegistryError> {
        Self::load_with_overlay(&overlay_path())
    }

    /// Build from the built-in catalog plus the overlay file at `path`.
    /// A missing overlay file is skipped silently; any other read failure
    /// is fatal to initialization.
    pub fn load_with_overlay(path: &Path) -> Result<Self, RegistryError> {
        match fs::read_to_string(path) {
            Ok(text) => {
                debug!(path = %path.display(), "loading unit overlay");
                Self::from_sources(BUILTIN_CATALOG, Some(&text))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no unit overlay present");
                Self::from_sources(BUILTIN_CATALOG, None)
            }
            Err(e) => Err(RegistryError::malformed(
                path.display().to_string(),
                e.to_string(),
            )),
        }
    }

    /// Build from raw catalog text: the built-in dataset first, then the
    /// overlay in overlay order, so an overlay record shadows any built-in
    /// record of the same name.
    pub fn from_sources(builtin: &str, overlay: Option<&str>) -> Result<Self, RegistryError> {
        let mut units = UnitCatalog::new();
        let mut categories = CategoryCatalog::new();

        let base = CatalogSource::parse(builtin, "builtin")?;
        Self::append_source(&mut units, &mut categories, base);

        if let Some(text) = overlay {
            let extra = CatalogSource::parse(text, "overlay")?;
            Self::append_source(&mut units, &mut categories, extra);
        }

        debug!(
            units = units.len(),
            categories = categories.len(),
            "unit catalogs loaded"
        );
        Ok(Self { units, categories })
    }

    fn append_source(units: &mut UnitCatalog, categories: &mut CategoryCatalog, src: CatalogSource) {
        for record in src.units {
            units.append(record);
        }
        for record in src.categories {
            categories.append(record);
        }
    }

    fn unit(&self, name: &str) -> Result<&UnitRecord, RegistryError> {
        self.units
            .get(name)
            .ok_or_else(|| RegistryError::UnitNotFound(name.to_string()))
    }

    fn category_for(&self, record: &UnitRecord) -> Result<&CategoryRecord, RegistryError> {
        self.categories
            .get(&record.category)
            .ok_or_else(|| RegistryError::CategoryNotFound {
                unit: record.name.clone(),
                category: record.category.clone(),
            })
    }

    // ========== Query API ==========

    /// All stored unit names in load order. One entry per stored record:
    /// a shadowed name and its shadowing record both appear. Named lookups
    /// always resolve to the shadowing record.
    pub fn units(&self) -> Vec<String> {
        self.units.names()
    }

    /// Multiplicative conversion factor to SI for the named unit.
    pub fn conversion_times(&self, unit_name: &str) -> Result<f64, RegistryError> {
        Ok(self.unit(unit_name)?.times)
    }

    /// Additive conversion offset for the named unit.
    pub fn conversion_plus(&self, unit_name: &str) -> Result<f64, RegistryError> {
        Ok(self.unit(unit_name)?.plus)
    }

    /// Category name the unit belongs to.
    pub fn category_of(&self, unit_name: &str) -> Result<&str, RegistryError> {
        Ok(&self.unit(unit_name)?.category)
    }

    /// Human-readable description of the unit; may be empty.
    pub fn description_of(&self, unit_name: &str) -> Result<&str, RegistryError> {
        Ok(&self.unit(unit_name)?.description)
    }

    /// Default display unit of the unit's category.
    pub fn display_unit_of(&self, unit_name: &str) -> Result<&str, RegistryError> {
        let record = self.unit(unit_name)?;
        Ok(&self.category_for(record)?.display_unit)
    }

    /// Canonical SI unit name of the unit's category.
    pub fn si_unit_of(&self, unit_name: &str) -> Result<&str, RegistryError> {
        let record = self.unit(unit_name)?;
        Ok(&self.category_for(record)?.si_unit)
    }

    /// Names of all stored units in the given category, in load order, not
    /// deduplicated. An unknown category yields an empty list, not an error.
    pub fn units_in_category(&self, category_name: &str) -> Vec<String> {
        self.units.in_category(category_name)
    }

    /// Dimension vector of the unit's category.
    pub fn dimension_of(&self, unit_name: &str) -> Result<Dimension, RegistryError> {
        let record = self.unit(unit_name)?;
        Ok(self.category_for(record)?.dimension)
    }

    /// SI unit name of the category whose dimension matches the argument on
    /// the seven physical axes (the currency axis is not compared). Returns
    /// the empty string when no category matches; if several do, the
    /// last-loaded one wins.
    pub fn si_unit_for_dimension(&self, dimension: &Dimension) -> String {
        self.categories
            .si_unit_for_dimension(dimension)
            .unwrap_or_default()
            .to_string()
    }

    /// Number of stored unit records, shadowed ones included
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    /// Number of stored category records, shadowed ones included
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }
}
