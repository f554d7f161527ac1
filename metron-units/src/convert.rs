//! Conversion engine
//!
//! All conversions go through the SI basis using the affine law
//! `si = (value + plus) * times` and its inverse
//! `value = si / times - plus`.

use crate::registry::{registry, UnitRegistry};
use metron_core::RegistryError;

impl UnitRegistry {
    /// Convert `value` from the named unit to the category's SI basis.
    pub fn to_si(&self, value: f64, unit_name: &str) -> Result<f64, RegistryError> {
        let times = self.conversion_times(unit_name)?;
        let plus = self.conversion_plus(unit_name)?;
        Ok((value + plus) * times)
    }

    /// Convert `value` from the category's SI basis to the named unit.
    pub fn from_si(&self, value: f64, unit_name: &str) -> Result<f64, RegistryError> {
        let times = self.conversion_times(unit_name)?;
        let plus = self.conversion_plus(unit_name)?;
        if times == 0.0 {
            return Err(RegistryError::DivisionByZero(unit_name.to_string()));
        }
        Ok(value / times - plus)
    }

    /// Convert `value` from one unit to another by composing
    /// [`UnitRegistry::to_si`] and [`UnitRegistry::from_si`].
    ///
    /// Does not check that the two units share a category: the result is
    /// numerically well-defined either way, but physically meaningless for
    /// mismatched units. Use [`UnitRegistry::convert_checked`] to reject
    /// that case.
    pub fn convert(&self, value: f64, from_unit: &str, to_unit: &str) -> Result<f64, RegistryError> {
        let si = self.to_si(value, from_unit)?;
        self.from_si(si, to_unit)
    }

    /// Like [`UnitRegistry::convert`], but fails with
    /// `IncompatibleCategories` when the units belong to different
    /// categories.
    pub fn convert_checked(
        &self,
        value: f64,
        from_unit: &str,
        to_unit: &str,
    ) -> Result<f64, RegistryError> {
        let from_category = self.category_of(from_unit)?;
        let to_category = self.category_of(to_unit)?;
        if from_category != to_category {
            return Err(RegistryError::IncompatibleCategories {
                from: from_unit.to_string(),
                from_category: from_category.to_string(),
                to: to_unit.to_string(),
                to_category: to_category.to_string(),
            });
        }
        self.convert(value, from_unit, to_unit)
    }
}

// Free-function counterparts over the process-wide registry.

/// Convert `value` from `unit_name` to SI using the global registry.
pub fn to_si(value: f64, unit_name: &str) -> Result<f64, RegistryError> {
    registry()?.to_si(value, unit_name)
}

/// Convert `value` from SI to `unit_name` using the global registry.
pub fn from_si(value: f64, unit_name: &str) -> Result<f64, RegistryError> {
    registry()?.from_si(value, unit_name)
}

/// Convert between two units using the global registry, unchecked.
pub fn convert(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, RegistryError> {
    registry()?.convert(value, from_unit, to_unit)
}

/// Convert between two units of the same category using the global
/// registry.
pub fn convert_checked(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, RegistryError> {
    registry()?.convert_checked(value, from_unit, to_unit)
}
