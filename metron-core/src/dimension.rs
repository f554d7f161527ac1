//! Dimension vectors
//!
//! Each unit category carries its physical dimension as an 8-element vector
//! of exponents: [length, mass, time, current, temperature, amount,
//! luminosity, currency].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Axis indices into a dimension vector
pub const LENGTH: usize = 0;
pub const MASS: usize = 1;
pub const TIME: usize = 2;
pub const CURRENT: usize = 3;
pub const TEMPERATURE: usize = 4;
pub const AMOUNT: usize = 5;
pub const LUMINOSITY: usize = 6;
pub const CURRENCY: usize = 7;

/// Number of axes that participate in physical matching. The currency axis
/// is stored and reported but never compared (see [`Dimension::matches`]).
pub const PHYSICAL_AXES: usize = 7;

/// Tolerance for component-wise exponent comparison. Exponents recovered
/// from parsed text are not exact, so matching is tolerance-based rather
/// than bitwise.
pub const DIM_TOLERANCE: f64 = 1e-9;

/// The dimensions of a unit category as exponents over the 8 base axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dimension {
    /// [length, mass, time, current, temperature, amount, luminosity, currency]
    pub exponents: [f64; 8],
}

impl Dimension {
    /// Dimensionless quantity (all exponents zero)
    pub const DIMENSIONLESS: Dimension = Dimension {
        exponents: [0.0; 8],
    };

    /// Length [L]
    pub const LENGTH: Dimension = Dimension {
        exponents: [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    };

    /// Mass [M]
    pub const MASS: Dimension = Dimension {
        exponents: [0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    };

    /// Time [T]
    pub const TIME: Dimension = Dimension {
        exponents: [0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    };

    /// Electric current [I]
    pub const CURRENT: Dimension = Dimension {
        exponents: [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0],
    };

    /// Temperature [Θ]
    pub const TEMPERATURE: Dimension = Dimension {
        exponents: [0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0],
    };

    /// Amount of substance [N]
    pub const AMOUNT: Dimension = Dimension {
        exponents: [0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    };

    /// Luminous intensity [J]
    pub const LUMINOSITY: Dimension = Dimension {
        exponents: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0],
    };

    /// Currency [$]
    pub const CURRENCY: Dimension = Dimension {
        exponents: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0],
    };

    /// Area [L^2]
    pub const AREA: Dimension = Dimension {
        exponents: [2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    };

    /// Volume [L^3]
    pub const VOLUME: Dimension = Dimension {
        exponents: [3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    };

    /// Velocity [L T^-1]
    pub const VELOCITY: Dimension = Dimension {
        exponents: [1.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    };

    /// Force [M L T^-2]
    pub const FORCE: Dimension = Dimension {
        exponents: [1.0, 1.0, -2.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    };

    /// Pressure [M L^-1 T^-2]
    pub const PRESSURE: Dimension = Dimension {
        exponents: [-1.0, 1.0, -2.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    };

    /// Energy [M L^2 T^-2]
    pub const ENERGY: Dimension = Dimension {
        exponents: [2.0, 1.0, -2.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    };

    /// Power [M L^2 T^-3]
    pub const POWER: Dimension = Dimension {
        exponents: [2.0, 1.0, -3.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    };

    /// Create a new dimension from exponents
    pub fn new(exponents: [f64; 8]) -> Self {
        Dimension { exponents }
    }

    /// Check if this is a dimensionless quantity
    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(|&e| e.abs() <= DIM_TOLERANCE)
    }

    /// Check whether two dimensions describe the same physical quantity.
    ///
    /// Compares the first seven axes component-wise within
    /// [`DIM_TOLERANCE`]. The currency axis does not participate in the
    /// comparison: two dimensions differing only in their currency exponent
    /// are treated as matching.
    pub fn matches(&self, other: &Dimension) -> bool {
        self.exponents[..PHYSICAL_AXES]
            .iter()
            .zip(&other.exponents[..PHYSICAL_AXES])
            .all(|(a, b)| (a - b).abs() <= DIM_TOLERANCE)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = ["L", "M", "T", "I", "Θ", "N", "J", "$"];
        let mut parts = Vec::new();

        for (i, &exp) in self.exponents.iter().enumerate() {
            if exp.abs() > DIM_TOLERANCE {
                if (exp - 1.0).abs() <= DIM_TOLERANCE {
                    parts.push(names[i].to_string());
                } else {
                    parts.push(format!("{}^{}", names[i], exp));
                }
            }
        }

        if parts.is_empty() {
            write!(f, "1")
        } else {
            write!(f, "{}", parts.join(" "))
        }
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::DIMENSIONLESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensionless() {
        assert!(Dimension::DIMENSIONLESS.is_dimensionless());
        assert!(!Dimension::LENGTH.is_dimensionless());
    }

    #[test]
    fn test_matches_exact() {
        assert!(Dimension::PRESSURE.matches(&Dimension::PRESSURE));
        assert!(!Dimension::PRESSURE.matches(&Dimension::ENERGY));
    }

    #[test]
    fn test_matches_within_tolerance() {
        let mut nearly = Dimension::PRESSURE;
        nearly.exponents[MASS] += 1e-12;
        assert!(Dimension::PRESSURE.matches(&nearly));

        let mut off = Dimension::PRESSURE;
        off.exponents[MASS] += 1e-6;
        assert!(!Dimension::PRESSURE.matches(&off));
    }

    #[test]
    fn test_matches_ignores_currency() {
        let mut priced = Dimension::PRESSURE;
        priced.exponents[CURRENCY] = 3.0;
        assert!(Dimension::PRESSURE.matches(&priced));
    }

    #[test]
    fn test_fractional_exponents() {
        let a = Dimension::new([0.5, 0.0, -1.5, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let b = Dimension::new([0.5, 0.0, -1.5, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert!(a.matches(&b));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Dimension::DIMENSIONLESS), "1");
        assert_eq!(format!("{}", Dimension::LENGTH), "L");
        assert_eq!(format!("{}", Dimension::VELOCITY), "L T^-1");
        assert_eq!(format!("{}", Dimension::PRESSURE), "L^-1 M T^-2");
    }

    #[test]
    fn test_display_uses_tolerance() {
        // Exponents within DIM_TOLERANCE of 0 or 1 render as exactly those,
        // matching how the rest of the crate compares exponents.
        let d = Dimension::new([1.0 + 1e-12, 0.0, 1e-12, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(format!("{}", d), "L");
    }

    #[test]
    fn test_serde_array_form() {
        let d: Dimension = serde_json::from_str("[-1, 1, -2, 0, 0, 0, 0, 0]").unwrap();
        assert_eq!(d, Dimension::PRESSURE);
        let text = serde_json::to_string(&Dimension::LENGTH).unwrap();
        assert_eq!(text, "[1.0,0.0,0.0,0.0,0.0,0.0,0.0,0.0]");
    }
}
