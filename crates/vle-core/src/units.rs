// vle-core/src/units.rs

use crate::error::{VleError, VleResult};
use crate::numeric::ensure_finite;
use uom::si::f64::Pressure as UomPressure;

// Public canonical unit type (SI, f64)
pub type Pressure = UomPressure;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

/// Pressure in pascal as a bare float.
#[inline]
pub fn to_pa(p: Pressure) -> f64 {
    use uom::si::pressure::pascal;
    p.get::<pascal>()
}

pub mod constants {
    /// 1 lbf/in² expressed in Pa (0.45359237 kg * 9.80665 m/s² / 0.0254² m²).
    pub const PA_PER_PSI: f64 = 6_894.757_293_168_361;
    pub const PA_PER_BAR: f64 = 100_000.0;
    pub const PA_PER_ATM: f64 = 101_325.0;
}

/// Pressure units accepted for tabulated source data.
///
/// All of them are absolute scales; `Psia` is the unit of the embedded tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum PressureUnit {
    Pascal,
    KiloPascal,
    MegaPascal,
    Bar,
    Psia,
    Atm,
}

impl PressureUnit {
    pub fn key(&self) -> &'static str {
        match self {
            PressureUnit::Pascal => "Pa",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::MegaPascal => "MPa",
            PressureUnit::Bar => "bar",
            PressureUnit::Psia => "psia",
            PressureUnit::Atm => "atm",
        }
    }

    /// Linear factor from this unit to Pa.
    pub fn pa_per_unit(&self) -> f64 {
        match self {
            PressureUnit::Pascal => 1.0,
            PressureUnit::KiloPascal => 1.0e3,
            PressureUnit::MegaPascal => 1.0e6,
            PressureUnit::Bar => constants::PA_PER_BAR,
            PressureUnit::Psia => constants::PA_PER_PSI,
            PressureUnit::Atm => constants::PA_PER_ATM,
        }
    }

    /// Convert a value given in this unit into a `Pressure`.
    ///
    /// Fails on NaN/infinite input instead of producing a poisoned quantity.
    pub fn to_pressure(&self, value: f64) -> VleResult<Pressure> {
        let value = ensure_finite(value, "source pressure")?;
        Ok(pa(value * self.pa_per_unit()))
    }
}

impl std::fmt::Display for PressureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for PressureUnit {
    type Err = VleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PA" | "PASCAL" => Ok(PressureUnit::Pascal),
            "KPA" | "KILOPASCAL" => Ok(PressureUnit::KiloPascal),
            "MPA" | "MEGAPASCAL" => Ok(PressureUnit::MegaPascal),
            "BAR" | "BARA" => Ok(PressureUnit::Bar),
            "PSIA" | "PSI" => Ok(PressureUnit::Psia),
            "ATM" => Ok(PressureUnit::Atm),
            _ => Err(VleError::UnknownUnit {
                unit: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for PressureUnit {
    type Error = VleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PressureUnit> for String {
    fn from(unit: PressureUnit) -> Self {
        unit.key().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Tolerances, nearly_equal};

    #[test]
    fn pascal_roundtrip() {
        assert_eq!(to_pa(pa(12.5)), 12.5);
        assert_eq!(to_pa(PressureUnit::Pascal.to_pressure(101_325.0).unwrap()), 101_325.0);
    }

    #[test]
    fn one_psi_in_pascal() {
        let p = PressureUnit::Psia.to_pressure(1.0).unwrap();
        let tol = Tolerances {
            abs: 0.0,
            rel: 1e-6,
        };
        assert!(nearly_equal(to_pa(p), 6894.757293168361, tol));
    }

    #[test]
    fn psi_factor_matches_definition() {
        let derived = 0.453_592_37 * 9.806_65 / (0.0254 * 0.0254);
        let tol = Tolerances {
            abs: 0.0,
            rel: 1e-12,
        };
        assert!(nearly_equal(derived, constants::PA_PER_PSI, tol));
    }

    #[test]
    fn non_finite_pressure_is_rejected() {
        let err = PressureUnit::Psia.to_pressure(f64::NAN).unwrap_err();
        assert!(matches!(err, VleError::NonFinite { .. }));
    }

    #[test]
    fn parse_unit_keys() {
        for unit in [
            PressureUnit::Pascal,
            PressureUnit::KiloPascal,
            PressureUnit::MegaPascal,
            PressureUnit::Bar,
            PressureUnit::Psia,
            PressureUnit::Atm,
        ] {
            assert_eq!(unit.key().parse::<PressureUnit>().unwrap(), unit);
        }
        assert_eq!("psi".parse::<PressureUnit>().unwrap(), PressureUnit::Psia);
        assert!("inHg".parse::<PressureUnit>().is_err());
    }
}
