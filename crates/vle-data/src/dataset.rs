//! PTXY dataset records and their JSON layout.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Sentinel written for a density guess that has not been computed.
pub const DENSITY_SENTINEL: i64 = -1;

/// Starting density for a later phase-equilibrium solve, in mol/m³.
///
/// Serialized as the bare number `-1` when absent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DensityGuess(Option<f64>);

impl DensityGuess {
    pub const NOT_COMPUTED: DensityGuess = DensityGuess(None);

    pub fn mol_per_m3(value: f64) -> Self {
        Self(Some(value))
    }

    pub fn value(&self) -> Option<f64> {
        self.0
    }
}

impl Serialize for DensityGuess {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(rho) => serializer.serialize_f64(rho),
            None => serializer.serialize_i64(DENSITY_SENTINEL),
        }
    }
}

impl<'de> Deserialize<'de> for DensityGuess {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = f64::deserialize(deserializer)?;
        if raw == DENSITY_SENTINEL as f64 {
            Ok(DensityGuess::NOT_COMPUTED)
        } else {
            Ok(DensityGuess::mol_per_m3(raw))
        }
    }
}

/// Measurement kind tag of a data point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointKind {
    /// Pressure, temperature, liquid and vapor composition.
    #[serde(rename = "PTXY")]
    Ptxy,
}

/// One equilibrium sample, in the key layout expected by the fitter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    #[serde(rename = "p (Pa)")]
    pub p_pa: f64,
    #[serde(rename = "T (K)")]
    pub t_k: f64,
    #[serde(rename = "x (molar)")]
    pub x: [f64; 2],
    #[serde(rename = "y (molar)")]
    pub y: [f64; 2],
    #[serde(rename = "rho' (guess,mol/m3)")]
    pub rho_liquid: DensityGuess,
    #[serde(rename = "rho'' (guess,mol/m3)")]
    pub rho_vapor: DensityGuess,
    #[serde(rename = "type")]
    pub kind: PointKind,
    #[serde(rename = "BibTeX", default, skip_serializing_if = "Option::is_none")]
    pub bibtex: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    /// Component names; the second one is the component the raw tables describe.
    pub names: [String; 2],
}

/// Metadata header plus the ordered data points.
///
/// Built once by [`crate::convert`] and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    about: About,
    data: Vec<DataPoint>,
}

impl Dataset {
    pub fn new(names: [String; 2], data: Vec<DataPoint>) -> Self {
        Self {
            about: About { names },
            data,
        }
    }

    pub fn names(&self) -> &[String; 2] {
        &self.about.names
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Points measured at exactly `temperature_k`, in stored order.
    pub fn at_temperature(&self, temperature_k: f64) -> impl Iterator<Item = &DataPoint> + '_ {
        self.data.iter().filter(move |p| p.t_k == temperature_k)
    }
}
