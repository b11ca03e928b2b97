//! Parallel measurement sequences at one temperature.

use serde::{Deserialize, Serialize};

use crate::error::{DataError, DataResult};

/// Tabulated samples at a single temperature.
///
/// Index `i` across `z_ref`, `x`, `y` and `p` refers to one physical sample.
/// `x` and `y` hold the mole fraction of the second component; `z_ref` is
/// the overall liquid-side fraction kept as provenance only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSeries {
    #[serde(rename = "T (K)")]
    pub temperature_k: f64,
    #[serde(rename = "z", alias = "z_H2O")]
    pub z_ref: Vec<f64>,
    #[serde(alias = "x_H2O")]
    pub x: Vec<f64>,
    #[serde(alias = "y_H2O")]
    pub y: Vec<f64>,
    #[serde(alias = "p_psia")]
    pub p: Vec<f64>,
}

impl TemperatureSeries {
    /// Lengths of (z, x, y, p) in that order.
    pub fn lengths(&self) -> [usize; 4] {
        [self.z_ref.len(), self.x.len(), self.y.len(), self.p.len()]
    }

    /// Verify that all four sequences share one length and return it.
    pub fn check_shape(&self) -> DataResult<usize> {
        let lengths = self.lengths();
        let n = lengths[0];
        if lengths.iter().any(|&len| len != n) {
            return Err(DataError::ShapeMismatch {
                temperature_k: self.temperature_k,
                lengths,
            });
        }
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(z: usize, x: usize, y: usize, p: usize) -> TemperatureSeries {
        TemperatureSeries {
            temperature_k: 300.0,
            z_ref: vec![0.5; z],
            x: vec![0.5; x],
            y: vec![0.1; y],
            p: vec![1.0; p],
        }
    }

    #[test]
    fn equal_lengths_pass() {
        assert_eq!(series(3, 3, 3, 3).check_shape().unwrap(), 3);
        assert_eq!(series(0, 0, 0, 0).check_shape().unwrap(), 0);
    }

    #[test]
    fn any_short_sequence_is_rejected() {
        for bad in [
            series(2, 3, 3, 3),
            series(3, 2, 3, 3),
            series(3, 3, 2, 3),
            series(3, 3, 3, 2),
        ] {
            let err = bad.check_shape().unwrap_err();
            assert!(matches!(err, DataError::ShapeMismatch { .. }));
        }
    }

    #[test]
    fn legacy_column_names_are_accepted() {
        let json = r#"{"T (K)": 293.15, "z_H2O": [0.9], "x_H2O": [0.9], "y_H2O": [0.3], "p_psia": [1.0]}"#;
        let s: TemperatureSeries = serde_json::from_str(json).unwrap();
        assert_eq!(s.lengths(), [1, 1, 1, 1]);
    }
}
