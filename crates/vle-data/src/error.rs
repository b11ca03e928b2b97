//! Dataset conversion errors.

use thiserror::Error;
use vle_core::VleError;

/// Result type for table loading and conversion.
pub type DataResult<T> = Result<T, DataError>;

#[derive(Error, Debug)]
pub enum DataError {
    /// Parallel sequences of one temperature have different lengths.
    #[error("Shape mismatch at T = {temperature_k} K: sequence lengths (z, x, y, p) = {lengths:?}")]
    ShapeMismatch {
        temperature_k: f64,
        lengths: [usize; 4],
    },

    /// A pressure value could not be converted to Pa.
    #[error("Unit conversion failed at T = {temperature_k} K, sample {index}: {source}")]
    UnitConversion {
        temperature_k: f64,
        index: usize,
        #[source]
        source: VleError,
    },

    #[error("Invalid source tables: {0}")]
    Tables(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_mismatch_display_lists_lengths() {
        let err = DataError::ShapeMismatch {
            temperature_k: 293.15,
            lengths: [3, 3, 2, 3],
        };
        let msg = err.to_string();
        assert!(msg.contains("293.15"));
        assert!(msg.contains("[3, 3, 2, 3]"));
    }

    #[test]
    fn unit_conversion_keeps_source() {
        let err = DataError::UnitConversion {
            temperature_k: 323.15,
            index: 4,
            source: VleError::NonFinite {
                what: "source pressure",
                value: f64::INFINITY,
            },
        };
        assert!(err.to_string().contains("sample 4"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
