//! Source table documents: component names, pressure unit and series.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;
use vle_core::PressureUnit;

use crate::error::{DataError, DataResult};
use crate::series::TemperatureSeries;
use crate::species::canonical_name;

/// A complete set of tabulated VLE measurements for one binary mixture.
///
/// `names[1]` is the component whose fractions the series store directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceTables {
    pub names: [String; 2],
    pub pressure_unit: PressureUnit,
    /// Citation key stamped on every converted point.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bibtex: Option<String>,
    /// Free-text provenance of the measurements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    pub series: Vec<TemperatureSeries>,
}

impl SourceTables {
    /// Total number of samples, counted on the pressure column.
    pub fn sample_count(&self) -> usize {
        self.series.iter().map(|s| s.p.len()).sum()
    }

    pub fn temperatures(&self) -> Vec<f64> {
        self.series.iter().map(|s| s.temperature_k).collect()
    }

    pub fn with_bibtex(mut self, bibtex: Option<String>) -> Self {
        if bibtex.is_some() {
            self.bibtex = bibtex;
        }
        self
    }
}

pub fn load_yaml(path: &Path) -> DataResult<SourceTables> {
    let content = std::fs::read_to_string(path)?;
    let tables: SourceTables = serde_yaml::from_str(&content)?;
    Ok(tables)
}

pub fn load_json(path: &Path) -> DataResult<SourceTables> {
    let content = std::fs::read_to_string(path)?;
    let tables: SourceTables = serde_json::from_str(&content)?;
    Ok(tables)
}

/// Load a table file, picking the format from its extension.
///
/// Component names given as formulas (`NH3`, `H2O`) are rewritten to the
/// fluid names used in dataset headers.
pub fn load(path: &Path) -> DataResult<SourceTables> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let mut tables = match ext.as_deref() {
        Some("yaml") | Some("yml") => load_yaml(path)?,
        Some("json") => load_json(path)?,
        _ => {
            return Err(DataError::Tables(format!(
                "unsupported table file extension: {}",
                path.display()
            )));
        }
    };
    tables.names = tables.names.map(|name| canonical_name(&name));
    debug!(
        path = %path.display(),
        components = ?tables.names,
        series = tables.series.len(),
        samples = tables.sample_count(),
        "loaded source tables"
    );
    Ok(tables)
}
