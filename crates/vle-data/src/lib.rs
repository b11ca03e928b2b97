//! vle-data: phase-equilibrium source tables and the PTXY dataset model.
//!
//! Source tables (embedded or loaded from YAML/JSON) are converted into a
//! [`Dataset`] of [`DataPoint`]s with pressures in Pa and binary
//! compositions for both phases.

pub mod check;
pub mod convert;
pub mod dataset;
pub mod error;
pub mod series;
pub mod smolen;
pub mod species;
pub mod tables;

pub use check::{Finding, Phase, TemperatureSummary};
pub use convert::{convert, convert_series};
pub use dataset::{About, DataPoint, Dataset, DensityGuess, PointKind};
pub use error::{DataError, DataResult};
pub use series::TemperatureSeries;
pub use smolen::smolen_1991;
pub use species::Species;
pub use tables::SourceTables;
