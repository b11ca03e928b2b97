//! vle-core: shared foundation for the VLE dataset tools.
//!
//! Contains:
//! - units (uom SI types, constructors and source pressure units)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{VleError, VleResult};
pub use numeric::*;
pub use units::*;
