use thiserror::Error;

pub type VleResult<T> = Result<T, VleError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VleError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Unknown pressure unit: {unit}")]
    UnknownUnit { unit: String },
}
