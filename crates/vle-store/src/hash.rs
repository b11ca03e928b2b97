//! Content digests for serialized datasets.

use sha2::{Digest, Sha256};
use vle_data::Dataset;

use crate::StoreResult;
use crate::store::to_json;

/// SHA-256 (lowercase hex) of the exact bytes `write_dataset` would emit.
pub fn digest(dataset: &Dataset) -> StoreResult<String> {
    let json = to_json(dataset)?;
    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}
