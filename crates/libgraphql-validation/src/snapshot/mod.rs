//! Binary snapshots of a [`Document`], so a parsed schema can be stored and
//! reloaded without parsing its SDL again.

use crate::Document;
use thiserror::Error;

type Result<T> = std::result::Result<T, SnapshotError>;

pub fn encode(doc: &Document) -> Result<Vec<u8>> {
    Ok(bincode::serde::encode_to_vec(doc, bincode::config::standard())?)
}

pub fn decode(bytes: &[u8]) -> Result<Document> {
    let (doc, _) = bincode::serde::decode_from_slice::<Document, _>(
        bytes,
        bincode::config::standard(),
    )?;
    Ok(doc)
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to decode document snapshot: {0}")]
    DecodeError(#[from] bincode::error::DecodeError),

    #[error("Failed to encode document snapshot: {0}")]
    EncodeError(#[from] bincode::error::EncodeError),
}
