//! Errors returned by the heap, the graph and the searches.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Push of an identity that already has a live entry in the heap.
    #[error("duplicate identity: {0} is already in the heap")]
    DuplicateIdentity(String),

    /// Lookup of an identity, vertex or target that does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Pop on an empty heap.
    #[error("collection is empty")]
    EmptyCollection,

    /// Negative, NaN or infinite edge weight.
    #[error("invalid edge weight {weight} between {from} and {to}")]
    InvalidWeight { from: String, to: String, weight: f64 },
}

impl Error {
    pub(crate) fn duplicate<K: std::fmt::Debug>(key: &K) -> Self {
        Error::DuplicateIdentity(format!("{:?}", key))
    }

    pub(crate) fn not_found<K: std::fmt::Debug>(what: &str, key: &K) -> Self {
        Error::NotFound(format!("{} {:?}", what, key))
    }
}
