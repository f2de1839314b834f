// File: crates/marquee-core/src/error.rs
// Summary: Error type for contract violations surfaced by the core API.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Indexed access outside `0..len` of an owned collection. Never
    /// clamped: a silently clamped index would corrupt downstream
    /// bounding-box math.
    #[error("{collection} index {index} out of bounds (len {len})")]
    IndexOutOfBounds {
        collection: &'static str,
        index: usize,
        len: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
