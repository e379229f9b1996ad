use thiserror::Error;

use crate::extractor::dimensions::DimensionError;
use crate::fetcher::FetchError;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// `step` is the 0-based index into the named layout path. A value equal
    /// to the path length means the leaf was found but held no usable value.
    #[error("page structure mismatch in `{path}` path at step {step}: expected {expected}")]
    StructureMismatch {
        path: &'static str,
        step: usize,
        expected: String,
    },

    #[error("product is not a sticker (category: {category:?})")]
    NotASticker { category: String },

    #[error(transparent)]
    DimensionFormat(#[from] DimensionError),
}
