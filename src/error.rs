use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid analysis result JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// An indivisible block (score grid, full table, single bullet item)
    /// requires more height than a fresh page's usable content area. The
    /// page-break logic can only move to a new page, never shrink or split
    /// such a block, so generation aborts rather than clipping content.
    #[error("content block needs {needed:.1}pt but a full page offers only {available:.1}pt")]
    BlockTooTall { needed: f32, available: f32 },

    #[error("document contains no pages")]
    EmptyDocument,
}
