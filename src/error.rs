//! Error types for the drawpack library

use thiserror::Error;

/// Result type alias using PackError
pub type Result<T> = std::result::Result<T, PackError>;

/// Errors that can occur when composing a drawing pack
#[derive(Debug, Error)]
pub enum PackError {
    /// Error from the underlying lopdf library
    #[error("PDF operation failed: {0}")]
    Pdf(#[from] lopdf::Error),

    /// Error decoding or encoding a raster image
    #[error("image operation failed: {0}")]
    Image(#[from] image::ImageError),

    /// I/O failure reading a source or writing the output
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The sheet plan has no sheets
    #[error("no sheets to export (sheet plan is empty)")]
    EmptyPlan,

    /// Invalid sheet plan entry
    #[error("invalid sheet plan: {0}")]
    InvalidPlan(String),

    /// A source PDF page index outside the document's page range
    #[error("PDF page index out of range: {index} for {path} ({count} pages)")]
    PageOutOfRange {
        path: String,
        index: usize,
        count: usize,
    },

    /// The page rasterizer failed or is unavailable
    #[error("page rasterization failed: {0}")]
    Raster(String),

    /// Job file could not be loaded or has an unsupported version
    #[error("job file error: {0}")]
    Job(String),

    /// Font data could not be parsed
    #[error("font error: {0}")]
    Font(String),
}
