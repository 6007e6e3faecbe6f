//! Error types, one enum per concern.

use thiserror::Error;

/// Errors from the layout passes and the character-grid renderer.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The fixed columns and margins consume the whole page width, leaving
    /// the item column with nothing to wrap into.
    #[error("item column is {width:.1}mm; widen the page or shrink the fixed columns")]
    ItemColumnTooNarrow { width: f32 },

    /// The character grid has no room left for the item column.
    #[error("character grid of {columns} columns leaves no item column")]
    GridTooNarrow { columns: usize },
}

/// Errors from writing or opening a preview artifact.
#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("preview artifact io: {0}")]
    Io(#[from] std::io::Error),

    /// The artifact path cannot be handed to the browser as UTF-8.
    #[error("preview path is not valid UTF-8: {0}")]
    InvalidPath(String),
}

/// Errors from printer dispatch.
#[derive(Debug, Error)]
pub enum PrintError {
    #[error("invalid printer config: {0}")]
    InvalidConfig(String),

    #[error("printer timeout: {0}")]
    Timeout(String),

    #[error("printer io: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for printer operations.
pub type PrintResult<T> = Result<T, PrintError>;
