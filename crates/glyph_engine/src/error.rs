//! Unified error types for glyph_engine

use thiserror::Error;

/// Main error type for glyph_engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Document Errors ===
    #[error("Position ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds { x: i32, y: i32, width: i32, height: i32 },

    #[error("Invalid size: {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    #[error("Cell count mismatch: expected {expected}, got {actual}")]
    CellCountMismatch { expected: usize, actual: usize },

    #[error("Unsupported snapshot version: {version} (expected {expected})")]
    UnsupportedSnapshotVersion { version: u32, expected: u32 },

    #[error("Box charset '{charset}' needs at least {min} characters")]
    InvalidCharset { charset: String, min: usize },
}

/// Result type alias for glyph_engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
