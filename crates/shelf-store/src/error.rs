//! # Storage Error Types
//!
//! Error types for catalog file operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                │
//! │                                                                     │
//! │  io::Error / serde_json::Error / ValidationError                    │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  PersistenceError (this module) ← adds path / record context        │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Caller renders a user-friendly message                             │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed load returns an error instead of a store; the caller's
//! in-memory state is never partially populated.

use thiserror::Error;

use shelf_core::{InventoryError, ValidationError};

/// Catalog file operation errors.
///
/// Each variant wraps its underlying cause and carries enough context
/// (path, record index, discriminator) for a precise message.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The source file could not be read.
    #[error("failed to read catalog file '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// The temporary file could not be written.
    #[error("failed to write catalog file '{path}': {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    /// The temporary file could not be moved into place.
    #[error("failed to replace catalog file '{path}': {source}")]
    Rename {
        path: String,
        source: std::io::Error,
    },

    /// The catalog could not be serialized.
    #[error("failed to serialize catalog: {0}")]
    Serialize(serde_json::Error),

    /// The file is not a valid catalog document.
    #[error("malformed catalog file: {0}")]
    Malformed(serde_json::Error),

    /// The file was written by an incompatible format version.
    ///
    /// Schema migration is out of scope; an unknown version is an error,
    /// never a best-effort parse.
    #[error("unsupported catalog format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    /// A record carries a `kind` discriminator no variant matches.
    #[error("unknown product kind '{kind}' in record {index}")]
    UnknownKind { kind: String, index: usize },

    /// A record has the wrong shape for its kind (missing or mistyped
    /// fields).
    #[error("malformed record {index}: {source}")]
    MalformedRecord {
        index: usize,
        source: serde_json::Error,
    },

    /// A record failed field validation during reconstruction.
    #[error("invalid record {index}: {source}")]
    InvalidRecord {
        index: usize,
        source: ValidationError,
    },

    /// The decoded records do not form a valid store (e.g. duplicate ids).
    #[error("invalid catalog contents: {0}")]
    Catalog(#[from] InventoryError),
}

/// Convenience type alias for storage results.
pub type PersistenceResult<T> = Result<T, PersistenceError>;

// =============================================================================
// Unit Tests
// =============================================================================
