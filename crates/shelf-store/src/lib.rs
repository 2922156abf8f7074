//! # shelf-store: Storage Layer for Shelf
//!
//! This crate persists the inventory as a versioned JSON catalog file and
//! reconstructs it on load.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Shelf Data Flow                              │
//! │                                                                     │
//! │  Caller (CLI menu loop)                                             │
//! │       │  explicit "save" / "load" choice                            │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                  shelf-store (THIS CRATE)                     │  │
//! │  │                                                               │  │
//! │  │   ┌────────────────┐          ┌────────────────┐             │  │
//! │  │   │    catalog     │          │     error      │             │  │
//! │  │   │  save / load   │          │ PersistenceErr │             │  │
//! │  │   │  atomic swap   │          │  path/record   │             │  │
//! │  │   │  kind dispatch │          │    context     │             │  │
//! │  │   └────────────────┘          └────────────────┘             │  │
//! │  └───────────────────────────────┬───────────────────────────────┘  │
//! │                                  │                                  │
//! │                                  ▼                                  │
//! │                       catalog.json (format_version 1)               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Round-Trip Contract
//!
//! `load(save(store))` yields a store equal to the original: same ids,
//! identical fields, and the correct concrete product variant recovered
//! from the `kind` discriminator.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use shelf_core::Inventory;
//! use shelf_store::{load, save};
//!
//! let inventory = Inventory::new();
//! save(&inventory, Path::new("catalog.json"))?;
//! let reloaded = load(Path::new("catalog.json"))?;
//! # Ok::<(), shelf_store::PersistenceError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;

// =============================================================================
// Re-exports
// =============================================================================

pub use catalog::{load, save, FORMAT_VERSION};
pub use error::{PersistenceError, PersistenceResult};
