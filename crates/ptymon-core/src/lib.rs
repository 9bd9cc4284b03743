//! # ptymon-core - Core Domain Types
//!
//! Foundation crate for ptymon. Provides the device registry, the read-only
//! grid view over it, event definitions, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, parking_lot, tracing).
//!
//! ## Public API
//!
//! ### Events (`events`)
//! - [`DeviceEvent`] - A single `(path, kind)` notification for a device node
//! - [`EventKind`] - Created, Removed, or Other activity
//!
//! ### Registry (`registry`)
//! - [`Registry`] - Lock-guarded, insertion-ordered set of known devices
//! - [`DeviceRecord`] - Per-path activity count and removal flag
//!
//! ### Grid View (`view`)
//! - [`GridSource`] - Row/column query contract consumed by renderers
//! - [`DeviceGrid`] - Live view borrowing a [`Registry`]
//! - [`GridSnapshot`] - Owned copy of the rows for one draw cycle
//! - [`GridCell`], [`CellStyle`] - Cell content and styling hint
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use ptymon_core::prelude::*;
//! ```

pub mod error;
pub mod events;
pub mod logging;
pub mod registry;
pub mod view;

/// Prelude for common imports used throughout all ptymon crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use events::{DeviceEvent, EventKind, PTS_DIR};
pub use registry::{DeviceRecord, Registry};
pub use view::{
    CellStyle, DeviceGrid, GridCell, GridSnapshot, GridSource, COLUMN_COUNT, HEADER_LABELS,
};
