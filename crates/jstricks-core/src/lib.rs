//! # jstricks-core - Core Domain Types
//!
//! Foundation crate for jstricks. Provides the static snippet catalog,
//! the category registry, category search, error handling, and logging
//! setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`TrickExample`] - A single static snippet card (title, code, result, explanation)
//! - [`FavoriteTrick`] - A persisted favorite entry with its `added_at` timestamp
//!
//! ### Registry (`registry`)
//! - [`CategoryId`] - Enumerated category identifiers (tagged-variant registry)
//! - [`CategoryInfo`] - Display name, description, and examples for a category
//! - [`REGISTRY`] - The fixed, ordered list of categories
//!
//! ### Search (`search`)
//! - [`filter_categories()`] - Case-insensitive substring filter over the registry
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use jstricks_core::prelude::*;
//! ```

pub mod catalog;
pub mod error;
pub mod logging;
pub mod registry;
pub mod search;
pub mod types;

/// Prelude for common imports used throughout all jstricks crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use registry::{category_by_key, CategoryId, CategoryInfo, DEFAULT_CATEGORY, REGISTRY};
pub use search::filter_categories;
pub use types::{slug_id, FavoriteTrick, TrickExample};
