//! The static snippet catalog.
//!
//! Pure data, no lifecycle: each submodule holds one category's
//! examples as compile-time constants. All `result` fields are
//! precomputed strings; snippet code is display text only and is never
//! evaluated.

pub mod advanced;
pub mod arrays;
pub mod async_patterns;
pub mod dom;
pub mod functional;
pub mod leetcode;
pub mod numbers;
pub mod objects;
pub mod performance;
pub mod strings;
pub mod time;
