//! Localized content catalog.
//!
//! This module provides the static lookup table that maps a language code to
//! the template strings and issue-category labels the flow renders from.
//! Content is immutable for the process lifetime; the flow machine only ever
//! reads it.

pub mod builtin;
pub mod model;

pub use builtin::builtin_catalog;
pub use model::{Catalog, CatalogEntry, Lang};
