//! Book Module
//!
//! The record type stored in the catalog, plus pluggable text rendering.
//!
//! ## Responsibilities
//! - Validate fields on construction (non-empty text, positive price)
//! - Field-wise equality (two books are equal only if every field matches)
//! - Render books through format codes

mod entity;
mod format;

pub use entity::{Book, DELIMITER};
pub use format::{BookFormatter, LimitedEditionFormatter, StandardFormatter};
