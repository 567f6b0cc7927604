//! Commonly used types and utilities for ease of import.

pub use crate::{render, Cell, Grid, GridError, SpecError, Specification};

#[cfg(feature = "std")]
pub use crate::{init_logging, render_json};
