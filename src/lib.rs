#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod common;
mod config;
mod grid;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
mod renderer;
mod specification;

pub use common::*;
pub use config::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from};
pub use renderer::render;
#[cfg(feature = "std")]
pub use renderer::render_json;
pub use specification::*;
