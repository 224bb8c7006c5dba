//! Shared checkdiff data models consumed by the engine and renderer crates.

pub mod collapse;
pub mod view;

pub use collapse::*;
pub use view::*;
