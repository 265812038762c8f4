//! Renderers for decoded scores
//!
//! Output formats are organized as submodules; outlets is the host-facing one.

pub mod outlets;

pub use outlets::{OutletSink, ResultEmitter};
