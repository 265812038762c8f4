//! MIDI Note Reader WASM Module
//!
//! Decodes Standard MIDI Files into completed note events plus score
//! metadata (tempo, resolution, track count, end tick), and reports them
//! over named outlets to the host.

pub mod models;
pub mod converters;
pub mod interpreter;
pub mod renderers;
pub mod reader;
pub mod api;

// Re-export commonly used types
pub use models::*;
pub use converters::smf::{DecodeError, DecodedFile};
pub use reader::{decode_midi, read_midi, read_midi_file};
pub use renderers::outlets::{OutletMessage, OutletSink, OutletValue, ReadSettings, RecordingSink};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    install_panic_hook();
    init_logging();

    log::info!("MIDI note reader WASM module initialized");
}

#[cfg(feature = "console_error_panic_hook")]
fn install_panic_hook() {
    console_error_panic_hook::set_once();
}

#[cfg(not(feature = "console_error_panic_hook"))]
fn install_panic_hook() {}

#[cfg(feature = "console_log")]
fn init_logging() {
    let _ = console_log::init_with_level(log::Level::Debug);
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}
