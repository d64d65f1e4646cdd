//! imgpress WASM - WebAssembly bindings for the imgpress compressor page
//!
//! # Module Structure
//!
//! - `session` - [`JsSession`], the page controller (intake, compress, download)
//! - `encode` - stateless re-encoding helpers
//! - `media` - media type checks and format sniffing
//! - `types` - JS-facing views and option parsing
//! - `browser` - file reading, object URLs and download links
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsSession } from '@imgpress/wasm';
//!
//! await init();
//! const session = new JsSession();
//! await session.intake(event.dataTransfer.files);
//! session.compress();
//! ```

use wasm_bindgen::prelude::*;

mod browser;
mod encode;
mod media;
mod session;
mod types;

pub use encode::{format_kilobytes, quality_fraction, reencode};
pub use media::{detect_format, is_image_media_type};
pub use session::JsSession;

/// Initialize the WASM module (called automatically on load).
///
/// Routes panics and `tracing` events to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
