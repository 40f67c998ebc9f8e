//! Math Tutor WASM Module
//!
//! Core of the math tutor app: a token-aware text buffer for LaTeX-ish
//! input, a restricted expression evaluator, a live LaTeX preview, the
//! calculator/converter/date screens and the AI tutor request boundary.

pub mod models;
pub mod text;
pub mod parse;
pub mod eval;
pub mod renderers;
pub mod keyboard;
pub mod calculator;
pub mod converters;
pub mod tutor;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use eval::evaluate;
pub use models::core::*;
pub use text::{Direction, TextCore, TokenBuffer};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Math Tutor WASM module initialized");
}
