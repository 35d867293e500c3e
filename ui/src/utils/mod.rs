//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: logging macros for the browser console (tracing off wasm)
//! - **text**: small display helpers for labels and captions

pub mod console_macros;
pub mod text;

pub use text::*;
