//! Utility Functions and Cross-Cutting Concerns
//!
//! This module provides utility functions and macros used throughout the application:
//!
//! - **console_macros**: WASM-compatible logging macros for browser console output
//! - **platform**: Browser environment helpers (page URL lookup)
//!
//! These utilities are designed to work consistently across native test builds
//! and WASM deployment targets.

pub mod console_macros;
pub mod platform;

pub use platform::*;
