//! Infrastructure Services
//!
//! This module provides the infrastructure the execution admin page runs on:
//!
//! - **client**: HTTP transport for the execution endpoints and its outcome types
//! - **config**: Page-level configuration (base URL, endpoint prefix, headers)
//!
//! The services are designed to be WASM-first, using browser APIs and async traits
//! without Send/Sync bounds for compatibility.

pub mod client;
pub mod config;
