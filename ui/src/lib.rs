//! This crate contains the execution admin page: the four data-management
//! forms, their result panels and the client that talks to the backend.

pub mod app;
pub use app::ExecutionAdmin;

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
