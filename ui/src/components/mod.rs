//! User Interface Components
//!
//! This module contains the Dioxus components of the execution admin page:
//!
//! - **forms**: The four admin forms (scrap download, manual download, review, load)
//!   and the shared period selector
//! - **display**: Result panels and the busy spinner
//! - **input**: Plain text inputs bound to view state
//!
//! Components only read the view state and emit actions; requests go through
//! the form dispatcher.

pub mod display;
pub mod forms;
pub mod input;
