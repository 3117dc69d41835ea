pub mod field_input;

pub use field_input::*;
