pub mod loading_indicator;
pub mod result_panel;

pub use loading_indicator::*;
pub use result_panel::*;
