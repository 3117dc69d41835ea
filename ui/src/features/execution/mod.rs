pub mod dispatcher;
pub mod requests;
pub mod types;

pub use dispatcher::{FormDispatcher, SubmitEvent};
pub use requests::*;
pub use types::*;
