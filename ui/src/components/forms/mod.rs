pub mod load_form;
pub mod manual_download_form;
pub mod period_selector;
pub mod review_form;
pub mod scrap_download_form;

pub use load_form::*;
pub use manual_download_form::*;
pub use period_selector::*;
pub use review_form::*;
pub use scrap_download_form::*;

use crate::features::execution::FormDispatcher;
use crate::services::client::ExecutionClient;

/// Dispatcher wired to the browser HTTP client
pub type AdminDispatcher = FormDispatcher<ExecutionClient>;
