// Client-side access to the execution admin endpoints
//
// This module provides:
// - The transport trait the form dispatcher talks to
// - A reqwest-backed browser implementation
// - Response, failure and error types shared with the result panels

pub mod errors;
pub mod execution_client;
pub mod traits;
pub mod types;

pub use errors::{ClientError, ClientResult};
pub use execution_client::ExecutionClient;
pub use traits::ExecutionTransport;
pub use types::{ExecutionFailure, ExecutionResponse, FailureKind, ResponseBody};

#[cfg(test)]
pub use traits::MockExecutionTransport;
