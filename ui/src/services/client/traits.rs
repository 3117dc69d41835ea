//! Transport seam between the form dispatcher and the network

use async_trait::async_trait;

use super::types::{ExecutionFailure, ExecutionResponse};
use crate::features::execution::ExecutionRequest;

/// Sends one execution request and reports its outcome.
///
/// WASM-first: futures are not `Send`, the browser runs everything on one thread.
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait ExecutionTransport {
    async fn send(&self, request: &ExecutionRequest) -> Result<ExecutionResponse, ExecutionFailure>;
}
