//! Form dispatcher: one submit handler per admin form
//!
//! Every handler runs the same sequence. It cancels the native submission and
//! marks the page busy synchronously, then returns a future that sends exactly
//! one request, renders the outcome on the form's panel and re-enables the
//! controls whatever the outcome was.

use std::future::Future;
use std::rc::Rc;

use dioxus::prelude::{Event, FormData};
use tracing::{info, warn};

use super::requests::ExecutionRequest;
use super::types::{set_busy, set_idle, ExecutionAction, ExecutionForm, Panel};
use crate::services::client::{ExecutionFailure, ExecutionTransport};

/// A submit event whose default browser action can be cancelled
pub trait SubmitEvent {
    fn prevent_default(&self);
}

impl SubmitEvent for Event<FormData> {
    fn prevent_default(&self) {
        Event::prevent_default(self);
    }
}

pub struct FormDispatcher<T: ExecutionTransport> {
    transport: Rc<T>,
}

impl<T: ExecutionTransport> Clone for FormDispatcher<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Rc::clone(&self.transport),
        }
    }
}

// Dispatchers compare by identity so they can travel in component props
impl<T: ExecutionTransport> PartialEq for FormDispatcher<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.transport, &other.transport)
    }
}

impl<T: ExecutionTransport + 'static> FormDispatcher<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport: Rc::new(transport),
        }
    }

    /// Scrap download form: automatic retrieval for the selected period
    pub fn handle_scrap_download<E, D>(
        &self,
        event: &E,
        form: &ExecutionForm,
        dispatch: D,
    ) -> impl Future<Output = ()> + 'static
    where
        E: SubmitEvent,
        D: Fn(ExecutionAction) + 'static,
    {
        self.submit(
            event,
            Panel::Download,
            Ok(ExecutionRequest::scrap_download(form)),
            dispatch,
        )
    }

    /// Manual download form: period plus the five typed-in figures
    pub fn handle_manual_download<E, D>(
        &self,
        event: &E,
        form: &ExecutionForm,
        dispatch: D,
    ) -> impl Future<Output = ()> + 'static
    where
        E: SubmitEvent,
        D: Fn(ExecutionAction) + 'static,
    {
        let request = ExecutionRequest::manual_download(form).map_err(ExecutionFailure::from);
        self.submit(event, Panel::Download, request, dispatch)
    }

    /// Review form: checks the downloaded data, leaves the download panel alone
    pub fn handle_review<E, D>(&self, event: &E, dispatch: D) -> impl Future<Output = ()> + 'static
    where
        E: SubmitEvent,
        D: Fn(ExecutionAction) + 'static,
    {
        self.submit(event, Panel::Review, Ok(ExecutionRequest::review()), dispatch)
    }

    /// Load form: imports the reviewed data
    pub fn handle_load<E, D>(&self, event: &E, dispatch: D) -> impl Future<Output = ()> + 'static
    where
        E: SubmitEvent,
        D: Fn(ExecutionAction) + 'static,
    {
        self.submit(event, Panel::Load, Ok(ExecutionRequest::load()), dispatch)
    }

    fn submit<E, D>(
        &self,
        event: &E,
        panel: Panel,
        request: Result<ExecutionRequest, ExecutionFailure>,
        dispatch: D,
    ) -> impl Future<Output = ()> + 'static
    where
        E: SubmitEvent,
        D: Fn(ExecutionAction) + 'static,
    {
        event.prevent_default();
        for action in set_busy(panel) {
            dispatch(action);
        }

        let transport = Rc::clone(&self.transport);
        async move {
            let outcome = match request {
                Ok(request) => {
                    info!(panel = panel.as_str(), "submitting {}", request.endpoint.name());
                    transport.send(&request).await
                }
                Err(failure) => Err(failure),
            };

            match outcome {
                Ok(response) => dispatch(ExecutionAction::RenderSuccess(panel, response)),
                Err(failure) => {
                    warn!(panel = panel.as_str(), "request failed: {}", failure.message);
                    dispatch(ExecutionAction::RenderError(panel, failure))
                }
            }
            dispatch(set_idle());
        }
    }
}
