use dioxus::prelude::*;

use crate::components::display::ResultPanel;
use crate::components::forms::{
    AdminDispatcher, LoadForm, ManualDownloadForm, PeriodSelector, ReviewForm, ScrapDownloadForm,
};
use crate::features::execution::{ExecutionAction, ExecutionViewState, FormDispatcher, Panel};
use crate::services::client::ExecutionClient;
use crate::services::config::AdminConfig;
use crate::{console_error, console_info, console_warn};

const EXECUTION_ADMIN_CSS: Asset = asset!("/assets/styling/execution_admin.css");

/// Build the dispatcher once per page; falls back to defaults on invalid config
fn build_dispatcher(config: &AdminConfig) -> Result<AdminDispatcher, String> {
    let config = match config.validate() {
        Ok(()) => config.clone(),
        Err(errors) => {
            for error in &errors {
                console_warn!("[Execution Admin] Invalid configuration: {}", error);
            }
            AdminConfig::default()
        }
    };

    match ExecutionClient::new(&config) {
        Ok(client) => {
            console_info!(
                "[Execution Admin] Endpoints resolve against {}",
                client.base_url()
            );
            Ok(FormDispatcher::new(client))
        }
        Err(e) => {
            console_error!("[Execution Admin] Failed to create client: {}", e);
            Err(e.to_string())
        }
    }
}

#[component]
pub fn ExecutionAdmin(#[props(default)] config: AdminConfig) -> Element {
    let mut state = use_signal(ExecutionViewState::default);
    let dispatcher = use_hook(move || build_dispatcher(&config));

    // Dispatch function for actions - in-place reduction keeps the signal reactive
    let dispatch = EventHandler::new(move |action: ExecutionAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    let dispatcher = match dispatcher {
        Ok(dispatcher) => dispatcher,
        Err(message) => {
            return rsx! {
                document::Link { rel: "stylesheet", href: EXECUTION_ADMIN_CSS }
                div {
                    class: "execution-admin-container",
                    div {
                        class: "execution-result error",
                        "✗ The admin client could not start: {message}"
                    }
                }
            };
        }
    };

    let container_class = if state().is_busy() {
        "execution-admin-container busy"
    } else {
        "execution-admin-container"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: EXECUTION_ADMIN_CSS }

        div {
            class: "{container_class}",

            h1 {
                class: "admin-title",
                "Budget Execution"
            }

            // Step 1: Download
            section {
                class: "admin-step",
                h2 { class: "form-title", "1. Download" }

                PeriodSelector {
                    state: state,
                    dispatch: dispatch
                }

                ScrapDownloadForm {
                    state: state,
                    dispatch: dispatch,
                    dispatcher: dispatcher.clone()
                }

                details {
                    class: "manual-download",
                    summary { "Enter the figures manually" }
                    ManualDownloadForm {
                        state: state,
                        dispatch: dispatch,
                        dispatcher: dispatcher.clone()
                    }
                }

                ResultPanel {
                    panel: Panel::Download,
                    state: state().download
                }
            }

            // Step 2: Review
            section {
                class: "admin-step",
                h2 { class: "form-title", "2. Review" }

                ReviewForm {
                    state: state,
                    dispatch: dispatch,
                    dispatcher: dispatcher.clone()
                }

                ResultPanel {
                    panel: Panel::Review,
                    state: state().review
                }
            }

            // Step 3: Load
            section {
                class: "admin-step",
                h2 { class: "form-title", "3. Load" }

                LoadForm {
                    state: state,
                    dispatch: dispatch,
                    dispatcher: dispatcher
                }

                ResultPanel {
                    panel: Panel::Load,
                    state: state().load
                }
            }
        }
    }
}
