use dioxus::prelude::*;

use super::AdminDispatcher;
use crate::console_info;
use crate::features::execution::{ExecutionAction, ExecutionViewState};

#[derive(Props, PartialEq, Clone)]
pub struct ScrapDownloadFormProps {
    pub state: Signal<ExecutionViewState>,
    pub dispatch: EventHandler<ExecutionAction>,
    pub dispatcher: AdminDispatcher,
}

/// Automatic download: the backend scrapes the figures for the selected period
#[component]
pub fn ScrapDownloadForm(props: ScrapDownloadFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let dispatcher = props.dispatcher.clone();

    rsx! {
        form {
            id: "data-download-scrap",
            class: "execution-form",
            onsubmit: move |event: FormEvent| {
                let form = state.read().form.clone();
                console_info!(
                    "[Execution Admin] Scrap download submitted for {}/{}",
                    form.month,
                    form.year
                );
                spawn(dispatcher.handle_scrap_download(&event, &form, move |action| {
                    dispatch.call(action)
                }));
            },

            p {
                class: "form-description",
                "Download the execution data published for the selected month."
            }

            div {
                class: "button-section",
                button {
                    r#type: "submit",
                    class: "execution-button",
                    disabled: !state().buttons_enabled,
                    "Download"
                }
            }
        }
    }
}
