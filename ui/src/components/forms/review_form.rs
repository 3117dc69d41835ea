use dioxus::prelude::*;

use super::AdminDispatcher;
use crate::console_info;
use crate::features::execution::{ExecutionAction, ExecutionViewState};

#[derive(Props, PartialEq, Clone)]
pub struct ReviewFormProps {
    pub state: Signal<ExecutionViewState>,
    pub dispatch: EventHandler<ExecutionAction>,
    pub dispatcher: AdminDispatcher,
}

#[component]
pub fn ReviewForm(props: ReviewFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let dispatcher = props.dispatcher.clone();

    rsx! {
        form {
            id: "data-review",
            class: "execution-form",
            onsubmit: move |event: FormEvent| {
                console_info!("[Execution Admin] Review submitted");
                spawn(dispatcher.handle_review(&event, move |action| dispatch.call(action)));
            },

            div {
                class: "button-section",
                button {
                    r#type: "submit",
                    class: "execution-button",
                    disabled: !state().buttons_enabled,
                    "Review"
                }
            }
        }
    }
}
