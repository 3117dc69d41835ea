use dioxus::prelude::*;

use super::AdminDispatcher;
use crate::components::input::{FieldInput, InputType};
use crate::console_info;
use crate::features::execution::{ExecutionAction, ExecutionViewState, FinancialField};

#[derive(Props, PartialEq, Clone)]
pub struct ManualDownloadFormProps {
    pub state: Signal<ExecutionViewState>,
    pub dispatch: EventHandler<ExecutionAction>,
    pub dispatcher: AdminDispatcher,
}

/// Manual download: the administrator types the summary figures in
#[component]
pub fn ManualDownloadForm(props: ManualDownloadFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let dispatcher = props.dispatcher.clone();

    rsx! {
        form {
            id: "data-download-manual",
            class: "execution-form",
            onsubmit: move |event: FormEvent| {
                let form = state.read().form.clone();
                console_info!(
                    "[Execution Admin] Manual download submitted for {}/{}",
                    form.month,
                    form.year
                );
                spawn(dispatcher.handle_manual_download(&event, &form, move |action| {
                    dispatch.call(action)
                }));
            },

            for field in FinancialField::ALL {
                div {
                    key: "{field.input_id()}",
                    class: "input-section",
                    label {
                        class: "input-label",
                        r#for: "{field.input_id()}",
                        "{field.label()}:"
                    }
                    FieldInput {
                        id: field.input_id().to_string(),
                        value: state().form.figure(field).to_string(),
                        placeholder: "0".to_string(),
                        input_type: InputType::Decimal,
                        on_change: move |value: String| {
                            dispatch.call(ExecutionAction::SetFigure(field, value));
                        }
                    }
                }
            }

            div {
                class: "button-section",
                button {
                    r#type: "submit",
                    class: "execution-button",
                    disabled: !state().buttons_enabled,
                    "Download with these figures"
                }
            }
        }
    }
}
