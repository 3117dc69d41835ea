use dioxus::prelude::*;

use crate::components::input::{FieldInput, InputType};
use crate::features::execution::{ExecutionAction, ExecutionViewState};

const MONTHS: [(&str, &str); 12] = [
    ("01", "January"),
    ("02", "February"),
    ("03", "March"),
    ("04", "April"),
    ("05", "May"),
    ("06", "June"),
    ("07", "July"),
    ("08", "August"),
    ("09", "September"),
    ("10", "October"),
    ("11", "November"),
    ("12", "December"),
];

#[derive(Props, PartialEq, Clone)]
pub struct PeriodSelectorProps {
    pub state: Signal<ExecutionViewState>,
    pub dispatch: EventHandler<ExecutionAction>,
}

/// Month and year inputs read by both download forms
#[component]
pub fn PeriodSelector(props: PeriodSelectorProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let month = state().form.month;
    let year = state().form.year;

    rsx! {
        div {
            class: "period-selector",

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    r#for: "month",
                    "Month:"
                }
                select {
                    id: "month",
                    name: "month",
                    class: "input-field",
                    value: "{month}",
                    onchange: move |event| dispatch.call(ExecutionAction::SetMonth(event.value())),
                    option { value: "", selected: month.is_empty(), "Select a month" }
                    for (value, name) in MONTHS {
                        option {
                            key: "{value}",
                            value: "{value}",
                            selected: month == value,
                            "{name}"
                        }
                    }
                }
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    r#for: "year",
                    "Year:"
                }
                FieldInput {
                    id: "year".to_string(),
                    value: year,
                    placeholder: "2024".to_string(),
                    input_type: InputType::Numeric,
                    on_change: move |value: String| dispatch.call(ExecutionAction::SetYear(value))
                }
            }
        }
    }
}
