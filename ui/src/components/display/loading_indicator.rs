use dioxus::prelude::*;

use crate::features::execution::Panel;

#[derive(Props, PartialEq, Clone)]
pub struct LoadingIndicatorProps {
    pub panel: Panel,
    pub message: String,
}

/// Spinner shown in a result panel while its request is in flight
#[component]
pub fn LoadingIndicator(props: LoadingIndicatorProps) -> Element {
    rsx! {
        div {
            id: "{props.panel.as_str()}-spinner",
            class: "loading-indicator",
            role: "status",
            span { class: "spinner" }
            "⏳ {props.message}"
        }
    }
}
