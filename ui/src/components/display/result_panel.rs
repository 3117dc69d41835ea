use dioxus::prelude::*;

use crate::components::display::LoadingIndicator;
use crate::features::execution::{Panel, PanelState};
use crate::services::client::ExecutionFailure;

#[derive(Props, PartialEq, Clone)]
pub struct ResultPanelProps {
    pub panel: Panel,
    pub state: PanelState,
}

/// Result region of one workflow step
#[component]
pub fn ResultPanel(props: ResultPanelProps) -> Element {
    let panel = props.panel;

    let content = match props.state {
        PanelState::Empty => rsx! {},
        PanelState::Busy => rsx! {
            LoadingIndicator {
                panel: panel,
                message: busy_message(panel).to_string()
            }
        },
        PanelState::Success(response) => rsx! {
            div {
                class: "execution-result success",
                div {
                    class: "result-message",
                    "✓ {success_message(panel)}"
                }
                pre {
                    class: "result-body",
                    "{response.body.display()}"
                }
            }
        },
        PanelState::Error(failure) => {
            let headline = error_headline(&failure);
            let body = failure.body.filter(|b| !b.trim().is_empty());
            rsx! {
                div {
                    class: "execution-result error",
                    div {
                        class: "result-message",
                        "✗ {headline}"
                    }
                    if let Some(body) = body {
                        pre {
                            class: "result-body",
                            "{body}"
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            id: "{panel.as_str()}-result",
            class: "result-panel",
            {content}
        }
    }
}

fn busy_message(panel: Panel) -> &'static str {
    match panel {
        Panel::Download => "Downloading execution data...",
        Panel::Review => "Reviewing downloaded data...",
        Panel::Load => "Loading data...",
    }
}

fn success_message(panel: Panel) -> &'static str {
    match panel {
        Panel::Download => "Download finished",
        Panel::Review => "Review finished",
        Panel::Load => "Load finished",
    }
}

fn error_headline(failure: &ExecutionFailure) -> String {
    match failure.status {
        Some(status) => format!(
            "Error {} ({}): {}",
            status,
            failure.kind.as_str(),
            failure.message
        ),
        None => format!("Error ({}): {}", failure.kind.as_str(), failure.message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_headline_with_status() {
        let failure = ExecutionFailure::http(500, "Internal Server Error", None);
        assert_eq!(
            error_headline(&failure),
            "Error 500 (http): Internal Server Error"
        );
    }

    #[test]
    fn test_error_headline_without_status() {
        let failure = ExecutionFailure::network("connection refused");
        assert_eq!(error_headline(&failure), "Error (network): connection refused");
    }
}
