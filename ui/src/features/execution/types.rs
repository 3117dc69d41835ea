// View state for the execution admin page - no dioxus imports needed here
use tracing::debug;

use crate::services::client::{ExecutionFailure, ExecutionResponse};

/// Result regions of the page, in the order the admin workflow runs
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Panel {
    Download,
    Review,
    Load,
}

impl Panel {
    pub const ALL: [Panel; 3] = [Panel::Download, Panel::Review, Panel::Load];

    pub fn as_str(&self) -> &'static str {
        match self {
            Panel::Download => "download",
            Panel::Review => "review",
            Panel::Load => "load",
        }
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub enum PanelState {
    #[default]
    Empty,
    Busy,
    Success(ExecutionResponse),
    Error(ExecutionFailure),
}

/// Raw values of every input on the page
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ExecutionForm {
    pub month: String,
    pub year: String,
    pub ingresos: String,
    pub gastos: String,
    pub inversiones: String,
    pub ingresos_eliminaciones_bruto: String,
    pub gastos_eliminaciones_bruto: String,
}

/// The five figures of the manual download form
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FinancialField {
    Ingresos,
    Gastos,
    Inversiones,
    IngresosEliminacionesBruto,
    GastosEliminacionesBruto,
}

impl FinancialField {
    pub const ALL: [FinancialField; 5] = [
        FinancialField::Ingresos,
        FinancialField::Gastos,
        FinancialField::Inversiones,
        FinancialField::IngresosEliminacionesBruto,
        FinancialField::GastosEliminacionesBruto,
    ];

    /// DOM id of the input, kept from the server-rendered page
    pub fn input_id(&self) -> &'static str {
        match self {
            FinancialField::Ingresos => "input-ingresos",
            FinancialField::Gastos => "input-gastos",
            FinancialField::Inversiones => "input-inversiones",
            FinancialField::IngresosEliminacionesBruto => "input-ingresos-eliminaciones-bruto",
            FinancialField::GastosEliminacionesBruto => "input-gastos-eliminaciones-bruto",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FinancialField::Ingresos => "Ingresos",
            FinancialField::Gastos => "Gastos",
            FinancialField::Inversiones => "Inversiones",
            FinancialField::IngresosEliminacionesBruto => "Ingresos: eliminaciones (bruto)",
            FinancialField::GastosEliminacionesBruto => "Gastos: eliminaciones (bruto)",
        }
    }
}

impl ExecutionForm {
    pub fn figure(&self, field: FinancialField) -> &str {
        match field {
            FinancialField::Ingresos => &self.ingresos,
            FinancialField::Gastos => &self.gastos,
            FinancialField::Inversiones => &self.inversiones,
            FinancialField::IngresosEliminacionesBruto => &self.ingresos_eliminaciones_bruto,
            FinancialField::GastosEliminacionesBruto => &self.gastos_eliminaciones_bruto,
        }
    }

    fn figure_mut(&mut self, field: FinancialField) -> &mut String {
        match field {
            FinancialField::Ingresos => &mut self.ingresos,
            FinancialField::Gastos => &mut self.gastos,
            FinancialField::Inversiones => &mut self.inversiones,
            FinancialField::IngresosEliminacionesBruto => &mut self.ingresos_eliminaciones_bruto,
            FinancialField::GastosEliminacionesBruto => &mut self.gastos_eliminaciones_bruto,
        }
    }
}

// Action enum for state mutations
#[derive(Clone, PartialEq, Debug)]
pub enum ExecutionAction {
    // Controls
    DisableButtons,
    EnableButtons,

    // Result panels
    ClearResult(Panel),
    ShowSpinner(Panel),
    RenderSuccess(Panel, ExecutionResponse),
    RenderError(Panel, ExecutionFailure),

    // Form inputs
    SetMonth(String),
    SetYear(String),
    SetFigure(FinancialField, String),
}

#[derive(Clone, PartialEq, Debug)]
pub struct ExecutionViewState {
    pub buttons_enabled: bool,
    pub download: PanelState,
    pub review: PanelState,
    pub load: PanelState,
    pub form: ExecutionForm,
}

impl Default for ExecutionViewState {
    fn default() -> Self {
        Self {
            buttons_enabled: true,
            download: PanelState::Empty,
            review: PanelState::Empty,
            load: PanelState::Empty,
            form: ExecutionForm::default(),
        }
    }
}

impl ExecutionViewState {
    pub fn reduce(mut self, action: ExecutionAction) -> Self {
        self.reduce_in_place(action);
        self
    }

    /// Apply an action without moving the state, so a Dioxus signal can be
    /// updated through `with_mut`
    pub fn reduce_in_place(&mut self, action: ExecutionAction) {
        match action {
            ExecutionAction::DisableButtons => {
                self.buttons_enabled = false;
            }
            ExecutionAction::EnableButtons => {
                self.buttons_enabled = true;
            }
            ExecutionAction::ClearResult(panel) => {
                *self.panel_mut(panel) = PanelState::Empty;
            }
            ExecutionAction::ShowSpinner(panel) => {
                *self.panel_mut(panel) = PanelState::Busy;
            }
            ExecutionAction::RenderSuccess(panel, response) => {
                debug!(panel = panel.as_str(), status = response.status, "rendering success");
                *self.panel_mut(panel) = PanelState::Success(response);
            }
            ExecutionAction::RenderError(panel, failure) => {
                debug!(
                    panel = panel.as_str(),
                    kind = failure.kind.as_str(),
                    "rendering error: {}",
                    failure.message
                );
                *self.panel_mut(panel) = PanelState::Error(failure);
            }
            ExecutionAction::SetMonth(month) => {
                self.form.month = month;
            }
            ExecutionAction::SetYear(year) => {
                self.form.year = year;
            }
            ExecutionAction::SetFigure(field, value) => {
                *self.form.figure_mut(field) = value;
            }
        }
    }

    pub fn panel(&self, panel: Panel) -> &PanelState {
        match panel {
            Panel::Download => &self.download,
            Panel::Review => &self.review,
            Panel::Load => &self.load,
        }
    }

    fn panel_mut(&mut self, panel: Panel) -> &mut PanelState {
        match panel {
            Panel::Download => &mut self.download,
            Panel::Review => &mut self.review,
            Panel::Load => &mut self.load,
        }
    }

    /// True while any panel is waiting on a request
    pub fn is_busy(&self) -> bool {
        Panel::ALL
            .iter()
            .any(|panel| *self.panel(*panel) == PanelState::Busy)
    }
}

/// Actions that put the page into the busy state for `panel`.
///
/// Results of `panel` and of every later workflow step are stale once it
/// reruns, so they are all cleared before the spinner goes up.
pub fn set_busy(panel: Panel) -> Vec<ExecutionAction> {
    let mut actions = vec![ExecutionAction::DisableButtons];
    actions.extend(
        Panel::ALL
            .iter()
            .filter(|p| **p >= panel)
            .map(|p| ExecutionAction::ClearResult(*p)),
    );
    actions.push(ExecutionAction::ShowSpinner(panel));
    actions
}

/// Action that returns the page to idle once a request completes
pub fn set_idle() -> ExecutionAction {
    ExecutionAction::EnableButtons
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::client::ResponseBody;

    fn ok_response() -> ExecutionResponse {
        ExecutionResponse::new(200, ResponseBody::Text("ok".to_string()))
    }

    #[test]
    fn test_set_busy_download_clears_every_panel() {
        assert_eq!(
            set_busy(Panel::Download),
            vec![
                ExecutionAction::DisableButtons,
                ExecutionAction::ClearResult(Panel::Download),
                ExecutionAction::ClearResult(Panel::Review),
                ExecutionAction::ClearResult(Panel::Load),
                ExecutionAction::ShowSpinner(Panel::Download),
            ]
        );
    }

    #[test]
    fn test_set_busy_review_leaves_download_alone() {
        assert_eq!(
            set_busy(Panel::Review),
            vec![
                ExecutionAction::DisableButtons,
                ExecutionAction::ClearResult(Panel::Review),
                ExecutionAction::ClearResult(Panel::Load),
                ExecutionAction::ShowSpinner(Panel::Review),
            ]
        );
    }

    #[test]
    fn test_set_busy_load_clears_only_load() {
        assert_eq!(
            set_busy(Panel::Load),
            vec![
                ExecutionAction::DisableButtons,
                ExecutionAction::ClearResult(Panel::Load),
                ExecutionAction::ShowSpinner(Panel::Load),
            ]
        );
    }

    #[test]
    fn test_busy_then_idle_round() {
        let mut state = ExecutionViewState::default();
        state.reduce_in_place(ExecutionAction::RenderSuccess(Panel::Download, ok_response()));

        for action in set_busy(Panel::Review) {
            state.reduce_in_place(action);
        }
        assert!(!state.buttons_enabled);
        assert!(state.is_busy());
        assert_eq!(state.review, PanelState::Busy);
        assert_eq!(state.download, PanelState::Success(ok_response()));

        state.reduce_in_place(ExecutionAction::RenderError(
            Panel::Review,
            ExecutionFailure::http(500, "Internal Server Error", None),
        ));
        state.reduce_in_place(set_idle());
        assert!(state.buttons_enabled);
        assert!(!state.is_busy());
        assert!(matches!(state.review, PanelState::Error(_)));
    }

    #[test]
    fn test_form_inputs() {
        let state = ExecutionViewState::default()
            .reduce(ExecutionAction::SetMonth("03".to_string()))
            .reduce(ExecutionAction::SetYear("2024".to_string()))
            .reduce(ExecutionAction::SetFigure(
                FinancialField::GastosEliminacionesBruto,
                "12".to_string(),
            ));

        assert_eq!(state.form.month, "03");
        assert_eq!(state.form.year, "2024");
        assert_eq!(state.form.figure(FinancialField::GastosEliminacionesBruto), "12");
        assert_eq!(state.form.gastos_eliminaciones_bruto, "12");
        assert_eq!(state.form.ingresos, "");
    }
}
