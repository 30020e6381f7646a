use super::state::ChatState;
use serde::Serialize;

/// What the presentation side should render after one processing call.
///
/// The affordance flags are exhaustive: anything not flagged is hidden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseDescriptor {
    pub message: String,
    pub show_quantity_options: bool,
    pub show_payment_options: bool,
    pub show_pay_action: bool,
    pub show_close_action: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    pub close_session: bool,
    /// State the machine settled in after this call.
    pub next_state: ChatState,
}

impl ResponseDescriptor {
    /// Plain text with no affordances.
    pub fn text(message: impl Into<String>, next_state: ChatState) -> Self {
        Self {
            message: message.into(),
            show_quantity_options: false,
            show_payment_options: false,
            show_pay_action: false,
            show_close_action: false,
            amount: None,
            close_session: false,
            next_state,
        }
    }

    pub fn with_quantity_options(mut self) -> Self {
        self.show_quantity_options = true;
        self
    }

    pub fn with_payment_options(mut self) -> Self {
        self.show_payment_options = true;
        self
    }

    /// Shows the pay action together with the total it charges.
    pub fn with_pay_action(mut self, amount: impl Into<String>) -> Self {
        self.show_pay_action = true;
        self.amount = Some(amount.into());
        self
    }

    pub fn with_close_action(mut self) -> Self {
        self.show_close_action = true;
        self
    }

    pub fn closing(mut self) -> Self {
        self.close_session = true;
        self
    }
}
