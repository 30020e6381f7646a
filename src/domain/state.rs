use serde::{Deserialize, Serialize};
use std::fmt;

/// Stages of an ordering conversation, in the order they are visited.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ChatState {
    #[default]
    Greeting,
    QuantitySelection,
    PaymentSelection,
    UrlCollection,
    PaymentProcessing,
    Confirmation,
    UserChoice,
    Completed,
}

impl ChatState {
    /// Returns true once no further transitions are defined.
    pub fn is_terminal(self) -> bool {
        self == ChatState::Completed
    }
}

impl fmt::Display for ChatState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChatState::Greeting => "greeting",
            ChatState::QuantitySelection => "quantity_selection",
            ChatState::PaymentSelection => "payment_selection",
            ChatState::UrlCollection => "url_collection",
            ChatState::PaymentProcessing => "payment_processing",
            ChatState::Confirmation => "confirmation",
            ChatState::UserChoice => "user_choice",
            ChatState::Completed => "completed",
        };
        f.write_str(name)
    }
}
