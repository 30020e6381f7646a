use super::payment::PaymentMethod;
use super::quantity::Quantity;
use super::state::ChatState;
use serde::Serialize;

/// Everything the ordering flow knows about one conversation.
///
/// Fields are read through accessors. Only the transition functions in
/// `application::flow` produce modified copies, so collaborators holding a
/// snapshot can never push the machine into another state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionContext {
    platform: String,
    service: String,
    selected_quantity: Option<Quantity>,
    selected_payment: Option<PaymentMethod>,
    social_url: Option<String>,
    current_state: ChatState,
}

impl SessionContext {
    pub fn new(platform: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            service: service.into(),
            selected_quantity: None,
            selected_payment: None,
            social_url: None,
            current_state: ChatState::Greeting,
        }
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn selected_quantity(&self) -> Option<Quantity> {
        self.selected_quantity
    }

    pub fn selected_payment(&self) -> Option<PaymentMethod> {
        self.selected_payment
    }

    pub fn social_url(&self) -> Option<&str> {
        self.social_url.as_deref()
    }

    pub fn current_state(&self) -> ChatState {
        self.current_state
    }

    pub(crate) fn moved_to(&self, state: ChatState) -> Self {
        Self {
            current_state: state,
            ..self.clone()
        }
    }

    /// Records the quantity unless one was already chosen this session.
    pub(crate) fn with_quantity(mut self, quantity: Quantity) -> Self {
        self.selected_quantity.get_or_insert(quantity);
        self
    }

    pub(crate) fn with_payment(mut self, method: PaymentMethod) -> Self {
        self.selected_payment = Some(method);
        self
    }

    pub(crate) fn with_social_url(mut self, url: impl Into<String>) -> Self {
        self.social_url = Some(url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context_starts_at_greeting() {
        let ctx = SessionContext::new("Instagram", "Followers");
        assert_eq!(ctx.current_state(), ChatState::Greeting);
        assert_eq!(ctx.platform(), "Instagram");
        assert_eq!(ctx.service(), "Followers");
        assert!(ctx.selected_quantity().is_none());
        assert!(ctx.selected_payment().is_none());
        assert!(ctx.social_url().is_none());
    }

    #[test]
    fn test_moved_to_leaves_original_untouched() {
        let ctx = SessionContext::new("TikTok", "Likes");
        let next = ctx.moved_to(ChatState::QuantitySelection);
        assert_eq!(ctx.current_state(), ChatState::Greeting);
        assert_eq!(next.current_state(), ChatState::QuantitySelection);
    }

    #[test]
    fn test_quantity_is_set_once() {
        let first = Quantity::new(500).unwrap();
        let second = Quantity::new(900).unwrap();
        let ctx = SessionContext::new("TikTok", "Likes")
            .with_quantity(first)
            .with_quantity(second);
        assert_eq!(ctx.selected_quantity(), Some(first));
    }
}
