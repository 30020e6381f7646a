use super::flow::{self, Transition};
use crate::domain::context::SessionContext;
use crate::domain::pricing::{Price, PricingCalculator};
use crate::domain::response::ResponseDescriptor;
use crate::domain::state::ChatState;
use tracing::{debug, info};

/// The main entry point for one ordering conversation.
///
/// `OrderFlowEngine` owns the session context and replaces it wholesale with
/// the result of each transition. Calls take `&mut self`, so a second
/// message cannot be processed against the same context until the previous
/// one has returned.
#[derive(Debug, Clone)]
pub struct OrderFlowEngine {
    context: SessionContext,
    pricing: PricingCalculator,
}

impl OrderFlowEngine {
    /// Creates an engine for a platform/service pair with default pricing.
    pub fn new(platform: impl Into<String>, service: impl Into<String>) -> Self {
        Self::with_pricing(platform, service, PricingCalculator::default())
    }

    /// Creates an engine with explicit pricing rates.
    ///
    /// # Arguments
    ///
    /// * `platform` - Social platform the order is for, e.g. "Instagram".
    /// * `service` - Engagement type, e.g. "Followers".
    /// * `pricing` - Calculator used whenever a total is displayed.
    pub fn with_pricing(
        platform: impl Into<String>,
        service: impl Into<String>,
        pricing: PricingCalculator,
    ) -> Self {
        let context = SessionContext::new(platform, service);
        debug!(
            platform = context.platform(),
            service = context.service(),
            "order flow session opened"
        );
        Self { context, pricing }
    }

    /// Processes one user message and returns what to render.
    pub fn process_message(&mut self, input: &str) -> ResponseDescriptor {
        debug!(state = %self.context.current_state(), input, "processing message");
        let transition = flow::step(&self.context, input, &self.pricing);
        self.apply(transition)
    }

    /// Forces the confirmation notice after the caller observed a payment.
    pub fn trigger_confirmation(&mut self) -> ResponseDescriptor {
        debug!(state = %self.context.current_state(), "confirmation triggered");
        let transition = flow::confirm(&self.context);
        self.apply(transition)
    }

    /// Read-only view of the session.
    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// Owned copy of the session, detached from the engine.
    pub fn snapshot(&self) -> SessionContext {
        self.context.clone()
    }

    pub fn state(&self) -> ChatState {
        self.context.current_state()
    }

    /// Current total, derived from the stored quantity and payment method.
    pub fn quote(&self) -> Price {
        self.pricing
            .quote(self.context.selected_quantity(), self.context.selected_payment())
    }

    fn apply(&mut self, transition: Transition) -> ResponseDescriptor {
        let Transition { context, response } = transition;
        let from = self.context.current_state();
        let to = context.current_state();
        if from != to {
            info!(%from, %to, "order flow advanced");
        } else {
            debug!(state = %to, "input rejected, state held");
        }
        self.context = context;
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::PaymentMethod;
    use crate::domain::pricing::Currency;

    #[test]
    fn test_full_conversation() {
        let mut engine = OrderFlowEngine::new("Instagram", "Followers");

        let r = engine.process_message(flow::START_TOKEN);
        assert!(r.message.contains("Instagram"));
        assert!(r.message.to_lowercase().contains("followers"));
        assert!(r.show_quantity_options);

        let r = engine.process_message("500");
        assert_eq!(engine.state(), ChatState::PaymentSelection);
        assert_eq!(engine.context().selected_quantity().map(|q| q.value()), Some(500));
        assert!(r.show_payment_options);

        let r = engine.process_message("pay with crypto");
        assert_eq!(engine.state(), ChatState::UrlCollection);
        assert_eq!(engine.context().selected_payment(), Some(PaymentMethod::Crypto));
        assert!(r.message.contains("instagram.com"));

        let r = engine.process_message("https://instagram.com/me");
        assert_eq!(engine.state(), ChatState::PaymentProcessing);
        assert!(r.show_pay_action);
        // 500 * 4.5 / 1500
        assert_eq!(r.amount.as_deref(), Some("$1.50 USDT"));
        assert_eq!(engine.context().social_url(), Some("https://instagram.com/me"));

        let r = engine.process_message("i have made payment");
        assert_eq!(engine.state(), ChatState::Confirmation);
        assert!(r.message.contains("500 followers"));

        let r = engine.trigger_confirmation();
        assert!(r.show_close_action);
        assert_eq!(engine.state(), ChatState::UserChoice);

        let r = engine.process_message("close chat");
        assert!(r.close_session);
        assert_eq!(engine.state(), ChatState::Completed);
    }

    #[test]
    fn test_quote_is_recomputed_from_context() {
        let mut engine = OrderFlowEngine::new("TikTok", "Views");
        assert_eq!(engine.quote().currency, Currency::Ngn);

        engine.process_message(flow::START_TOKEN);
        engine.process_message("1000");
        engine.process_message("naira");
        assert_eq!(engine.quote().to_string(), "₦4,500");
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut engine = OrderFlowEngine::new("TikTok", "Views");
        let before = engine.snapshot();
        engine.process_message(flow::START_TOKEN);
        assert_eq!(before.current_state(), ChatState::Greeting);
        assert_eq!(engine.state(), ChatState::QuantitySelection);
    }
}
