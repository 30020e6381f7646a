//! Pure state transitions of the ordering conversation.
//!
//! Each function takes the current context by reference and returns the
//! context to continue with plus the descriptor to render. Nothing here
//! mutates shared state, so every step can be tested in isolation.

use crate::domain::context::SessionContext;
use crate::domain::payment::PaymentMethod;
use crate::domain::platform;
use crate::domain::pricing::PricingCalculator;
use crate::domain::quantity::Quantity;
use crate::domain::response::ResponseDescriptor;
use crate::domain::state::ChatState;
use crate::error::ValidationError;

/// Sentinel the collaborator sends to open a conversation.
pub const START_TOKEN: &str = "start";

const CONFIRMATION_KEYWORDS: [&str; 3] = ["payment", "paid", "done"];

const ORDER_NOTICE: &str = "Notes\n\
📌 We can not cancel your order once it has been submitted.\n\
📌 Check the link format carefully before placing the order.\n\
📌 Kindly make sure your account is public, Not private.";

/// Outcome of one step: the context to keep and what to show.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub context: SessionContext,
    pub response: ResponseDescriptor,
}

impl Transition {
    fn new(context: SessionContext, response: ResponseDescriptor) -> Self {
        Self { context, response }
    }

    /// Rejection: context unchanged.
    fn stay(ctx: &SessionContext, response: ResponseDescriptor) -> Self {
        Self::new(ctx.clone(), response)
    }
}

/// Advances the machine by one user message.
pub fn step(ctx: &SessionContext, input: &str, pricing: &PricingCalculator) -> Transition {
    match ctx.current_state() {
        ChatState::Greeting => greet(ctx),
        ChatState::QuantitySelection => select_quantity(ctx, input),
        ChatState::PaymentSelection => select_payment(ctx, input),
        ChatState::UrlCollection => collect_url(ctx, input, pricing),
        ChatState::PaymentProcessing => process_payment(ctx, input, pricing),
        ChatState::Confirmation => confirm(ctx),
        ChatState::UserChoice => close(ctx),
        ChatState::Completed => Transition::stay(
            ctx,
            ResponseDescriptor::text("Chat session ended.", ChatState::Completed).closing(),
        ),
    }
}

/// Moves to `UserChoice` with the order notice, whatever the current state.
pub fn confirm(ctx: &SessionContext) -> Transition {
    Transition::new(
        ctx.moved_to(ChatState::UserChoice),
        ResponseDescriptor::text(ORDER_NOTICE, ChatState::UserChoice).with_close_action(),
    )
}

fn greet(ctx: &SessionContext) -> Transition {
    let message = platform::greeting(ctx.platform(), ctx.service());
    Transition::new(
        ctx.moved_to(ChatState::QuantitySelection),
        ResponseDescriptor::text(message, ChatState::QuantitySelection).with_quantity_options(),
    )
}

fn select_quantity(ctx: &SessionContext, input: &str) -> Transition {
    match Quantity::parse(input) {
        Ok(quantity) => Transition::new(
            ctx.moved_to(ChatState::PaymentSelection).with_quantity(quantity),
            ResponseDescriptor::text(
                "Perfect! Now, how would you like to pay for this?",
                ChatState::PaymentSelection,
            )
            .with_payment_options(),
        ),
        Err(err) => {
            let message = quantity_rejection(&err, ctx.service());
            Transition::stay(
                ctx,
                ResponseDescriptor::text(message, ChatState::QuantitySelection)
                    .with_quantity_options(),
            )
        }
    }
}

fn quantity_rejection(err: &ValidationError, service: &str) -> String {
    match err {
        ValidationError::QuantityTooLow(_) => format!(
            "❌ Minimum quantity is {}. Please select at least {} {}.",
            Quantity::MIN,
            Quantity::MIN,
            service.to_lowercase()
        ),
        ValidationError::QuantityTooHigh(_) => "❌ Maximum quantity is 10,000. Please select a lower amount or contact support for bulk orders.".to_string(),
        _ => "❌ Please enter a number (like 1000) or select from the options above.".to_string(),
    }
}

fn select_payment(ctx: &SessionContext, input: &str) -> Transition {
    match PaymentMethod::from_selection(input) {
        Ok(method) => {
            let message = format!(
                "Please paste your {} profile URL here.\n\nExample: {}",
                ctx.platform(),
                platform::url_example(ctx.platform())
            );
            Transition::new(
                ctx.moved_to(ChatState::UrlCollection).with_payment(method),
                ResponseDescriptor::text(message, ChatState::UrlCollection),
            )
        }
        Err(_) => Transition::stay(
            ctx,
            ResponseDescriptor::text(
                "❌ Please select a payment method from the options above (NGN or Crypto).",
                ChatState::PaymentSelection,
            )
            .with_payment_options(),
        ),
    }
}

fn collect_url(ctx: &SessionContext, input: &str, pricing: &PricingCalculator) -> Transition {
    match platform::validate_url(ctx.platform(), input) {
        Ok(()) => {
            let next = ctx
                .moved_to(ChatState::PaymentProcessing)
                .with_social_url(input);
            let amount = pricing
                .quote(next.selected_quantity(), next.selected_payment())
                .to_string();
            let message = format!(
                "Great! The total amount for {} {} is {}",
                quantity_label(&next),
                next.service().to_lowercase(),
                amount
            );
            Transition::new(
                next,
                ResponseDescriptor::text(message, ChatState::PaymentProcessing)
                    .with_pay_action(amount),
            )
        }
        Err(ValidationError::UnsupportedPlatform(_)) => Transition::stay(
            ctx,
            ResponseDescriptor::text(
                format!(
                    "❌ Platform {} is not supported yet. Please contact support.",
                    ctx.platform()
                ),
                ChatState::UrlCollection,
            ),
        ),
        Err(_) => Transition::stay(
            ctx,
            ResponseDescriptor::text(
                format!(
                    "❌ Please enter a valid {} URL.\n\nExamples:\n{}",
                    ctx.platform(),
                    platform::url_examples(ctx.platform())
                ),
                ChatState::UrlCollection,
            ),
        ),
    }
}

fn process_payment(ctx: &SessionContext, input: &str, pricing: &PricingCalculator) -> Transition {
    let lowered = input.to_lowercase();
    if CONFIRMATION_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        let message = format!(
            "Payment confirmed!\nThank you buddy, Your {} {} will arrive shortly.",
            quantity_label(ctx),
            ctx.service().to_lowercase()
        );
        return Transition::new(
            ctx.moved_to(ChatState::Confirmation),
            ResponseDescriptor::text(message, ChatState::Confirmation),
        );
    }

    let amount = pricing
        .quote(ctx.selected_quantity(), ctx.selected_payment())
        .to_string();
    Transition::stay(
        ctx,
        ResponseDescriptor::text(
            "❌ Please tap the payment button above to proceed, or type 'I have made payment' after completing your payment.",
            ChatState::PaymentProcessing,
        )
        .with_pay_action(amount),
    )
}

fn close(ctx: &SessionContext) -> Transition {
    Transition::new(
        ctx.moved_to(ChatState::Completed),
        ResponseDescriptor::text(
            "Thank you for choosing us! Chat session ended.",
            ChatState::Completed,
        )
        .closing(),
    )
}

fn quantity_label(ctx: &SessionContext) -> String {
    ctx.selected_quantity()
        .map(|q| q.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(state: ChatState) -> SessionContext {
        SessionContext::new("Instagram", "Followers").moved_to(state)
    }

    #[test]
    fn test_greeting_accepts_any_input() {
        let t = step(&at(ChatState::Greeting), "hello?", &PricingCalculator::default());
        assert_eq!(t.context.current_state(), ChatState::QuantitySelection);
        assert!(t.response.show_quantity_options);
    }

    #[test]
    fn test_step_does_not_touch_input_context() {
        let ctx = at(ChatState::QuantitySelection);
        let t = step(&ctx, "700", &PricingCalculator::default());
        assert_eq!(ctx.current_state(), ChatState::QuantitySelection);
        assert!(ctx.selected_quantity().is_none());
        assert_eq!(t.context.selected_quantity().map(|q| q.value()), Some(700));
    }

    #[test]
    fn test_quantity_rejections() {
        let ctx = at(ChatState::QuantitySelection);
        let pricing = PricingCalculator::default();

        let low = step(&ctx, "99", &pricing);
        assert!(low.response.message.contains("Minimum quantity is 100"));
        assert!(low.response.message.contains("followers"));

        let high = step(&ctx, "20000", &pricing);
        assert!(high.response.message.contains("Maximum quantity is 10,000"));
        assert!(high.response.message.contains("contact support"));

        let none = step(&ctx, "lots", &pricing);
        assert!(none.response.message.contains("Please enter a number"));

        for t in [low, high, none] {
            assert_eq!(t.context, ctx);
            assert!(t.response.show_quantity_options);
        }
    }

    #[test]
    fn test_payment_rejection_reoffers_chips() {
        let ctx = at(ChatState::PaymentSelection);
        let t = step(&ctx, "paypal", &PricingCalculator::default());
        assert_eq!(t.context, ctx);
        assert!(t.response.show_payment_options);
        assert_eq!(t.response.next_state, ChatState::PaymentSelection);
    }

    #[test]
    fn test_url_prompt_uses_generic_template() {
        let ctx = SessionContext::new("Facebook", "Likes").moved_to(ChatState::PaymentSelection);
        let t = step(&ctx, "ngn", &PricingCalculator::default());
        assert!(t.response.message.contains("https://facebook.com/username"));
        assert_eq!(t.context.current_state(), ChatState::UrlCollection);
    }

    #[test]
    fn test_processing_reject_keeps_pay_action() {
        let ctx = at(ChatState::PaymentProcessing);
        let t = step(&ctx, "how do I pay?", &PricingCalculator::default());
        assert_eq!(t.context.current_state(), ChatState::PaymentProcessing);
        assert!(t.response.show_pay_action);
        assert!(t.response.amount.is_some());
    }

    #[test]
    fn test_confirmation_state_emits_notice() {
        let t = step(&at(ChatState::Confirmation), "", &PricingCalculator::default());
        assert_eq!(t.context.current_state(), ChatState::UserChoice);
        assert!(t.response.show_close_action);
        assert!(t.response.message.contains("can not cancel"));
    }

    #[test]
    fn test_completed_stays_closed() {
        let ctx = at(ChatState::Completed);
        let t = step(&ctx, "hello again", &PricingCalculator::default());
        assert_eq!(t.context, ctx);
        assert!(t.response.close_session);
    }
}
