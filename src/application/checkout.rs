use super::engine::OrderFlowEngine;
use crate::domain::order::{OrderReceipt, OrderRequest};
use crate::domain::ports::OrderGatewayBox;
use tracing::{info, warn};

/// Hands confirmed conversations to the order backend.
///
/// Gateway and assembly failures are logged and swallowed here; the
/// conversation itself carries on from local state either way.
pub struct Checkout {
    gateway: OrderGatewayBox,
}

impl Checkout {
    pub fn new(gateway: OrderGatewayBox) -> Self {
        Self { gateway }
    }

    /// Submits the order described by the engine's session, if complete.
    pub async fn submit(&self, engine: &OrderFlowEngine) -> Option<OrderReceipt> {
        let request = match OrderRequest::from_context(engine.context(), &engine.quote()) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "order not submitted");
                return None;
            }
        };

        match self.gateway.create_order(request).await {
            Ok(receipt) => {
                info!(order_id = receipt.id, amount = %receipt.request.amount, "order created");
                Some(receipt)
            }
            Err(e) => {
                warn!(error = %e, "order creation failed");
                None
            }
        }
    }

    /// Human-readable progress for a previously submitted order.
    pub async fn progress(&self, order_id: u64) -> Option<String> {
        match self.gateway.order_status(order_id).await {
            Ok(status) => Some(status.progress_message()),
            Err(e) => {
                warn!(order_id, error = %e, "order status lookup failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::flow::START_TOKEN;
    use crate::domain::order::OrderStatus;
    use crate::domain::ports::OrderGateway;
    use crate::error::{OrderFlowError, Result};
    use crate::infrastructure::in_memory::InMemoryOrderGateway;
    use async_trait::async_trait;

    struct FailingGateway;

    #[async_trait]
    impl OrderGateway for FailingGateway {
        async fn create_order(&self, _request: OrderRequest) -> Result<OrderReceipt> {
            Err(OrderFlowError::GatewayError("backend unavailable".to_string()))
        }

        async fn order_status(&self, _order_id: u64) -> Result<OrderStatus> {
            Err(OrderFlowError::GatewayError("backend unavailable".to_string()))
        }
    }

    fn confirmed_engine() -> OrderFlowEngine {
        let mut engine = OrderFlowEngine::new("YouTube", "Views");
        for input in [START_TOKEN, "2000", "ngn", "https://youtu.be/abc", "done"] {
            engine.process_message(input);
        }
        engine
    }

    #[tokio::test]
    async fn test_submit_confirmed_order() {
        let checkout = Checkout::new(Box::new(InMemoryOrderGateway::new()));
        let receipt = checkout.submit(&confirmed_engine()).await.unwrap();

        assert_eq!(receipt.id, 1);
        assert_eq!(receipt.status, OrderStatus::Pending);
        assert_eq!(receipt.request.platform, "youtube");
        assert_eq!(receipt.request.quantity.value(), 2000);
        assert_eq!(receipt.request.amount, "₦9,000");

        let progress = checkout.progress(receipt.id).await.unwrap();
        assert!(progress.contains("pending"));
    }

    #[tokio::test]
    async fn test_incomplete_session_is_not_submitted() {
        let checkout = Checkout::new(Box::new(InMemoryOrderGateway::new()));
        let engine = OrderFlowEngine::new("YouTube", "Views");
        assert!(checkout.submit(&engine).await.is_none());
    }

    #[tokio::test]
    async fn test_gateway_failure_leaves_engine_usable() {
        let checkout = Checkout::new(Box::new(FailingGateway));
        let mut engine = confirmed_engine();

        assert!(checkout.submit(&engine).await.is_none());
        assert!(checkout.progress(1).await.is_none());

        let r = engine.trigger_confirmation();
        assert!(r.show_close_action);
    }
}
