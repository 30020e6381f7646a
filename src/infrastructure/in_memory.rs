use crate::domain::order::{OrderReceipt, OrderRequest, OrderStatus};
use crate::domain::ports::OrderGateway;
use crate::error::{OrderFlowError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory order backend.
///
/// Uses `Arc<RwLock<..>>` so clones share the same order book. Ids are
/// assigned sequentially starting at 1. Orders live only as long as the
/// process.
#[derive(Default, Clone)]
pub struct InMemoryOrderGateway {
    orders: Arc<RwLock<HashMap<u64, OrderReceipt>>>,
}

impl InMemoryOrderGateway {
    /// Creates a new, empty gateway.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the status of a stored order.
    pub async fn set_status(&self, order_id: u64, status: OrderStatus) -> Result<()> {
        let mut orders = self.orders.write().await;
        let receipt = orders
            .get_mut(&order_id)
            .ok_or_else(|| OrderFlowError::GatewayError(format!("unknown order {order_id}")))?;
        receipt.status = status;
        Ok(())
    }

    pub async fn orders(&self) -> Vec<OrderReceipt> {
        let orders = self.orders.read().await;
        let mut all: Vec<_> = orders.values().cloned().collect();
        all.sort_by_key(|r| r.id);
        all
    }
}

#[async_trait]
impl OrderGateway for InMemoryOrderGateway {
    async fn create_order(&self, request: OrderRequest) -> Result<OrderReceipt> {
        let mut orders = self.orders.write().await;
        let id = orders.len() as u64 + 1;
        let receipt = OrderReceipt {
            id,
            status: OrderStatus::Pending,
            request,
        };
        orders.insert(id, receipt.clone());
        Ok(receipt)
    }

    async fn order_status(&self, order_id: u64) -> Result<OrderStatus> {
        let orders = self.orders.read().await;
        orders
            .get(&order_id)
            .map(|r| r.status.clone())
            .ok_or_else(|| OrderFlowError::GatewayError(format!("unknown order {order_id}")))
    }
}
