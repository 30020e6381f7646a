use super::order::{OrderReceipt, OrderRequest, OrderStatus};
use crate::error::Result;
use async_trait::async_trait;

/// Backend that accepts confirmed orders.
///
/// Lives outside the ordering flow; the engine never calls it.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn create_order(&self, request: OrderRequest) -> Result<OrderReceipt>;
    async fn order_status(&self, order_id: u64) -> Result<OrderStatus>;
}

pub type OrderGatewayBox = Box<dyn OrderGateway>;
