use super::context::SessionContext;
use super::payment::PaymentMethod;
use super::pricing::{Currency, Price};
use super::quantity::Quantity;
use crate::error::{OrderFlowError, Result};
use serde::{Deserialize, Serialize};

/// An order assembled from a finished conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub platform: String,
    pub service: String,
    pub quantity: Quantity,
    pub amount: String,
    pub currency: Currency,
    pub payment_method: PaymentMethod,
    pub social_url: String,
}

impl OrderRequest {
    /// Builds a request from the session, failing if any choice is missing.
    pub fn from_context(ctx: &SessionContext, price: &Price) -> Result<Self> {
        let quantity = ctx
            .selected_quantity()
            .ok_or(OrderFlowError::IncompleteOrder("quantity"))?;
        let payment_method = ctx
            .selected_payment()
            .ok_or(OrderFlowError::IncompleteOrder("payment method"))?;
        let social_url = ctx
            .social_url()
            .ok_or(OrderFlowError::IncompleteOrder("profile URL"))?;

        Ok(Self {
            platform: ctx.platform().to_lowercase(),
            service: ctx.service().to_lowercase(),
            quantity,
            amount: price.to_string(),
            currency: price.currency,
            payment_method,
            social_url: social_url.to_string(),
        })
    }
}

/// Fulfilment progress reported for a submitted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing { progress: u8, remains: u32 },
    Completed,
    Failed,
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    pub fn progress_message(&self) -> String {
        match self {
            OrderStatus::Pending => "Your order is pending payment verification.".to_string(),
            OrderStatus::Processing { progress, remains } => format!(
                "Your order is being processed. {progress}% complete, {remains} remaining."
            ),
            OrderStatus::Completed => "Your order has been completed successfully!".to_string(),
            OrderStatus::Failed => {
                "Your order failed. Please contact support for assistance.".to_string()
            }
            OrderStatus::Unknown => "Order status unknown. Please contact support.".to_string(),
        }
    }
}

/// Acknowledgement returned once an order is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub id: u64,
    pub status: OrderStatus,
    pub request: OrderRequest,
}
