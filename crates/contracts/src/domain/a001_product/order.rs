use super::aggregate::Product;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Действие, которое Mini App сообщает боту
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderAction {
    OrderProduct,
}

/// Message forwarded through the host's `sendData` when the user orders a
/// product: `{"action": "order_product", "product": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderMessage {
    pub action: OrderAction,
    pub product: Product,
}

#[derive(Debug, Error)]
pub enum OrderMessageError {
    #[error("failed to encode order message: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to decode order message: {0}")]
    Decode(#[source] serde_json::Error),
}

impl OrderMessage {
    pub fn order_product(product: Product) -> Self {
        Self {
            action: OrderAction::OrderProduct,
            product,
        }
    }

    pub fn to_json(&self) -> Result<String, OrderMessageError> {
        serde_json::to_string(self).map_err(OrderMessageError::Encode)
    }

    pub fn from_json(data: &str) -> Result<Self, OrderMessageError> {
        serde_json::from_str(data).map_err(OrderMessageError::Decode)
    }
}
