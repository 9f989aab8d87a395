//! Payment processing port.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::IntegrationError;

/// Card tokens the mock gateway treats specially.
pub const DECLINED_CARD_TOKEN: &str = "tok-declined";
pub const GATEWAY_ERROR_TOKEN: &str = "tok-error";

/// A charge to run against the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeRequest {
    pub amount_cents: u64,
    /// Caller-side correlation id (e.g. the cart being checked out).
    pub reference: String,
    /// Opaque tokenized payment method.
    pub card_token: String,
}

/// Proof of a successful charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub payment_id: Uuid,
    pub amount_cents: u64,
    pub reference: String,
    pub charged_at: DateTime<Utc>,
}

/// Port to the payment provider.
#[async_trait::async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(&self, request: &ChargeRequest) -> Result<PaymentReceipt, IntegrationError>;
}

/// Fixed-delay mock gateway.
///
/// Declines the well-known test tokens so failure paths stay testable
/// end-to-end; everything else is approved.
#[derive(Debug, Clone)]
pub struct MockPaymentGateway {
    delay: Duration,
}

impl MockPaymentGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockPaymentGateway {
    fn default() -> Self {
        Self::new(Duration::from_millis(600))
    }
}

#[async_trait::async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn charge(&self, request: &ChargeRequest) -> Result<PaymentReceipt, IntegrationError> {
        if request.amount_cents == 0 {
            return Err(IntegrationError::Rejected("amount must be positive".to_string()));
        }

        tokio::time::sleep(self.delay).await;

        match request.card_token.as_str() {
            DECLINED_CARD_TOKEN => Err(IntegrationError::Rejected("card declined".to_string())),
            GATEWAY_ERROR_TOKEN => Err(IntegrationError::Failed("gateway unavailable".to_string())),
            _ => {
                let receipt = PaymentReceipt {
                    payment_id: Uuid::now_v7(),
                    amount_cents: request.amount_cents,
                    reference: request.reference.clone(),
                    charged_at: Utc::now(),
                };
                tracing::debug!(
                    payment_id = %receipt.payment_id,
                    amount_cents = receipt.amount_cents,
                    "charge approved"
                );
                Ok(receipt)
            }
        }
    }
}
