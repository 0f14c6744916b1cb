//! Payment gateway capability used for fee settlement and refunds.
//!
//! Gateways decline payments through the receipt types; `GatewayError` is
//! reserved for faults (network, backend) that prevented an answer at all.
//! Policy code catches both and never lets a gateway fault escape.

use rust_decimal::Decimal;
use thiserror::Error;

/// Fault raised by a payment gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("{0}")]
    Unavailable(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Gateway answer to a charge attempt
#[derive(Debug, Clone)]
pub struct ChargeReceipt {
    pub approved: bool,
    pub transaction_id: Option<String>,
    pub message: String,
}

/// Gateway answer to a refund attempt
#[derive(Debug, Clone)]
pub struct RefundReceipt {
    pub approved: bool,
    pub message: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Charge `amount` to the patron's account
    async fn process_payment(
        &self,
        patron_id: &str,
        amount: Decimal,
        description: &str,
    ) -> Result<ChargeReceipt, GatewayError>;

    /// Refund a previously processed transaction
    async fn refund_payment(
        &self,
        transaction_id: &str,
        amount: Decimal,
    ) -> Result<RefundReceipt, GatewayError>;
}

/// Normalized outcome of a settlement attempt
#[derive(Debug, Clone)]
pub struct PaymentOutcome {
    pub success: bool,
    pub message: String,
    pub transaction_id: Option<String>,
}

/// Normalized outcome of a refund attempt
#[derive(Debug, Clone)]
pub struct RefundOutcome {
    pub success: bool,
    pub message: String,
}
