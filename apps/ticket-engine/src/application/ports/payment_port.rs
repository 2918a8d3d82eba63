//! Payment Port (Driven Port)
//!
//! Interface for collecting payment through the external payment provider.

use async_trait::async_trait;

use crate::domain::shared::{AccountId, Money};

/// Payment port error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PaymentError {
    /// Connection error.
    #[error("Payment provider connection error: {message}")]
    ConnectionError {
        /// Error details.
        message: String,
    },

    /// Payment declined by the provider.
    #[error("Payment declined: {reason}")]
    Declined {
        /// Decline reason.
        reason: String,
    },
}

/// Port for collecting payment.
///
/// The engine treats the provider as fire-and-forget: a successful call
/// returns unit, and any failure is surfaced to the caller unchanged.
#[async_trait]
pub trait PaymentPort: Send + Sync {
    /// Collect the given amount from the account.
    async fn collect_payment(
        &self,
        account_id: AccountId,
        amount: Money,
    ) -> Result<(), PaymentError>;
}
