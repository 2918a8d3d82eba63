//! Seat Reservation Port (Driven Port)
//!
//! Interface for reserving seats through the external booking service.

use async_trait::async_trait;

use crate::domain::shared::AccountId;

/// Seat reservation port error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SeatReservationError {
    /// Connection error.
    #[error("Seat booking connection error: {message}")]
    ConnectionError {
        /// Error details.
        message: String,
    },

    /// Reservation rejected by the booking service.
    #[error("Seat reservation rejected: {reason}")]
    Rejected {
        /// Rejection reason.
        reason: String,
    },
}

/// Port for reserving seats.
///
/// Invoked only after payment has been collected; failures propagate to
/// the caller unchanged.
#[async_trait]
pub trait SeatReservationPort: Send + Sync {
    /// Reserve the given number of seats for the account.
    async fn reserve_seats(
        &self,
        account_id: AccountId,
        seats: u32,
    ) -> Result<(), SeatReservationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_error_display() {
        let err = SeatReservationError::ConnectionError {
            message: "unreachable".to_string(),
        };
        assert!(format!("{err}").contains("unreachable"));
    }

    #[test]
    fn rejected_display() {
        let err = SeatReservationError::Rejected {
            reason: "screening sold out".to_string(),
        };
        assert!(format!("{err}").contains("sold out"));
    }
}
