//! Purchase Tickets Use Case

use std::sync::Arc;

use crate::application::ports::{
    PaymentError, PaymentPort, SeatReservationError, SeatReservationPort,
};
use crate::domain::shared::AccountId;
use crate::domain::ticket_purchase::errors::PurchaseError;
use crate::domain::ticket_purchase::services::OrderValidationService;
use crate::domain::ticket_purchase::value_objects::{PurchasePolicy, TicketTypeRequest};

/// Failure modes of a ticket purchase.
#[derive(Debug, thiserror::Error)]
pub enum PurchaseTicketsError {
    /// The order failed business-rule validation.
    #[error(transparent)]
    InvalidPurchase(#[from] PurchaseError),

    /// Payment collection failed.
    #[error("Payment collection failed: {0}")]
    Payment(#[from] PaymentError),

    /// Seat reservation failed.
    #[error("Seat reservation failed: {0}")]
    SeatReservation(#[from] SeatReservationError),
}

/// Use case for purchasing cinema tickets.
///
/// Validates and prices the order, then collects payment and reserves
/// seats through the injected ports. Both collaborators must be
/// supplied explicitly; there is no default production gateway.
pub struct PurchaseTicketsUseCase<P, S>
where
    P: PaymentPort,
    S: SeatReservationPort,
{
    payment: Arc<P>,
    seat_reservation: Arc<S>,
    validator: OrderValidationService,
}

impl<P, S> PurchaseTicketsUseCase<P, S>
where
    P: PaymentPort,
    S: SeatReservationPort,
{
    /// Create a new PurchaseTicketsUseCase with the default policy.
    pub fn new(payment: Arc<P>, seat_reservation: Arc<S>) -> Self {
        Self::with_policy(payment, seat_reservation, PurchasePolicy::default())
    }

    /// Create a new PurchaseTicketsUseCase with an explicit policy.
    pub fn with_policy(
        payment: Arc<P>,
        seat_reservation: Arc<S>,
        policy: PurchasePolicy,
    ) -> Self {
        Self {
            payment,
            seat_reservation,
            validator: OrderValidationService::new(policy),
        }
    }

    /// Execute the use case.
    ///
    /// Runs the full pipeline: validate, aggregate, price, then collect
    /// payment and reserve seats, in that order. A validation failure
    /// aborts before either port is invoked, so a rejected order never
    /// produces a partial payment or reservation.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseTicketsError::InvalidPurchase`] for the first
    /// violated business rule, or the propagated port error if payment
    /// or reservation fails.
    pub async fn execute(
        &self,
        account_id: AccountId,
        requests: &[TicketTypeRequest],
    ) -> Result<(), PurchaseTicketsError> {
        let totals = match self.validator.validate(account_id, requests) {
            Ok(totals) => totals,
            Err(e) => {
                tracing::debug!("Purchase rejected for account {}: {}", account_id, e);
                return Err(e.into());
            }
        };

        let amount = totals.amount_due(self.validator.policy());
        let seats = totals.seats_to_reserve();

        tracing::info!(
            "Purchase accepted for account {}: {} tickets, {} due, {} seats",
            account_id,
            totals.total_tickets(),
            amount,
            seats
        );

        self.payment.collect_payment(account_id, amount).await?;
        self.seat_reservation.reserve_seats(account_id, seats).await?;

        Ok(())
    }
}
