//! Per-order ticket count aggregate.

use crate::domain::shared::Money;
use crate::domain::ticket_purchase::value_objects::{
    PurchasePolicy, TicketType, TicketTypeRequest,
};

/// Ticket counts aggregated from one purchase order.
///
/// Computed fresh for every purchase call and discarded after use;
/// never stored in shared process state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderTotals {
    /// Total tickets across all categories.
    total_tickets: u32,
    /// Adult tickets.
    adult_tickets: u32,
    /// Child tickets.
    child_tickets: u32,
    /// Infant tickets.
    infant_tickets: u32,
}

impl OrderTotals {
    /// Aggregate the quantities of an ordered request sequence.
    ///
    /// Counts saturate rather than wrap, so absurdly large orders still
    /// exceed every per-purchase limit.
    #[must_use]
    pub fn from_requests(requests: &[TicketTypeRequest]) -> Self {
        requests.iter().fold(Self::default(), |mut totals, request| {
            let quantity = request.quantity();
            totals.total_tickets = totals.total_tickets.saturating_add(quantity);
            let category = match request.ticket_type() {
                TicketType::Adult => &mut totals.adult_tickets,
                TicketType::Child => &mut totals.child_tickets,
                TicketType::Infant => &mut totals.infant_tickets,
            };
            *category = category.saturating_add(quantity);
            totals
        })
    }

    /// Total tickets across all categories.
    #[must_use]
    pub const fn total_tickets(&self) -> u32 {
        self.total_tickets
    }

    /// Adult ticket count.
    #[must_use]
    pub const fn adult_tickets(&self) -> u32 {
        self.adult_tickets
    }

    /// Child ticket count.
    #[must_use]
    pub const fn child_tickets(&self) -> u32 {
        self.child_tickets
    }

    /// Infant ticket count.
    #[must_use]
    pub const fn infant_tickets(&self) -> u32 {
        self.infant_tickets
    }

    /// Total amount payable under the given policy.
    ///
    /// Infants travel free under the default policy; their price comes
    /// from the policy's price table like every other category.
    #[must_use]
    pub fn amount_due(&self, policy: &PurchasePolicy) -> Money {
        policy.price_of(TicketType::Adult) * self.adult_tickets
            + policy.price_of(TicketType::Child) * self.child_tickets
            + policy.price_of(TicketType::Infant) * self.infant_tickets
    }

    /// Number of seats to reserve.
    ///
    /// Infants sit on an adult's lap and do not occupy a seat.
    #[must_use]
    pub const fn seats_to_reserve(&self) -> u32 {
        self.adult_tickets.saturating_add(self.child_tickets)
    }
}
