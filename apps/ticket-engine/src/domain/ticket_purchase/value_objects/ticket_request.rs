//! Ticket type request: one line item of a purchase order.

use serde::{Deserialize, Serialize};

use crate::domain::ticket_purchase::errors::PurchaseError;
use crate::domain::ticket_purchase::value_objects::TicketType;

/// An immutable request for a number of tickets of one category.
///
/// Constructed once per line item by the caller and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    /// Ticket category.
    ticket_type: TicketType,
    /// Number of tickets requested.
    quantity: u32,
}

impl TicketTypeRequest {
    /// Create a new ticket type request.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseError::ZeroQuantity`] if `quantity` is zero.
    pub const fn new(ticket_type: TicketType, quantity: u32) -> Result<Self, PurchaseError> {
        if quantity == 0 {
            return Err(PurchaseError::ZeroQuantity { ticket_type });
        }
        Ok(Self {
            ticket_type,
            quantity,
        })
    }

    /// Get the ticket category.
    #[must_use]
    pub const fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    /// Get the requested quantity.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }
}
