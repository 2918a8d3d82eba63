//! Purchase policy: order limits and the ticket price table.

use serde::{Deserialize, Serialize};

use crate::domain::shared::Money;
use crate::domain::ticket_purchase::value_objects::TicketType;

/// Maximum number of tickets in a single purchase.
const DEFAULT_MAX_TICKETS_PER_ORDER: u32 = 25;

/// Unit price of an adult ticket, in pounds.
const DEFAULT_ADULT_PRICE: i64 = 25;

/// Unit price of a child ticket, in pounds.
const DEFAULT_CHILD_PRICE: i64 = 15;

/// Pricing and order limits applied to every purchase.
///
/// The default policy carries the box office constants; the policy is
/// read-only once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchasePolicy {
    /// Maximum tickets per purchase.
    max_tickets_per_order: u32,
    /// Unit price of an adult ticket.
    adult_price: Money,
    /// Unit price of a child ticket.
    child_price: Money,
    /// Unit price of an infant ticket.
    infant_price: Money,
}

impl PurchasePolicy {
    /// Create a policy with explicit limits and prices.
    #[must_use]
    pub const fn new(
        max_tickets_per_order: u32,
        adult_price: Money,
        child_price: Money,
        infant_price: Money,
    ) -> Self {
        Self {
            max_tickets_per_order,
            adult_price,
            child_price,
            infant_price,
        }
    }

    /// Maximum tickets allowed in one purchase.
    #[must_use]
    pub const fn max_tickets_per_order(&self) -> u32 {
        self.max_tickets_per_order
    }

    /// Unit price for the given ticket category.
    #[must_use]
    pub const fn price_of(&self, ticket_type: TicketType) -> Money {
        match ticket_type {
            TicketType::Adult => self.adult_price,
            TicketType::Child => self.child_price,
            TicketType::Infant => self.infant_price,
        }
    }
}

impl Default for PurchasePolicy {
    fn default() -> Self {
        Self {
            max_tickets_per_order: DEFAULT_MAX_TICKETS_PER_ORDER,
            adult_price: Money::from_units(DEFAULT_ADULT_PRICE),
            child_price: Money::from_units(DEFAULT_CHILD_PRICE),
            infant_price: Money::ZERO,
        }
    }
}
