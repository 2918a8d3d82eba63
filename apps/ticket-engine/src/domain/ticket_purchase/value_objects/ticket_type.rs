//! Ticket category (adult, child or infant).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ticket category.
///
/// The category determines the unit price and whether the ticket
/// occupies a seat. Unrecognized categories are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketType {
    /// Adult ticket.
    Adult,
    /// Child ticket.
    Child,
    /// Infant ticket. Infants sit on an adult's lap and travel free.
    Infant,
}

impl TicketType {
    /// Returns true if this category consumes a reservable seat.
    ///
    /// Infants do not occupy a seat.
    #[must_use]
    pub const fn occupies_seat(&self) -> bool {
        match self {
            Self::Adult | Self::Child => true,
            Self::Infant => false,
        }
    }

    /// Returns true if this is an adult ticket.
    #[must_use]
    pub const fn is_adult(&self) -> bool {
        matches!(self, Self::Adult)
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Adult => write!(f, "ADULT"),
            Self::Child => write!(f, "CHILD"),
            Self::Infant => write!(f, "INFANT"),
        }
    }
}
