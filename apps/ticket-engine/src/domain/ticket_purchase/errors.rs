//! Ticket purchase errors.

use std::fmt;

use crate::domain::ticket_purchase::value_objects::TicketType;

/// Errors raised when a purchase order fails validation.
///
/// Every business-rule violation maps to exactly one variant with a
/// distinct message. Validation is fail-fast: the first violation in
/// the documented order wins, and no external service is invoked for a
/// rejected order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseError {
    /// The order contains no ticket requests.
    EmptyOrder,

    /// The account identifier is not a positive integer.
    InvalidAccountId {
        /// The rejected identifier value.
        account_id: i64,
    },

    /// A line item requested zero tickets.
    ZeroQuantity {
        /// Category of the offending line item.
        ticket_type: TicketType,
    },

    /// The order exceeds the maximum tickets per purchase.
    TooManyTickets {
        /// Tickets requested.
        requested: u32,
        /// Maximum allowed per purchase.
        max: u32,
    },

    /// Child or infant tickets requested without an adult.
    NoAdultTicket,

    /// More infants than adults to accompany them.
    TooManyInfants {
        /// Infant tickets requested.
        infants: u32,
        /// Adult tickets requested.
        adults: u32,
    },
}

impl fmt::Display for PurchaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyOrder => {
                write!(f, "No tickets requested")
            }
            Self::InvalidAccountId { account_id } => {
                write!(f, "Invalid account ID: {account_id}")
            }
            Self::ZeroQuantity { ticket_type } => {
                write!(f, "Quantity for {ticket_type} tickets must be greater than zero")
            }
            Self::TooManyTickets { requested, max } => {
                write!(
                    f,
                    "Cannot purchase more than {max} tickets at a time (requested {requested})"
                )
            }
            Self::NoAdultTicket => {
                write!(
                    f,
                    "Child or Infant tickets cannot be purchased without at least one Adult ticket"
                )
            }
            Self::TooManyInfants { infants, adults } => {
                write!(
                    f,
                    "Each infant must be accompanied by an adult: {infants} infants with {adults} adults"
                )
            }
        }
    }
}

impl std::error::Error for PurchaseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_order_display() {
        let msg = format!("{}", PurchaseError::EmptyOrder);
        assert_eq!(msg, "No tickets requested");
    }

    #[test]
    fn invalid_account_id_display() {
        let err = PurchaseError::InvalidAccountId { account_id: -1 };
        assert!(format!("{err}").contains("-1"));
    }

    #[test]
    fn zero_quantity_display() {
        let err = PurchaseError::ZeroQuantity {
            ticket_type: TicketType::Child,
        };
        let msg = format!("{err}");
        assert!(msg.contains("CHILD"));
        assert!(msg.contains("greater than zero"));
    }

    #[test]
    fn too_many_tickets_display() {
        let err = PurchaseError::TooManyTickets {
            requested: 26,
            max: 25,
        };
        let msg = format!("{err}");
        assert!(msg.contains("25"));
        assert!(msg.contains("26"));
    }

    #[test]
    fn no_adult_ticket_display() {
        let msg = format!("{}", PurchaseError::NoAdultTicket);
        assert!(msg.contains("Adult"));
    }

    #[test]
    fn too_many_infants_display() {
        let err = PurchaseError::TooManyInfants {
            infants: 2,
            adults: 1,
        };
        let msg = format!("{err}");
        assert!(msg.contains("2 infants"));
        assert!(msg.contains("1 adults"));
    }

    #[test]
    fn purchase_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(PurchaseError::EmptyOrder);
        assert!(!err.to_string().is_empty());
    }
}
