//! Ticket Purchase Bounded Context
//!
//! Business rules for validating and pricing a ticket purchase order.

pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::PurchaseError;
pub use services::OrderValidationService;
pub use value_objects::{OrderTotals, PurchasePolicy, TicketType, TicketTypeRequest};
