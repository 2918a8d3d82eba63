//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod purchase_tickets;

pub use purchase_tickets::{PurchaseTicketsError, PurchaseTicketsUseCase};
