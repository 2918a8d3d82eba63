//! Application Ports (Driven)
//!
//! Ports define interfaces for the external services the purchase flow
//! depends on. Production adapters live in the infrastructure layer;
//! tests inject recording fakes.

mod payment_port;
mod seat_reservation_port;

pub use payment_port::{PaymentError, PaymentPort};
pub use seat_reservation_port::{SeatReservationError, SeatReservationPort};
