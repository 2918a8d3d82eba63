//! Infrastructure Layer
//!
//! Adapters for the externally-owned payment and seat booking services.

pub mod gateway;

pub use gateway::{PaymentGatewayAdapter, SeatBookingAdapter};
