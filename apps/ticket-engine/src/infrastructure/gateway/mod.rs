//! External service adapters.

mod payment;
mod seat_booking;

pub use payment::PaymentGatewayAdapter;
pub use seat_booking::SeatBookingAdapter;
