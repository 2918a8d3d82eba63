//! Ticket purchase domain services.

mod order_validation_service;

pub use order_validation_service::OrderValidationService;
