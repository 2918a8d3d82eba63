// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::default_trait_access
    )
)]

//! Ticket Engine - Rust Core Library
//!
//! Deterministic ticket purchase engine for the cinema box office.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic (value objects, policy, validation)
//!   - `ticket_purchase`: ticket categories, line items, order totals,
//!     the purchase policy and the order validation service
//!   - `shared`: `Money`, `AccountId`
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: Interfaces for external services (`PaymentPort`,
//!     `SeatReservationPort`)
//!   - `use_cases`: `PurchaseTickets`
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `gateway`: payment gateway and seat booking adapters
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use ticket_engine::{
//!     AccountId, PaymentGatewayAdapter, PurchaseTicketsUseCase, SeatBookingAdapter,
//!     TicketType, TicketTypeRequest,
//! };
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let use_case = PurchaseTicketsUseCase::new(
//!     Arc::new(PaymentGatewayAdapter::new()),
//!     Arc::new(SeatBookingAdapter::new()),
//! );
//!
//! let order = [
//!     TicketTypeRequest::new(TicketType::Adult, 2)?,
//!     TicketTypeRequest::new(TicketType::Child, 1)?,
//! ];
//! use_case.execute(AccountId::new(1), &order).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters for external services.
pub mod infrastructure;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::shared::{AccountId, Money};
pub use domain::ticket_purchase::{
    OrderTotals, OrderValidationService, PurchaseError, PurchasePolicy, TicketType,
    TicketTypeRequest,
};

// Application re-exports
pub use application::ports::{
    PaymentError, PaymentPort, SeatReservationError, SeatReservationPort,
};
pub use application::use_cases::{PurchaseTicketsError, PurchaseTicketsUseCase};

// Infrastructure re-exports
pub use infrastructure::gateway::{PaymentGatewayAdapter, SeatBookingAdapter};
