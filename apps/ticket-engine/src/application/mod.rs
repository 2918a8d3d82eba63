//! Application Layer
//!
//! The application layer orchestrates domain logic through use cases.
//! It defines:
//!
//! - **Ports**: Interfaces for interacting with external services
//! - **Use Cases**: Application-specific business rules

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
