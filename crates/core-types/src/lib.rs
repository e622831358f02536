//! # Paylens Core Types
//!
//! The shared vocabulary of the platform: transaction categories, reporting
//! periods, and the errors they can produce.
//!
//! ## Architectural Principles
//!
//! - **Layer 0:** This crate sits at the bottom of the dependency graph. It
//!   knows nothing about databases, HTTP, or rendering — every other crate
//!   depends on it, never the reverse.
//! - **Plain Data:** Everything here is a serde-serializable value type with
//!   no behavior beyond parsing, formatting, and simple predicates.

// Declare the modules that constitute this crate.
pub mod enums;
pub mod error;
pub mod period;

// Re-export the core types to provide a clean, public-facing API.
pub use enums::{TransactionStatus, TransactionType};
pub use error::CoreError;
pub use period::{PeriodRange, PeriodToken};
