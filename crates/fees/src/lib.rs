//! # Paylens Fee Calculator
//!
//! Pure, stateless fee arithmetic for the platform's ledger reports.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   external systems and no workspace dependencies at all — only the
//!   decimal arithmetic stack.
//! - **Deterministic Money Math:** Every function here is a total function of
//!   its inputs, computed in `rust_decimal::Decimal` and rounded with one
//!   documented rule, so two report runs over the same ledger can never
//!   disagree at the cent level.
//!
//! ## Public API
//!
//! - `FeeSchedule`: the basis-point rates applied to income and withdrawals.
//! - `round_money`: the single fixed-point rounding rule used platform-wide.
//! - `FeeError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod error;
pub mod schedule;

// Re-export the key components to create a clean, public-facing API.
pub use error::FeeError;
pub use schedule::{round_money, FeeSchedule};
