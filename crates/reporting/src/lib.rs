//! # Paylens Reporting Engine
//!
//! This crate computes period-based profit & loss reports from the ledger.
//! It is the consistency-critical core of the platform: given the same user,
//! period, and ledger contents, it must produce byte-identical figures on
//! every run.
//!
//! ## Architectural Principles
//!
//! - **Read-Only:** The engine never mutates ledger state. A report is a
//!   derived value, built fresh per request and discarded after serialization.
//! - **All-or-Nothing:** The three ledger queries fan out concurrently and
//!   fan back in before any totalling; if one fails, no partial report is
//!   ever produced.
//! - **Fixed-Point Throughout:** Every monetary figure is a
//!   `rust_decimal::Decimal` rounded to two places after each accumulation
//!   step, so repeated runs cannot drift.
//!
//! ## Public API
//!
//! - `ReportEngine`: the stateless generator; `generate` is the entry point.
//! - `FinancialReport`: the immutable report value with totals and ranking.
//! - `resolve_period`: maps a `PeriodToken` to a calendar-aligned range.
//! - `ReportError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod period;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::ReportEngine;
pub use error::ReportError;
pub use period::resolve_period;
pub use report::{ClientSummary, FinancialReport, ReportTotals};
