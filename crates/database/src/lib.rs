//! # Paylens Database Crate
//!
//! This crate acts as a high-level, application-specific interface to the
//! PostgreSQL ledger. It is the system of record for transactions, and it is
//! strictly **read-only** from the reporting engine's point of view.
//!
//! ## Architectural Principles
//!
//! - **Layer 3 Adapter:** This crate is an adapter that encapsulates all
//!   database-specific logic. It provides a clean, abstract API to the rest
//!   of the application, hiding the underlying SQL.
//! - **Asynchronous & Pooled:** All operations are asynchronous, and it uses
//!   a connection pool (`PgPool`) for concurrent access.
//! - **Half-Open Ranges:** Every date-bounded query filters on
//!   `completed_at >= start AND completed_at < end`, so adjacent reporting
//!   periods can never double-count a row.
//!
//! ## Public API
//!
//! - `connect`: The async function to establish the database connection pool.
//! - `run_migrations`: A utility to apply database migrations, ensuring the schema is up-to-date.
//! - `LedgerRepository`: The main struct that holds the connection pool and
//!   provides the high-level read queries the reporting engine consumes.
//! - `DbError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, run_migrations};
pub use error::DbError;
pub use repository::{AuthUser, IncomeTransaction, LedgerRepository, LedgerTransaction};
