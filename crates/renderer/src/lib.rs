//! # Paylens Document Renderer
//!
//! Turns a finished `FinancialReport` into a downloadable P&L statement.
//!
//! This is deliberately a thin presentation collaborator: the one-page
//! statement is emitted as a minimal text-only PDF object stream, and this
//! crate is the seam a full typesetting renderer would replace. Nothing in
//! here recomputes figures — the report value is authoritative.

// Declare the modules that constitute this crate.
pub mod error;
pub mod pdf;

// Re-export the key components to create a clean, public-facing API.
pub use error::RenderError;
pub use pdf::{attachment_filename, render_profit_loss, ReportOwner};
