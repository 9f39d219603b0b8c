//! Quote engine for group rentals of a camp facility.
//!
//! The [`pricing`] module holds all of the decision logic and performs no
//! I/O. [`config`] and [`error`] serve the `camp-quote` binary.

pub mod config;
pub mod error;
pub mod pricing;

pub use error::{AppError, Result};
pub use pricing::{compute_breakdown, compute_quote, QuoteForm, QuoteRequest, QuoteResult};
