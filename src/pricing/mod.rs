//! Pricing engine module for camp group rentals.
//!
//! Pure quote calculation: headcount floors, the stay-rate schedule, meal
//! policy, volume discounts and the partner surcharge.

pub mod calculators;
pub mod requests;
pub mod responses;
pub mod services;

// Re-export commonly used items
pub use calculators::{round_total, MealPlan};
pub use requests::{QuoteForm, QuoteRequest};
pub use responses::{QuoteBreakdown, QuoteResult};
pub use services::{compute_breakdown, compute_quote};
