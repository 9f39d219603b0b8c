//! Response types for the quote engine.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use super::calculators::MealPlan;

/// Final quote shown to the customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuoteResult {
    /// Whole currency units
    #[serde(with = "rust_decimal::serde::str")]
    pub total_cost: Decimal,
    /// Present only when the camp provides food
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meals_provided: Option<u64>,
}

impl fmt::Display for QuoteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Estimated Cost: ${}", self.total_cost)?;
        if let Some(meals) = self.meals_provided {
            write!(f, "\nMeals Provided per Person: {}", meals)?;
        }
        Ok(())
    }
}

/// Every intermediate amount behind a quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuoteBreakdown {
    pub headcount: u32,
    pub nights: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub rate_per_person: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub lodging: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub discount_multiplier: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub discounted_lodging: Decimal,
    pub meal_plan: MealPlan,
    #[serde(with = "rust_decimal::serde::str")]
    pub pool: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub partner_multiplier: Decimal,
    /// Total before the single final rounding
    #[serde(with = "rust_decimal::serde::str")]
    pub unrounded_total: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_cost: Decimal,
}

impl From<QuoteBreakdown> for QuoteResult {
    fn from(breakdown: QuoteBreakdown) -> Self {
        QuoteResult {
            total_cost: breakdown.total_cost,
            meals_provided: breakdown.meal_plan.meals_per_person(),
        }
    }
}
