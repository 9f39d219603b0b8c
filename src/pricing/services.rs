//! Quote engine.
//!
//! Turns a [`QuoteRequest`] into a quote. Never fails: every missing or
//! invalid field has already been coerced to a default by the calculators.

use rust_decimal::Decimal;
use tracing::debug;

use super::calculators::{
    effective_headcount, effective_nights, meal_plan, partner_multiplier, per_person_stay_rate,
    pool_surcharge, round_total, volume_discount_multiplier,
};
use super::requests::QuoteRequest;
use super::responses::{QuoteBreakdown, QuoteResult};

/// Compute the quote for a group stay.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use camp_quote::pricing::{compute_quote, QuoteRequest};
///
/// let request = QuoteRequest {
///     total_people: Some(40),
///     nights: Some(3),
///     ..QuoteRequest::default()
/// };
///
/// let quote = compute_quote(&request);
/// assert_eq!(quote.total_cost, dec!(4800));
/// assert_eq!(quote.meals_provided, None);
/// ```
pub fn compute_quote(request: &QuoteRequest) -> QuoteResult {
    compute_breakdown(request).into()
}

/// Compute the quote along with every intermediate amount.
pub fn compute_breakdown(request: &QuoteRequest) -> QuoteBreakdown {
    let headcount = effective_headcount(request.total_people, request.is_summer);
    let nights = effective_nights(request.nights);

    let rate_per_person = per_person_stay_rate(nights);
    let lodging = rate_per_person * Decimal::from(headcount);

    // Discount applies to lodging only
    let discount_multiplier = volume_discount_multiplier(headcount);
    let discounted_lodging = lodging * discount_multiplier;

    let meal_plan = meal_plan(request.wants_food, nights, headcount);
    let pool = pool_surcharge(request.is_summer, request.wants_pool);

    let subtotal = discounted_lodging + meal_plan.cost() + pool;

    // Surcharge compounds on the already-discounted subtotal
    let partner_multiplier = partner_multiplier(request.is_partner);
    let unrounded_total = subtotal * partner_multiplier;
    let total_cost = round_total(unrounded_total);

    debug!(
        headcount,
        nights,
        %rate_per_person,
        %discount_multiplier,
        meal_cost = %meal_plan.cost(),
        %pool,
        %subtotal,
        %total_cost,
        "Computed group quote"
    );

    QuoteBreakdown {
        headcount,
        nights,
        rate_per_person,
        lodging,
        discount_multiplier,
        discounted_lodging,
        meal_plan,
        pool,
        subtotal,
        partner_multiplier,
        unrounded_total,
        total_cost,
    }
}
