//! Core pricing calculation functions.
//!
//! Pure functions for quote math - no I/O. Each tier table is a plain slice
//! so its boundaries can be tested on their own.

use rust_decimal::prelude::*;
use serde::Serialize;

/// Minimum billable headcount during June-August.
pub const SUMMER_MIN_HEADCOUNT: u32 = 50;

/// Minimum billable headcount outside the peak season.
pub const OFF_SEASON_MIN_HEADCOUNT: u32 = 30;

/// Nights assumed when the requested stay is missing or zero.
pub const DEFAULT_NIGHTS: u32 = 2;

/// Per-person total-stay rate as `(max_nights, rate)`, ascending by nights.
pub const STAY_RATE_TIERS: &[(u32, u32)] = &[(2, 95), (3, 110), (4, 125), (5, 140)];

/// Added to the last stay tier for every night beyond it.
pub const EXTENDED_STAY_RATE_PER_NIGHT: u32 = 15;

/// Lodging discounts as `(headcount_above, percent_off)`, descending by headcount.
pub const VOLUME_DISCOUNT_TIERS: &[(u32, u32)] = &[(100, 20), (50, 10)];

/// Price of a single catered meal for one person.
pub const MEAL_PRICE: u32 = 6;

/// Facility-use fee per day when the camp does not cater.
pub const FACILITY_USE_FEE_PER_DAY: u32 = 100;

/// Flat pool fee, summer only.
pub const POOL_SURCHARGE: u32 = 100;

/// Markup applied to the whole subtotal for non-partner groups.
pub const NON_PARTNER_SURCHARGE_PERCENT: u32 = 20;

/// Round a final total to whole currency units, half away from zero.
///
/// Totals are never negative, so this is the same as rounding half up.
/// Call it once, on the final amount only.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use camp_quote::pricing::round_total;
///
/// assert_eq!(round_total(dec!(2.5)), dec!(3));
/// assert_eq!(round_total(dec!(5232.4)), dec!(5232));
/// ```
pub fn round_total(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Seasonal floor for billable headcount.
pub fn seasonal_floor(is_summer: bool) -> u32 {
    if is_summer {
        SUMMER_MIN_HEADCOUNT
    } else {
        OFF_SEASON_MIN_HEADCOUNT
    }
}

/// Headcount used for billing: the requested count raised to the seasonal floor.
///
/// A missing count is treated as zero, so it bills at the floor.
pub fn effective_headcount(requested: Option<u32>, is_summer: bool) -> u32 {
    requested.unwrap_or(0).max(seasonal_floor(is_summer))
}

/// Nights used for billing. Missing or zero falls back to [`DEFAULT_NIGHTS`].
pub fn effective_nights(requested: Option<u32>) -> u32 {
    requested.filter(|n| *n > 0).unwrap_or(DEFAULT_NIGHTS)
}

/// Per-person rate for the whole stay.
///
/// This is not a nightly rate and must not be multiplied by nights.
/// One and two nights share the first tier.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use camp_quote::pricing::calculators::per_person_stay_rate;
///
/// assert_eq!(per_person_stay_rate(1), dec!(95));
/// assert_eq!(per_person_stay_rate(3), dec!(110));
/// assert_eq!(per_person_stay_rate(7), dec!(170));
/// ```
pub fn per_person_stay_rate(nights: u32) -> Decimal {
    if let Some(&(_, rate)) = STAY_RATE_TIERS
        .iter()
        .find(|(max_nights, _)| nights <= *max_nights)
    {
        return Decimal::from(rate);
    }

    let (last_nights, last_rate) = STAY_RATE_TIERS[STAY_RATE_TIERS.len() - 1];
    let extra_nights = nights - last_nights;

    Decimal::from(last_rate)
        + Decimal::from(extra_nights) * Decimal::from(EXTENDED_STAY_RATE_PER_NIGHT)
}

/// Percentage taken off lodging for a given headcount.
pub fn volume_discount_percent(headcount: u32) -> u32 {
    VOLUME_DISCOUNT_TIERS
        .iter()
        .find(|(above, _)| headcount > *above)
        .map(|(_, percent_off)| *percent_off)
        .unwrap_or(0)
}

/// Multiplier applied to lodging for a given headcount (1.00, 0.90 or 0.80).
pub fn volume_discount_multiplier(headcount: u32) -> Decimal {
    Decimal::new(i64::from(100 - volume_discount_percent(headcount)), 2)
}

/// Multiplier applied to the subtotal: 1.00 for partners, 1.20 otherwise.
pub fn partner_multiplier(is_partner: bool) -> Decimal {
    if is_partner {
        Decimal::ONE
    } else {
        Decimal::new(i64::from(100 + NON_PARTNER_SURCHARGE_PERCENT), 2)
    }
}

/// Pool fee. The pool is closed outside summer, so the flag is ignored there.
pub fn pool_surcharge(is_summer: bool, wants_pool: bool) -> Decimal {
    if is_summer && wants_pool {
        Decimal::from(POOL_SURCHARGE)
    } else {
        Decimal::ZERO
    }
}

/// Catered meals per person: breakfast and dinner each day, minus one
/// for the arrival/departure gap.
pub fn meals_per_person(nights: u32) -> u64 {
    (u64::from(nights) * 2).saturating_sub(1)
}

/// How food is charged for a stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MealPlan {
    /// The camp provides meals, charged per meal and per person.
    Catered {
        meals_per_person: u64,
        #[serde(with = "rust_decimal::serde::str")]
        cost: Decimal,
    },
    /// The group brings its own food and pays a flat kitchen-use fee.
    FacilityUse {
        #[serde(with = "rust_decimal::serde::str")]
        fee: Decimal,
    },
}

impl MealPlan {
    /// Amount the plan adds to the subtotal.
    pub fn cost(&self) -> Decimal {
        match self {
            MealPlan::Catered { cost, .. } => *cost,
            MealPlan::FacilityUse { fee } => *fee,
        }
    }

    /// Meals per person, only for catered stays.
    pub fn meals_per_person(&self) -> Option<u64> {
        match self {
            MealPlan::Catered {
                meals_per_person, ..
            } => Some(*meals_per_person),
            MealPlan::FacilityUse { .. } => None,
        }
    }
}

/// Pick the meal plan and price it.
///
/// The facility-use fee is `(nights + 1) * 100` regardless of headcount.
pub fn meal_plan(wants_food: bool, nights: u32, headcount: u32) -> MealPlan {
    if wants_food {
        let meals = meals_per_person(nights);
        MealPlan::Catered {
            meals_per_person: meals,
            cost: Decimal::from(meals) * Decimal::from(headcount) * Decimal::from(MEAL_PRICE),
        }
    } else {
        MealPlan::FacilityUse {
            fee: (Decimal::from(nights) + Decimal::ONE) * Decimal::from(FACILITY_USE_FEE_PER_DAY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    // ==================== round_total tests ====================

    #[test]
    fn test_round_total_half_goes_up() {
        assert_eq!(round_total(dec!(0.5)), dec!(1));
        assert_eq!(round_total(dec!(2.5)), dec!(3));
        assert_eq!(round_total(dec!(4360.5)), dec!(4361));
    }

    #[test]
    fn test_round_total_normal_rounding() {
        assert_eq!(round_total(dec!(5232.4)), dec!(5232));
        assert_eq!(round_total(dec!(5232.6)), dec!(5233));
        assert_eq!(round_total(dec!(4800.00)), dec!(4800));
    }

    #[test]
    fn test_round_total_drops_scale() {
        assert_eq!(round_total(dec!(5760.00)).scale(), 0);
        assert_eq!(round_total(dec!(5760.00)).to_string(), "5760");
    }

    // ==================== headcount / nights tests ====================

    #[test]
    fn test_seasonal_floor() {
        assert_eq!(seasonal_floor(true), 50);
        assert_eq!(seasonal_floor(false), 30);
    }

    #[test]
    fn test_effective_headcount_raised_to_floor() {
        assert_eq!(effective_headcount(None, true), 50);
        assert_eq!(effective_headcount(None, false), 30);
        assert_eq!(effective_headcount(Some(0), true), 50);
        assert_eq!(effective_headcount(Some(40), true), 50);
        assert_eq!(effective_headcount(Some(10), false), 30);
    }

    #[test]
    fn test_effective_headcount_keeps_larger_groups() {
        assert_eq!(effective_headcount(Some(40), false), 40);
        assert_eq!(effective_headcount(Some(120), true), 120);
        assert_eq!(effective_headcount(Some(u32::MAX), false), u32::MAX);
    }

    #[test]
    fn test_effective_nights_defaults() {
        assert_eq!(effective_nights(None), 2);
        assert_eq!(effective_nights(Some(0)), 2);
        assert_eq!(effective_nights(Some(1)), 1);
        assert_eq!(effective_nights(Some(9)), 9);
    }

    // ==================== stay rate tests ====================

    #[test]
    fn test_stay_rate_first_tier_covers_one_and_two_nights() {
        assert_eq!(per_person_stay_rate(1), dec!(95));
        assert_eq!(per_person_stay_rate(2), dec!(95));
    }

    #[test]
    fn test_stay_rate_table_tiers() {
        assert_eq!(per_person_stay_rate(3), dec!(110));
        assert_eq!(per_person_stay_rate(4), dec!(125));
        assert_eq!(per_person_stay_rate(5), dec!(140));
    }

    #[test]
    fn test_stay_rate_extended_stays() {
        assert_eq!(per_person_stay_rate(6), dec!(155));
        assert_eq!(per_person_stay_rate(10), dec!(215));
        assert_eq!(per_person_stay_rate(30), dec!(515));
    }

    #[test]
    fn test_stay_rate_never_decreases() {
        let rates: Vec<Decimal> = (1..=20).map(per_person_stay_rate).collect();
        assert!(rates.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_stay_rate_is_not_multiplied_by_nights() {
        // 4 nights cost 125 per person for the whole stay, not 4 * 125
        assert_eq!(per_person_stay_rate(4), dec!(125));
    }

    // ==================== volume discount tests ====================

    #[test]
    fn test_volume_discount_boundaries() {
        assert_eq!(volume_discount_multiplier(30), dec!(1.00));
        assert_eq!(volume_discount_multiplier(50), dec!(1.00));
        assert_eq!(volume_discount_multiplier(51), dec!(0.90));
        assert_eq!(volume_discount_multiplier(100), dec!(0.90));
        assert_eq!(volume_discount_multiplier(101), dec!(0.80));
        assert_eq!(volume_discount_multiplier(5000), dec!(0.80));
    }

    #[test]
    fn test_volume_discount_percent() {
        assert_eq!(volume_discount_percent(50), 0);
        assert_eq!(volume_discount_percent(75), 10);
        assert_eq!(volume_discount_percent(250), 20);
    }

    #[test]
    fn test_lodging_per_person_non_increasing_across_tiers() {
        let per_person =
            |headcount: u32| per_person_stay_rate(3) * volume_discount_multiplier(headcount);
        assert!(per_person(51) < per_person(50));
        assert!(per_person(101) < per_person(100));
    }

    // ==================== surcharge tests ====================

    #[test]
    fn test_partner_multiplier() {
        assert_eq!(partner_multiplier(true), dec!(1));
        assert_eq!(partner_multiplier(false), dec!(1.20));
    }

    #[test]
    fn test_pool_surcharge_only_in_summer_with_pool() {
        assert_eq!(pool_surcharge(true, true), dec!(100));
        assert_eq!(pool_surcharge(true, false), dec!(0));
        assert_eq!(pool_surcharge(false, true), dec!(0));
        assert_eq!(pool_surcharge(false, false), dec!(0));
    }

    // ==================== meal plan tests ====================

    #[test]
    fn test_meals_per_person() {
        assert_eq!(meals_per_person(1), 1);
        assert_eq!(meals_per_person(2), 3);
        assert_eq!(meals_per_person(5), 9);
        assert_eq!(meals_per_person(0), 0);
    }

    #[test]
    fn test_meal_plan_catered() {
        let plan = meal_plan(true, 5, 120);
        assert_eq!(
            plan,
            MealPlan::Catered {
                meals_per_person: 9,
                cost: dec!(6480),
            }
        );
        assert_eq!(plan.meals_per_person(), Some(9));
        assert_eq!(plan.cost(), dec!(6480));
    }

    #[test]
    fn test_meal_plan_facility_use_ignores_headcount() {
        assert_eq!(meal_plan(false, 3, 40).cost(), dec!(400));
        assert_eq!(meal_plan(false, 3, 400).cost(), dec!(400));
        assert_eq!(meal_plan(false, 3, 40).meals_per_person(), None);
    }

    #[test]
    fn test_meal_plan_serializes_with_kind_tag() {
        let json = serde_json::to_value(meal_plan(false, 2, 30)).unwrap();
        assert_eq!(json["kind"], "facility_use");
        assert_eq!(json["fee"], "300");
    }
}
