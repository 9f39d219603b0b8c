//! Request types for the quote engine.
//!
//! [`QuoteRequest`] is what the engine consumes. [`QuoteForm`] is the raw
//! form state a presentation layer holds, with numeric fields kept as the
//! digit strings the user typed.

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

/// Typed quote input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct QuoteRequest {
    /// Requested headcount before the seasonal floor is applied
    #[serde(default)]
    pub total_people: Option<u32>,
    /// Requested nights; missing or zero means the default stay
    #[serde(default)]
    pub nights: Option<u32>,
    #[serde(default)]
    pub wants_food: bool,
    #[serde(default)]
    pub wants_pool: bool,
    #[serde(default)]
    pub is_summer: bool,
    #[serde(default = "default_partner")]
    pub is_partner: bool,
}

impl Default for QuoteRequest {
    fn default() -> Self {
        Self {
            total_people: None,
            nights: None,
            wants_food: false,
            wants_pool: false,
            is_summer: false,
            is_partner: default_partner(),
        }
    }
}

fn default_partner() -> bool {
    true
}

fn default_nights_input() -> String {
    "2".to_string()
}

/// Raw form state, as filled in by the user
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuoteForm {
    #[serde(default)]
    pub total_people: String,
    #[serde(default = "default_nights_input")]
    pub nights: String,
    #[serde(default)]
    pub wants_food: bool,
    #[serde(default)]
    pub wants_pool: bool,
    /// Explicit peak-season answer; takes precedence over `arrival_date`
    #[serde(default)]
    pub is_summer: Option<bool>,
    #[serde(default)]
    pub arrival_date: Option<NaiveDate>,
    #[serde(default = "default_partner")]
    pub is_partner: bool,
}

impl Default for QuoteForm {
    fn default() -> Self {
        Self {
            total_people: String::new(),
            nights: default_nights_input(),
            wants_food: false,
            wants_pool: false,
            is_summer: None,
            arrival_date: None,
            is_partner: default_partner(),
        }
    }
}

impl QuoteForm {
    /// Both numeric fields have something in them.
    ///
    /// Callers that recompute on every edit should wait for this; an
    /// explicit "estimate" action may quote regardless.
    pub fn is_ready(&self) -> bool {
        !self.total_people.is_empty() && !self.nights.is_empty()
    }

    /// Whether the stay falls in the June-August peak season.
    pub fn resolved_summer(&self) -> bool {
        match (self.is_summer, self.arrival_date) {
            (Some(is_summer), _) => is_summer,
            (None, Some(date)) => is_peak_season(date),
            (None, None) => false,
        }
    }

    /// Build the engine request from the raw fields.
    pub fn to_request(&self) -> QuoteRequest {
        QuoteRequest {
            total_people: parse_count(&self.total_people),
            nights: parse_count(&self.nights),
            wants_food: self.wants_food,
            wants_pool: self.wants_pool,
            is_summer: self.resolved_summer(),
            is_partner: self.is_partner,
        }
    }

    /// Apply a keystroke-level edit to the headcount field.
    ///
    /// Returns false and leaves the field untouched if the edit is rejected.
    pub fn set_total_people(&mut self, raw: &str) -> bool {
        apply_number_input(&mut self.total_people, raw)
    }

    /// Apply a keystroke-level edit to the nights field.
    pub fn set_nights(&mut self, raw: &str) -> bool {
        apply_number_input(&mut self.nights, raw)
    }
}

fn apply_number_input(field: &mut String, raw: &str) -> bool {
    match sanitize_number_input(raw) {
        Some(value) => {
            *field = value;
            true
        }
        None => false,
    }
}

/// June, July and August are peak season.
pub fn is_peak_season(date: NaiveDate) -> bool {
    matches!(date.month(), 6..=8)
}

/// The pool is only offered during the peak season.
pub fn pool_offered(is_summer: bool) -> bool {
    is_summer
}

/// Filter a numeric form edit.
///
/// Leading zeros are stripped (a lone "0" is kept). Anything other than
/// digits rejects the edit with `None`; an empty string is accepted.
pub fn sanitize_number_input(raw: &str) -> Option<String> {
    let trimmed = raw.trim_start_matches('0');
    let value = if trimmed.is_empty() && !raw.is_empty() {
        "0"
    } else {
        trimmed
    };

    if value.chars().all(|c| c.is_ascii_digit()) {
        Some(value.to_string())
    } else {
        None
    }
}

/// Parse the leading digits of a numeric field.
///
/// Surrounding whitespace is ignored. Empty or non-numeric input gives
/// `None`; values past `u32::MAX` saturate.
pub fn parse_count(raw: &str) -> Option<u32> {
    let digits: &str = {
        let s = raw.trim();
        let end = s
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(s.len());
        &s[..end]
    };

    if digits.is_empty() {
        return None;
    }

    Some(digits.parse::<u32>().unwrap_or(u32::MAX))
}
