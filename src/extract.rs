//! Offer extractor: recovers a numeric price and coarse intent cues from
//! free-text negotiation messages.
//!
//! This is deliberately shallow - substring cue matching plus a price regex,
//! no NLU and no negation handling. The decision policy depends only on this
//! module's output so the extraction rules can be hardened independently.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::cues;

/// First currency amount in a message: optional ₹/$ prefix, digits with
/// optional comma grouping, optional decimal fraction.
static PRICE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[₹$]?\s*(\d{1,3}(?:,\d{3})+|\d+)(?:\.(\d+))?").expect("price regex is valid")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Acceptance,
    Withdrawal,
    Neutral,
}

/// Everything the policy reads out of one seller message.
#[derive(Clone, Debug, PartialEq)]
pub struct MessageRead {
    pub price: Option<f64>,
    pub intent: Intent,
    pub flexibility: f64,
    pub urgency: f64,
}

/// Parse the first price-looking number out of a message.
///
/// Absence of a number is not an error; callers fall back to a
/// market-derived estimate.
pub fn extract_price(text: &str) -> Option<f64> {
    let caps = PRICE_RE.captures(text)?;
    let whole = caps.get(1)?.as_str().replace(',', "");
    let mut value: f64 = whole.parse().ok()?;
    if let Some(frac) = caps.get(2) {
        let frac_str = frac.as_str();
        let frac_val: f64 = frac_str.parse().ok()?;
        value += frac_val / 10f64.powi(frac_str.len() as i32);
    }
    Some(value)
}

pub fn extract_intent(text: &str) -> Intent {
    let lower = text.to_lowercase();
    if cues::ACCEPTANCE.iter().any(|c| lower.contains(c)) {
        Intent::Acceptance
    } else if cues::WITHDRAWAL.iter().any(|c| lower.contains(c)) {
        Intent::Withdrawal
    } else {
        Intent::Neutral
    }
}

/// Flexibility cue density, saturating at 1.0.
pub fn flexibility_score(text: &str) -> f64 {
    let lower = text.to_lowercase();
    let hits = cues::FLEXIBILITY.iter().filter(|c| lower.contains(*c)).count();
    (hits as f64 / cues::FLEXIBILITY_SATURATION).min(1.0)
}

/// Urgency/pressure cue density, saturating at 1.0.
pub fn urgency_score(text: &str) -> f64 {
    let lower = text.to_lowercase();
    let hits = cues::URGENCY.iter().filter(|c| lower.contains(*c)).count();
    (hits as f64 / cues::URGENCY_SATURATION).min(1.0)
}

/// One-pass read of a message. Pure: same input, same output.
pub fn read_message(text: &str) -> MessageRead {
    MessageRead {
        price: extract_price(text),
        intent: extract_intent(text),
        flexibility: flexibility_score(text),
        urgency: urgency_score(text),
    }
}
