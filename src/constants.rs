//! Application-wide constants and magic numbers
//!
//! This module centralizes all hardcoded values to improve maintainability
//! and make the strategy easier to tune.

/// Buyer decision policy constants
pub mod policy {
    /// Opening offer as a fraction of base market price
    pub const OPENING_RATIO: f64 = 0.70;

    /// Auto-accept any seller price at or below this fraction of budget
    pub const ACCEPTANCE_THRESHOLD: f64 = 0.85;

    /// Refuse to counter at or above this fraction of budget
    pub const WALK_AWAY_THRESHOLD: f64 = 0.96;

    /// Fraction of the price gap conceded per counter-offer
    pub const CONCESSION_BASE_RATE: f64 = 0.15;

    /// Concession-rate multiplier applied from round 7 onward
    pub const URGENCY_MULTIPLIER: f64 = 1.3;

    /// Minimum forward progress per counter (fraction of budget)
    pub const MIN_PROGRESS_PCT: f64 = 0.015;

    /// Opening offers never exceed this fraction of budget
    pub const OPENING_BUDGET_CAP: f64 = 0.85;

    /// Regular counters never exceed this fraction of budget
    pub const COUNTER_BUDGET_CAP: f64 = 0.95;

    /// Final-attempt counters never exceed this fraction of budget
    pub const FINAL_BUDGET_CAP: f64 = 0.98;

    /// Premium-origin bonus applied to the opening base
    pub const ORIGIN_BONUS: f64 = 1.05;
}

/// Scripted seller model constants (collaborator behavior, not policy)
pub mod seller {
    /// Seller accepts when buyer offer covers min price by this margin
    pub const ACCEPT_MARGIN: f64 = 1.15;

    /// Relaxed accept margin near the round cap
    pub const LATE_ACCEPT_MARGIN: f64 = 1.05;

    /// Round at/after which the seller switches to endgame behavior
    pub const LATE_ROUND: u32 = 8;

    /// Endgame counter markup over the buyer's offer
    pub const LATE_COUNTER_MARKUP: f64 = 1.03;
}

/// Session-level constants
pub mod session {
    /// Maximum buyer/seller round pairs before a session times out
    pub const DEFAULT_MAX_ROUNDS: u32 = 10;
}

/// Market knowledge tables
pub mod market {
    /// Origins that command a recognized premium
    pub const PREMIUM_ORIGINS: [&str; 4] = ["Ratnagiri", "Devgad", "Valsad", "Salem"];
}

/// Cue phrase tables for the offer extractor.
///
/// Raw substring presence is sufficient; no negation handling. False
/// positives are an accepted limitation of the extractor contract.
pub mod cues {
    pub const ACCEPTANCE: [&str; 6] = [
        "i accept",
        "i agree",
        "we have a deal",
        "deal confirmed",
        "deal!",
        "works perfectly",
    ];

    pub const WITHDRAWAL: [&str; 4] = ["walk away", "decline", "cannot accept", "beyond my"];

    pub const FLEXIBILITY: [&str; 9] = [
        "consider",
        "discuss",
        "work with",
        "negotiate",
        "flexible",
        "possible",
        "maybe",
        "might",
        "could",
    ];

    pub const URGENCY: [&str; 10] = [
        "final",
        "last",
        "urgent",
        "today",
        "now",
        "must",
        "immediately",
        "take it or leave",
        "best price",
        "cannot go lower",
    ];

    /// Flexibility score saturates after this many hits
    pub const FLEXIBILITY_SATURATION: f64 = 3.0;

    /// Urgency score saturates after this many hits
    pub const URGENCY_SATURATION: f64 = 2.0;
}
