//! The diplomat buyer: the core decision policy.
//!
//! Pure threshold arithmetic over the negotiation state plus a continuously
//! updated belief about the seller. Every price it emits is clamped below
//! the budget ceiling; out-of-range inputs are saturated, never rejected.

use tracing::debug;

use crate::agents::BuyerAgent;
use crate::config::StrategyConfig;
use crate::extract;
use crate::services::messages;
use crate::session::{Decision, NegotiationState};

/// Belief about the seller, inferred from message cues and the concession
/// pattern. Owned by one policy instance for one session, never shared.
#[derive(Clone, Debug)]
pub struct SellerProfile {
    pub flexibility: f64,
    pub urgency: f64,
    pub concessions: Vec<f64>,
}

impl Default for SellerProfile {
    fn default() -> Self {
        Self {
            flexibility: 0.5,
            urgency: 0.0,
            concessions: Vec::new(),
        }
    }
}

/// Round at/after which the walk-away ceiling relaxes to its endgame value
/// and a final escalated counter becomes available.
const ENDGAME_ROUND: u32 = 8;
/// Round at/after which the walk-away ceiling starts relaxing.
const SOFTENING_ROUND: u32 = 6;
/// Round at/after which the concession rate gets the urgency multiplier.
const PUSH_ROUND: u32 = 7;

pub struct DiplomatBuyer {
    params: StrategyConfig,
    profile: SellerProfile,
}

impl DiplomatBuyer {
    pub fn new(params: StrategyConfig) -> Self {
        Self {
            params,
            profile: SellerProfile::default(),
        }
    }

    pub fn profile(&self) -> &SellerProfile {
        &self.profile
    }

    /// Variant of [`BuyerAgent::respond`] for when the seller's price only
    /// exists inside free text. An unparseable message degrades to a
    /// market-derived estimate rather than failing the turn.
    pub fn respond_to_text(&mut self, state: &NegotiationState, seller_message: &str) -> Decision {
        let price = extract::extract_price(seller_message)
            .unwrap_or(state.product.base_market_price * 1.1);
        self.respond(state, price, seller_message)
    }

    fn update_profile(&mut self, state: &NegotiationState, seller_message: &str) {
        let read = extract::read_message(seller_message);
        self.profile.flexibility = read.flexibility;
        self.profile.urgency = read.urgency;
        if let Some(delta) = state.latest_seller_concession() {
            self.profile.concessions.push(delta);
        }
    }

    /// Walk-away ceiling as a fraction of budget, relaxed near the deadline
    /// and nudged up for sellers that sound flexible.
    fn walk_away_fraction(&self, round: u32) -> f64 {
        let mut threshold = self.params.walk_away_threshold;
        if round >= ENDGAME_ROUND {
            threshold = 0.98;
        } else if round >= SOFTENING_ROUND {
            threshold = 0.97;
        }
        if self.profile.flexibility > 0.6 {
            threshold += 0.01;
        }
        threshold
    }

    fn strategic_counter(&self, state: &NegotiationState, seller_price: f64) -> f64 {
        let budget = state.budget;
        let last_offer = state
            .last_buyer_offer()
            .unwrap_or(budget * self.params.opening_ratio);
        let gap = seller_price - last_offer;

        let mut rate = self.params.concession_base_rate;
        // Flexibility takes precedence over urgency when both read high.
        if self.profile.flexibility > 0.6 {
            rate *= 1.2;
        } else if self.profile.urgency > 0.7 {
            rate *= 0.8;
        }
        if state.round() >= PUSH_ROUND {
            rate *= self.params.urgency_multiplier;
        }

        // Floor the concession so every counter moves forward.
        let min_progress = budget * self.params.min_progress_pct;
        let concession = (gap * rate).max(min_progress);

        let cap = budget * self.params.counter_budget_cap;
        let mut offer = (last_offer + concession).min(cap);
        if offer <= last_offer {
            offer = (last_offer + min_progress).min(cap);
        }
        offer
    }

    fn final_attempt(&self, state: &NegotiationState) -> Decision {
        let budget_cap = state.budget * self.params.final_budget_cap;
        let last_offer = state.last_buyer_offer().unwrap_or(0.0);
        let room = budget_cap - last_offer;
        if room > 0.0 {
            let offer = (last_offer + room * 0.8).min(budget_cap);
            Decision::Counter {
                price: offer,
                message: messages::final_attempt_message(&state.product, offer),
            }
        } else {
            Decision::Withdraw
        }
    }
}

impl BuyerAgent for DiplomatBuyer {
    fn name(&self) -> &str {
        "diplomat"
    }

    fn opening_offer(&mut self, state: &NegotiationState) -> (f64, String) {
        let product = &state.product;
        let mut base = product.base_market_price * self.params.opening_ratio;
        if product.is_premium_origin() {
            base *= self.params.origin_bonus;
        }

        // Safety margin: the opener never risks near-budget exposure.
        let price = base.min(state.budget * self.params.opening_budget_cap);
        debug!(price, budget = state.budget, "opening offer computed");

        (price, messages::opening_message(product, price))
    }

    fn respond(
        &mut self,
        state: &NegotiationState,
        seller_price: f64,
        seller_message: &str,
    ) -> Decision {
        self.update_profile(state, seller_message);
        let budget = state.budget;
        let round = state.round();

        // Clearly favorable: take it without further haggling.
        if seller_price <= budget * self.params.acceptance_threshold {
            return Decision::Accept(seller_price);
        }

        let walk_ceiling = budget * self.walk_away_fraction(round);
        if seller_price >= walk_ceiling {
            if round >= ENDGAME_ROUND && seller_price <= budget * self.params.final_budget_cap {
                return self.final_attempt(state);
            }
            debug!(
                seller_price,
                walk_ceiling, round, "seller price above walk-away ceiling"
            );
            return Decision::Withdraw;
        }

        let counter = self.strategic_counter(state, seller_price);
        let message = messages::counter_message(
            &state.product,
            seller_price,
            counter,
            self.profile.flexibility,
            self.profile.urgency,
        );
        Decision::Counter {
            price: counter,
            message,
        }
    }
}
