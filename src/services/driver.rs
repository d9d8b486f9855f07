//! Negotiation driver: runs alternating buyer/seller turns for one session.

use tracing::{debug, info};

use crate::agents::BuyerAgent;
use crate::config::AppConfig;
use crate::seller::ScriptedSeller;
use crate::services::messages;
use crate::session::{Decision, NegotiationState, SessionOutcome};

pub struct NegotiationDriver {
    max_rounds: u32,
    verbose: bool,
}

impl NegotiationDriver {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            max_rounds: config.max_rounds,
            verbose: config.verbose(),
        }
    }

    pub fn with_max_rounds(max_rounds: u32) -> Self {
        Self {
            max_rounds,
            verbose: false,
        }
    }

    /// Run one complete session to a terminal outcome.
    ///
    /// The seller opens; each round is one buyer decision followed by one
    /// seller reply. Terminal on buyer acceptance, buyer withdrawal, seller
    /// acceptance, or round exhaustion (a normal "no deal", not a failure).
    pub fn run_session(
        &self,
        agent: &mut dyn BuyerAgent,
        mut state: NegotiationState,
        seller: &ScriptedSeller,
    ) -> SessionOutcome {
        let personality = seller.personality();

        let (ask, ask_message) = seller.opening(&state.product);
        state.record_seller_offer(ask, &ask_message);
        if self.verbose {
            debug!(price = ask, "seller opening");
        }

        let mut seller_price = ask;
        let mut seller_message = ask_message;

        for _ in 0..self.max_rounds {
            let round = state.begin_round();

            let buyer_offer = if round == 1 {
                let (offer, message) = agent.opening_offer(&state);
                state.record_buyer_offer(offer, message);
                offer
            } else {
                match agent.respond(&state, seller_price, &seller_message) {
                    Decision::Accept(price) => {
                        state.record_buyer_message(messages::acceptance_message(price));
                        info!(
                            agent = agent.name(),
                            %personality,
                            price,
                            round,
                            "buyer accepted"
                        );
                        return SessionOutcome::deal(
                            &state.product,
                            personality,
                            state.budget,
                            price,
                            round,
                            self.max_rounds,
                        );
                    }
                    Decision::Withdraw => {
                        state.record_buyer_message(messages::walk_away_message());
                        info!(agent = agent.name(), %personality, round, "buyer withdrew");
                        return SessionOutcome::no_deal(
                            &state.product,
                            personality,
                            state.budget,
                            round,
                        );
                    }
                    Decision::Counter { price, message } => {
                        state.record_buyer_offer(price, message);
                        price
                    }
                }
            };

            debug_assert!(
                buyer_offer <= state.budget,
                "buyer offer {} exceeds budget {}",
                buyer_offer,
                state.budget
            );
            if self.verbose {
                debug!(round, buyer_offer, "buyer countered");
            }

            let reply = seller.respond(buyer_offer, round);
            if reply.accepts {
                state.record_seller_message(&reply.message);
                info!(
                    agent = agent.name(),
                    %personality,
                    price = buyer_offer,
                    round,
                    "seller accepted"
                );
                return SessionOutcome::deal(
                    &state.product,
                    personality,
                    state.budget,
                    buyer_offer,
                    round,
                    self.max_rounds,
                );
            }
            state.record_seller_offer(reply.price, &reply.message);
            seller_price = reply.price;
            seller_message = reply.message;
            if self.verbose {
                debug!(round, seller_price, "seller countered");
            }
        }

        info!(
            agent = agent.name(),
            %personality,
            rounds = self.max_rounds,
            "round cap reached with no agreement"
        );
        SessionOutcome::no_deal(&state.product, personality, state.budget, self.max_rounds)
    }
}
