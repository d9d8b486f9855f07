//! A deliberately simple reference buyer, mainly useful as a benchmark
//! baseline against the diplomat.

use crate::agents::BuyerAgent;
use crate::services::messages::format_amount;
use crate::session::{Decision, NegotiationState};

pub struct CautiousBuyer;

impl BuyerAgent for CautiousBuyer {
    fn name(&self) -> &str {
        "cautious"
    }

    fn opening_offer(&mut self, state: &NegotiationState) -> (f64, String) {
        let opening = (state.product.base_market_price * 0.6).min(state.budget);
        let message = format!(
            "I'm interested, but ₹{} is what I can offer. Let me think about that...",
            format_amount(opening)
        );
        (opening, message)
    }

    fn respond(
        &mut self,
        state: &NegotiationState,
        seller_price: f64,
        _seller_message: &str,
    ) -> Decision {
        if seller_price <= state.budget && seller_price <= state.product.base_market_price * 0.85 {
            return Decision::Accept(seller_price);
        }

        let last_offer = state.last_buyer_offer().unwrap_or(0.0);
        let mut counter = (last_offer * 1.1).min(state.budget);

        // Close enough: shave just under the ask instead of creeping.
        if counter >= seller_price * 0.95 {
            counter = (seller_price - 1000.0).min(state.budget);
            return Decision::Counter {
                price: counter,
                message: format!(
                    "That's a bit steep for me. How about ₹{}?",
                    format_amount(counter)
                ),
            };
        }

        Decision::Counter {
            price: counter,
            message: format!(
                "I can go up to ₹{}, but that's pushing my budget.",
                format_amount(counter)
            ),
        }
    }
}
