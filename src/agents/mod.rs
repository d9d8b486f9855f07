pub mod cautious;
pub mod diplomat;

pub use cautious::CautiousBuyer;
pub use diplomat::DiplomatBuyer;

use crate::session::{Decision, NegotiationState};

/// A buyer-side negotiation policy.
///
/// Implementations own whatever belief state they build up across turns of
/// one session; the driver never shares an agent between sessions.
pub trait BuyerAgent: Send {
    fn name(&self) -> &str;

    /// First buyer turn: no seller price to react to yet.
    fn opening_offer(&mut self, state: &NegotiationState) -> (f64, String);

    /// React to the latest seller price and message.
    fn respond(
        &mut self,
        state: &NegotiationState,
        seller_price: f64,
        seller_message: &str,
    ) -> Decision;
}
