//! Per-session negotiation state and terminal outcomes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::market::Product;
use crate::seller::SellerPersonality;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Buyer,
    Seller,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

/// The buyer policy's three-way output.
///
/// A tagged variant rather than a zero-price sentinel, so "withdraw" can
/// never be confused with a legitimately zero-valued offer.
#[derive(Clone, Debug, PartialEq)]
pub enum Decision {
    Accept(f64),
    Counter { price: f64, message: String },
    Withdraw,
}

/// Append-only record of one negotiation session.
///
/// Offer histories are chronological and never revised; the round counter
/// only moves forward.
#[derive(Clone, Debug)]
pub struct NegotiationState {
    pub product: Product,
    pub budget: f64,
    round: u32,
    seller_offers: Vec<f64>,
    buyer_offers: Vec<f64>,
    messages: Vec<Message>,
}

impl NegotiationState {
    pub fn new(product: Product, budget: f64) -> Self {
        Self {
            product,
            budget,
            round: 0,
            seller_offers: Vec::new(),
            buyer_offers: Vec::new(),
            messages: Vec::new(),
        }
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// Advance to the next round. Monotone by construction.
    pub fn begin_round(&mut self) -> u32 {
        self.round += 1;
        self.round
    }

    pub fn record_seller_offer(&mut self, price: f64, message: impl Into<String>) {
        self.seller_offers.push(price);
        self.messages.push(Message {
            role: Role::Seller,
            text: message.into(),
        });
    }

    pub fn record_buyer_offer(&mut self, price: f64, message: impl Into<String>) {
        self.buyer_offers.push(price);
        self.messages.push(Message {
            role: Role::Buyer,
            text: message.into(),
        });
    }

    pub fn record_seller_message(&mut self, message: impl Into<String>) {
        self.messages.push(Message {
            role: Role::Seller,
            text: message.into(),
        });
    }

    /// Buyer text that carries no offer (acceptance, walk-away).
    pub fn record_buyer_message(&mut self, message: impl Into<String>) {
        self.messages.push(Message {
            role: Role::Buyer,
            text: message.into(),
        });
    }

    pub fn seller_offers(&self) -> &[f64] {
        &self.seller_offers
    }

    pub fn buyer_offers(&self) -> &[f64] {
        &self.buyer_offers
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last_seller_offer(&self) -> Option<f64> {
        self.seller_offers.last().copied()
    }

    pub fn last_buyer_offer(&self) -> Option<f64> {
        self.buyer_offers.last().copied()
    }

    /// Latest seller concession: previous offer minus current offer.
    /// Positive means the seller is coming down.
    pub fn latest_seller_concession(&self) -> Option<f64> {
        let n = self.seller_offers.len();
        if n >= 2 {
            Some(self.seller_offers[n - 2] - self.seller_offers[n - 1])
        } else {
            None
        }
    }
}

/// Terminal result of one session, consumed by reporting.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionOutcome {
    pub session_id: Uuid,
    pub product_name: String,
    pub seller_personality: SellerPersonality,
    pub budget: f64,
    pub deal_made: bool,
    pub final_price: Option<f64>,
    pub rounds: u32,
    pub savings: f64,
    pub savings_pct: f64,
    pub below_market_pct: f64,
    pub efficiency_score: u32,
}

impl SessionOutcome {
    pub fn deal(
        product: &Product,
        personality: SellerPersonality,
        budget: f64,
        final_price: f64,
        rounds: u32,
        max_rounds: u32,
    ) -> Self {
        let savings = budget - final_price;
        Self {
            session_id: Uuid::new_v4(),
            product_name: product.name.clone(),
            seller_personality: personality,
            budget,
            deal_made: true,
            final_price: Some(final_price),
            rounds,
            savings,
            savings_pct: savings / budget * 100.0,
            below_market_pct: (product.base_market_price - final_price)
                / product.base_market_price
                * 100.0,
            efficiency_score: (max_rounds.saturating_sub(rounds) + 1) * 10,
        }
    }

    pub fn no_deal(
        product: &Product,
        personality: SellerPersonality,
        budget: f64,
        rounds: u32,
    ) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            product_name: product.name.clone(),
            seller_personality: personality,
            budget,
            deal_made: false,
            final_price: None,
            rounds,
            savings: 0.0,
            savings_pct: 0.0,
            below_market_pct: 0.0,
            efficiency_score: 0,
        }
    }
}
