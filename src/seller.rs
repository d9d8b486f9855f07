//! Scripted seller counterpart.
//!
//! The seller is an external collaborator of the buyer policy: a
//! deterministic function of (buyer offer, round, personality) plus its own
//! configured floor. Its thresholds are seller-model parameters, read by the
//! driver to decide termination but never by the buyer policy.

use serde::{Deserialize, Serialize};

use crate::config::SellerConfig;
use crate::market::Product;
use crate::services::messages::format_amount;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SellerPersonality {
    Standard,
    Aggressive,
    Flexible,
}

impl SellerPersonality {
    pub const ALL: [SellerPersonality; 3] = [
        SellerPersonality::Standard,
        SellerPersonality::Aggressive,
        SellerPersonality::Flexible,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SellerPersonality::Standard => "standard",
            SellerPersonality::Aggressive => "aggressive",
            SellerPersonality::Flexible => "flexible",
        }
    }
}

impl std::fmt::Display for SellerPersonality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One seller turn: a price, the message carrying it, and whether the
/// seller accepted the buyer's last offer (in which case `price` echoes it).
#[derive(Clone, Debug)]
pub struct SellerReply {
    pub price: f64,
    pub message: String,
    pub accepts: bool,
}

pub struct ScriptedSeller {
    min_price: f64,
    personality: SellerPersonality,
    config: SellerConfig,
}

impl ScriptedSeller {
    pub fn new(min_price: f64, personality: SellerPersonality, config: SellerConfig) -> Self {
        Self {
            min_price,
            personality,
            config,
        }
    }

    pub fn personality(&self) -> SellerPersonality {
        self.personality
    }

    /// Opening ask, marked up over market by personality.
    pub fn opening(&self, product: &Product) -> (f64, String) {
        let multiplier = match self.personality {
            SellerPersonality::Standard => self.config.opening_standard,
            SellerPersonality::Aggressive => self.config.opening_aggressive,
            SellerPersonality::Flexible => self.config.opening_flexible,
        };
        let price = product.base_market_price * multiplier;
        let message = format!(
            "I have {} {} from {}. My asking price is ₹{} for {} units.",
            product.grade.praise(),
            product.name,
            product.origin,
            format_amount(price),
            product.quantity,
        );
        (price, message)
    }

    /// Deterministic reply to a buyer offer at the given round.
    pub fn respond(&self, buyer_offer: f64, round: u32) -> SellerReply {
        // Comfortable margin: accept outright.
        if buyer_offer >= self.min_price * self.config.accept_margin {
            return SellerReply {
                price: buyer_offer,
                message: format!(
                    "Excellent offer! ₹{} works perfectly. Deal confirmed!",
                    format_amount(buyer_offer)
                ),
                accepts: true,
            };
        }

        // Endgame: thinner margin accepted, otherwise a hard final counter.
        if round >= self.config.late_round {
            if buyer_offer >= self.min_price * self.config.late_accept_margin {
                return SellerReply {
                    price: buyer_offer,
                    message: format!(
                        "Given our extensive discussion, I can accept ₹{}. Deal!",
                        format_amount(buyer_offer)
                    ),
                    accepts: true,
                };
            }
            let counter = (buyer_offer * self.config.late_counter_markup).max(self.min_price);
            return SellerReply {
                price: counter,
                message: format!(
                    "This is truly my final offer: ₹{}. Take it or leave it.",
                    format_amount(counter)
                ),
                accepts: false,
            };
        }

        let (markup, template): (f64, fn(&str) -> String) = match self.personality {
            SellerPersonality::Aggressive => (self.config.counter_aggressive, |p| {
                format!(
                    "That's far too low! These are premium products. ₹{} is my best price.",
                    p
                )
            }),
            SellerPersonality::Flexible => (self.config.counter_flexible, |p| {
                format!(
                    "I appreciate your offer. I can come down to ₹{}. What do you think?",
                    p
                )
            }),
            SellerPersonality::Standard => (self.config.counter_standard, |p| {
                format!("I can consider ₹{} for this quality.", p)
            }),
        };

        let counter = (buyer_offer * markup).max(self.min_price);
        SellerReply {
            price: counter,
            message: template(&format_amount(counter)),
            accepts: false,
        }
    }
}
