//! Message rendering: turns structured decisions into human-readable text.
//!
//! Strictly one-way - nothing here feeds back into the numeric policy.
//! Template choice is the only use of randomness in the crate.

use rand::seq::SliceRandom;

use crate::market::Product;

/// Format a price with thousands separators, e.g. 140000 -> "140,000".
pub fn format_amount(amount: f64) -> String {
    let whole = amount.round() as i64;
    let negative = whole < 0;
    let digits = whole.abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if negative {
        format!("-{}", out)
    } else {
        out
    }
}

fn pick(templates: &[String]) -> String {
    templates
        .choose(&mut rand::thread_rng())
        .cloned()
        .unwrap_or_default()
}

pub fn opening_message(product: &Product, offer: f64) -> String {
    let quality = product.grade.praise();
    let origin_note = if product.is_premium_origin() {
        format!("I recognize the premium reputation of {} produce. ", product.origin)
    } else {
        String::new()
    };
    let amount = format_amount(offer);

    let templates = [
        format!(
            "Good day! I'm very interested in your {} units of {} with {}. {}Based on my current market analysis, I'd like to offer ₹{} as a starting point for our negotiation.",
            product.quantity, product.name, quality, origin_note, amount
        ),
        format!(
            "Hello! Your {} caught my attention - {} from {} is exactly what I'm seeking. After reviewing comparable market prices, I can offer ₹{} to begin our negotiation.",
            product.name, quality, product.origin, amount
        ),
    ];
    pick(&templates)
}

/// Counter-offer text, toned to the inferred seller behavior.
pub fn counter_message(
    product: &Product,
    seller_price: f64,
    counter: f64,
    flexibility: f64,
    urgency: f64,
) -> String {
    let asked = format_amount(seller_price);
    let offered = format_amount(counter);

    let templates = if urgency > 0.7 {
        [
            format!(
                "I appreciate the time sensitivity you've mentioned. While I understand your position at ₹{}, my budget analysis supports ₹{} for your {}.",
                asked, offered, product.name
            ),
            format!(
                "I recognize the urgency in your message. Based on current market conditions, I can offer ₹{}. This reflects both the value of your product and my constraints.",
                offered
            ),
        ]
    } else if flexibility > 0.6 {
        [
            format!(
                "Thank you for your openness to discussion. Given your collaborative approach, I'm comfortable moving from your ₹{} to ₹{}.",
                asked, offered
            ),
            format!(
                "I appreciate your willingness to work together. Moving from your ₹{} suggestion, I can offer ₹{} for your {}.",
                asked, offered, product.name
            ),
        ]
    } else {
        [
            format!(
                "Thank you for your ₹{} proposal. After careful consideration of market comparables, I can offer ₹{} for your {}.",
                asked, offered, product.name
            ),
            format!(
                "I've reviewed your ₹{} price point. Considering current market dynamics and the quality grade, I'm prepared to offer ₹{}.",
                asked, offered
            ),
        ]
    };
    pick(&templates)
}

pub fn acceptance_message(price: f64) -> String {
    let amount = format_amount(price);
    let templates = [
        format!("Excellent! ₹{} represents outstanding value. I'm delighted to confirm this deal.", amount),
        format!("Perfect! Your pricing at ₹{} aligns with my market analysis. Deal confirmed!", amount),
        format!("Wonderful! ₹{} is exactly the kind of fair pricing that builds long-term relationships. Agreed!", amount),
    ];
    pick(&templates)
}

pub fn walk_away_message() -> String {
    let templates = [
        "I truly appreciate your time and the quality of your product. Unfortunately, this pricing exceeds my current budget parameters. I wish you success with other buyers.".to_string(),
        "Thank you for the detailed discussion. While I recognize the value in your offering, it's beyond my current financial scope. Best wishes for your business.".to_string(),
        "I've enjoyed our negotiation and respect your position. However, I must stay within my established budget constraints.".to_string(),
    ];
    pick(&templates)
}

pub fn final_attempt_message(product: &Product, offer: f64) -> String {
    format!(
        "Given our extensive discussion and the quality of your {}, I can make one final offer at ₹{}. This is the absolute maximum my budget analysis can support.",
        product.name,
        format_amount(offer)
    )
}
