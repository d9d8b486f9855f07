//! Unit tests for the negotiation driver and the scripted seller.

use crate::agents::{CautiousBuyer, DiplomatBuyer};
use crate::config::{AppConfig, SellerConfig, StrategyConfig};
use crate::market::{Product, QualityGrade};
use crate::seller::{ScriptedSeller, SellerPersonality};
use crate::services::driver::NegotiationDriver;
use crate::session::NegotiationState;

fn product(market: f64) -> Product {
    Product {
        name: "Test Mangoes".to_string(),
        category: Some("Mangoes".to_string()),
        quantity: 100,
        grade: QualityGrade::Ungraded,
        origin: "Gujarat".to_string(),
        base_market_price: market,
    }
}

fn run(
    budget: f64,
    market: f64,
    seller_min: f64,
    personality: SellerPersonality,
) -> crate::session::SessionOutcome {
    let config = AppConfig::default();
    let driver = NegotiationDriver::new(&config);
    let seller = ScriptedSeller::new(seller_min, personality, config.seller.clone());
    let mut agent = DiplomatBuyer::new(StrategyConfig::default());
    let state = NegotiationState::new(product(market), budget);
    driver.run_session(&mut agent, state, &seller)
}

// ============= Session Outcome Tests =============

#[test]
fn test_easy_scenario_closes_in_two_rounds() {
    // Seller counters the 70000 opener at 80500, which clears the 85%
    // auto-accept threshold on a 125000 budget.
    let outcome = run(125_000.0, 100_000.0, 75_000.0, SellerPersonality::Standard);

    assert!(outcome.deal_made);
    assert_eq!(outcome.rounds, 2);
    let price = outcome.final_price.unwrap();
    assert!((price - 80_500.0).abs() < 1e-6);
    assert!((outcome.savings - (125_000.0 - price)).abs() < 1e-6);
    assert_eq!(outcome.efficiency_score, 90);
}

#[test]
fn test_seller_accepts_generous_opening() {
    // Opening offer of 70000 already covers min * 1.15
    let outcome = run(125_000.0, 100_000.0, 50_000.0, SellerPersonality::Aggressive);

    assert!(outcome.deal_made);
    assert_eq!(outcome.rounds, 1);
    assert!((outcome.final_price.unwrap() - 70_000.0).abs() < 1e-6);
}

#[test]
fn test_buyer_withdraws_when_floor_exceeds_budget() {
    // Seller floor of 88000 sits above the walk-away ceiling of a
    // 80000 budget, so the buyer declines on its first response.
    let outcome = run(80_000.0, 100_000.0, 88_000.0, SellerPersonality::Standard);

    assert!(!outcome.deal_made);
    assert_eq!(outcome.final_price, None);
    assert_eq!(outcome.rounds, 2);
}

#[test]
fn test_stalemate_exhausts_round_cap() {
    // Floor of 90000 never clears the seller's accept margin against the
    // buyer's capped counters, and never breaches the buyer's walk-away
    // ceiling either: the session must time out, not loop.
    let outcome = run(100_000.0, 100_000.0, 90_000.0, SellerPersonality::Standard);

    assert!(!outcome.deal_made);
    assert_eq!(outcome.rounds, 10);
}

#[test]
fn test_full_default_grid_terminates_within_budget() {
    let config = AppConfig::default();
    let driver = NegotiationDriver::new(&config);

    for p in &config.products {
        for personality in SellerPersonality::ALL {
            for scenario in &config.scenarios {
                let budget = p.base_market_price * scenario.budget_ratio;
                let seller_min = p.base_market_price * scenario.seller_min_ratio;
                let seller = ScriptedSeller::new(seller_min, personality, config.seller.clone());
                let mut agent = DiplomatBuyer::new(config.strategy.clone());
                let state = NegotiationState::new(p.clone(), budget);

                let outcome = driver.run_session(&mut agent, state, &seller);

                assert!(outcome.rounds <= config.max_rounds);
                if let Some(price) = outcome.final_price {
                    assert!(
                        price <= budget,
                        "{} vs {} seller ({}): {} > {}",
                        p.name,
                        personality,
                        scenario.name,
                        price,
                        budget
                    );
                }
            }
        }
    }
}

#[test]
fn test_cautious_agent_also_terminates() {
    let config = AppConfig::default();
    let driver = NegotiationDriver::new(&config);
    let seller = ScriptedSeller::new(136_000.0, SellerPersonality::Standard, config.seller.clone());
    let mut agent = CautiousBuyer;
    let state = NegotiationState::new(product(160_000.0), 168_000.0);

    let outcome = driver.run_session(&mut agent, state, &seller);

    assert!(outcome.rounds <= config.max_rounds);
    if let Some(price) = outcome.final_price {
        assert!(price <= 168_000.0);
    }
}

// ============= ScriptedSeller Tests =============

#[test]
fn test_seller_opening_markup_by_personality() {
    let config = SellerConfig::default();
    let p = product(100_000.0);

    let (standard, message) =
        ScriptedSeller::new(75_000.0, SellerPersonality::Standard, config.clone()).opening(&p);
    assert!((standard - 140_000.0).abs() < 1e-6);
    assert!(message.contains("140,000"));

    let (aggressive, _) =
        ScriptedSeller::new(75_000.0, SellerPersonality::Aggressive, config.clone()).opening(&p);
    assert!((aggressive - 160_000.0).abs() < 1e-6);

    let (flexible, _) =
        ScriptedSeller::new(75_000.0, SellerPersonality::Flexible, config).opening(&p);
    assert!((flexible - 130_000.0).abs() < 1e-6);
}

#[test]
fn test_seller_accepts_at_margin() {
    let seller = ScriptedSeller::new(
        80_000.0,
        SellerPersonality::Standard,
        SellerConfig::default(),
    );

    let reply = seller.respond(80_000.0 * 1.15, 3);
    assert!(reply.accepts);
    assert_eq!(reply.price, 80_000.0 * 1.15);

    let reply = seller.respond(91_000.0, 3);
    assert!(!reply.accepts);
}

#[test]
fn test_seller_relaxes_margin_near_deadline() {
    let seller = ScriptedSeller::new(
        80_000.0,
        SellerPersonality::Standard,
        SellerConfig::default(),
    );

    // 86000 covers min * 1.05 but not min * 1.15
    let early = seller.respond(86_000.0, 5);
    assert!(!early.accepts);

    let late = seller.respond(86_000.0, 8);
    assert!(late.accepts);
}

#[test]
fn test_seller_late_counter_is_take_it_or_leave_it() {
    let seller = ScriptedSeller::new(
        80_000.0,
        SellerPersonality::Standard,
        SellerConfig::default(),
    );

    let reply = seller.respond(70_000.0, 9);
    assert!(!reply.accepts);
    assert!((reply.price - 80_000.0).abs() < 1e-6);
    assert!(reply.message.to_lowercase().contains("final"));
}

#[test]
fn test_seller_counters_never_drop_below_floor() {
    let config = SellerConfig::default();
    for personality in SellerPersonality::ALL {
        let seller = ScriptedSeller::new(90_000.0, personality, config.clone());
        for offer in [10_000.0, 50_000.0, 76_000.0] {
            let reply = seller.respond(offer, 3);
            assert!(!reply.accepts);
            assert!(reply.price >= 90_000.0);
        }
    }
}
