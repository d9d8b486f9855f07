//! Unit tests for negotiation state bookkeeping and outcomes.

#[cfg(test)]
mod session_tests {
    use crate::market::{Product, QualityGrade};
    use crate::seller::SellerPersonality;
    use crate::session::*;

    fn product() -> Product {
        Product {
            name: "Kesar Mangoes".to_string(),
            category: Some("Mangoes".to_string()),
            quantity: 150,
            grade: QualityGrade::A,
            origin: "Gujarat".to_string(),
            base_market_price: 160_000.0,
        }
    }

    // ============= NegotiationState Tests =============

    #[test]
    fn test_new_state_is_empty_at_round_zero() {
        let state = NegotiationState::new(product(), 168_000.0);
        assert_eq!(state.round(), 0);
        assert!(state.seller_offers().is_empty());
        assert!(state.buyer_offers().is_empty());
        assert!(state.messages().is_empty());
        assert_eq!(state.last_seller_offer(), None);
        assert_eq!(state.last_buyer_offer(), None);
    }

    #[test]
    fn test_round_counter_is_monotone() {
        let mut state = NegotiationState::new(product(), 168_000.0);
        for expected in 1..=10 {
            assert_eq!(state.begin_round(), expected);
        }
        assert_eq!(state.round(), 10);
    }

    #[test]
    fn test_offers_are_append_only_and_chronological() {
        let mut state = NegotiationState::new(product(), 168_000.0);
        state.record_seller_offer(224_000.0, "asking price");
        state.record_buyer_offer(112_000.0, "opening");
        state.record_seller_offer(200_000.0, "counter");
        state.record_buyer_offer(120_000.0, "counter");

        assert_eq!(state.seller_offers(), &[224_000.0, 200_000.0]);
        assert_eq!(state.buyer_offers(), &[112_000.0, 120_000.0]);
        assert_eq!(state.last_seller_offer(), Some(200_000.0));
        assert_eq!(state.last_buyer_offer(), Some(120_000.0));
        assert_eq!(state.messages().len(), 4);
    }

    #[test]
    fn test_message_roles_are_tagged() {
        let mut state = NegotiationState::new(product(), 168_000.0);
        state.record_seller_offer(224_000.0, "hello");
        state.record_buyer_message("goodbye");

        assert_eq!(state.messages()[0].role, Role::Seller);
        assert_eq!(state.messages()[1].role, Role::Buyer);
        // Buyer text without an offer leaves the offer history untouched
        assert!(state.buyer_offers().is_empty());
    }

    #[test]
    fn test_seller_concession_requires_two_offers() {
        let mut state = NegotiationState::new(product(), 168_000.0);
        assert_eq!(state.latest_seller_concession(), None);

        state.record_seller_offer(224_000.0, "ask");
        assert_eq!(state.latest_seller_concession(), None);

        state.record_seller_offer(210_000.0, "counter");
        assert_eq!(state.latest_seller_concession(), Some(14_000.0));

        // Seller raising its price yields a negative concession
        state.record_seller_offer(215_000.0, "raise");
        assert_eq!(state.latest_seller_concession(), Some(-5_000.0));
    }

    // ============= Decision Tests =============

    #[test]
    fn test_withdraw_is_not_a_zero_price_counter() {
        let counter = Decision::Counter {
            price: 0.0,
            message: "zero".to_string(),
        };
        assert_ne!(Decision::Withdraw, counter);
        assert_ne!(Decision::Withdraw, Decision::Accept(0.0));
    }

    // ============= SessionOutcome Tests =============

    #[test]
    fn test_deal_outcome_metrics() {
        let outcome = SessionOutcome::deal(
            &product(),
            SellerPersonality::Standard,
            168_000.0,
            150_000.0,
            4,
            10,
        );

        assert!(outcome.deal_made);
        assert_eq!(outcome.final_price, Some(150_000.0));
        assert_eq!(outcome.rounds, 4);
        assert_eq!(outcome.savings, 18_000.0);
        assert!((outcome.savings_pct - 10.714285).abs() < 1e-3);
        assert!((outcome.below_market_pct - 6.25).abs() < 1e-9);
        // (10 - 4 + 1) * 10
        assert_eq!(outcome.efficiency_score, 70);
    }

    #[test]
    fn test_no_deal_outcome_is_zeroed() {
        let outcome = SessionOutcome::no_deal(&product(), SellerPersonality::Aggressive, 168_000.0, 10);

        assert!(!outcome.deal_made);
        assert_eq!(outcome.final_price, None);
        assert_eq!(outcome.rounds, 10);
        assert_eq!(outcome.savings, 0.0);
        assert_eq!(outcome.efficiency_score, 0);
    }

    #[test]
    fn test_outcome_serializes() {
        let outcome = SessionOutcome::deal(
            &product(),
            SellerPersonality::Flexible,
            168_000.0,
            150_000.0,
            3,
            10,
        );
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"deal_made\":true"));
        assert!(json.contains("\"seller_personality\":\"flexible\""));
    }
}
