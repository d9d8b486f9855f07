//! Unit tests for configuration structures and parsing.

#[cfg(test)]
mod config_tests {
    use crate::config::*;

    // ============= StrategyConfig Tests =============

    #[test]
    fn test_strategy_config_default() {
        let config = StrategyConfig::default();

        assert_eq!(config.opening_ratio, 0.70);
        assert_eq!(config.acceptance_threshold, 0.85);
        assert_eq!(config.walk_away_threshold, 0.96);
        assert_eq!(config.concession_base_rate, 0.15);
        assert_eq!(config.urgency_multiplier, 1.3);
        assert_eq!(config.min_progress_pct, 0.015);
        assert_eq!(config.opening_budget_cap, 0.85);
        assert_eq!(config.counter_budget_cap, 0.95);
        assert_eq!(config.final_budget_cap, 0.98);
    }

    #[test]
    fn test_strategy_config_partial_yaml_uses_defaults() {
        let yaml = r#"
opening_ratio: 0.65
concession_base_rate: 0.2
"#;
        let config: StrategyConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.opening_ratio, 0.65);
        assert_eq!(config.concession_base_rate, 0.2);
        // Untouched fields fall back to defaults
        assert_eq!(config.acceptance_threshold, 0.85);
        assert_eq!(config.walk_away_threshold, 0.96);
    }

    // ============= SellerConfig Tests =============

    #[test]
    fn test_seller_config_default() {
        let config = SellerConfig::default();

        assert_eq!(config.accept_margin, 1.15);
        assert_eq!(config.late_accept_margin, 1.05);
        assert_eq!(config.late_round, 8);
        assert_eq!(config.opening_standard, 1.4);
        assert_eq!(config.opening_aggressive, 1.6);
        assert_eq!(config.opening_flexible, 1.3);
        assert_eq!(config.counter_aggressive, 1.2);
    }

    // ============= AppConfig Tests =============

    #[test]
    fn test_app_config_default_grid() {
        let config = AppConfig::default();

        assert_eq!(config.max_rounds, 10);
        assert_eq!(config.products.len(), 3);
        assert_eq!(config.scenarios.len(), 3);
        assert_eq!(config.scenarios[0].name, "easy");
        assert_eq!(config.scenarios[1].budget_ratio, 1.05);
        assert_eq!(config.scenarios[2].seller_min_ratio, 0.88);
    }

    #[test]
    fn test_app_config_empty_yaml_is_all_defaults() {
        let config: AppConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.max_rounds, 10);
        assert_eq!(config.strategy.opening_ratio, 0.70);
        assert_eq!(config.seller.accept_margin, 1.15);
    }

    #[test]
    fn test_app_config_overrides() {
        let yaml = r#"
max_rounds: 6
chatter_level: verbose
strategy:
  walk_away_threshold: 0.9
products:
  - name: Test Lot
    quantity: 10
    grade: B
    origin: Salem
    base_market_price: 50000
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.max_rounds, 6);
        assert!(config.verbose());
        assert!(!config.quiet());
        assert_eq!(config.strategy.walk_away_threshold, 0.9);
        assert_eq!(config.products.len(), 1);
        assert_eq!(config.products[0].base_market_price, 50_000.0);
        assert_eq!(config.products[0].category, None);
    }

    #[test]
    fn test_chatter_levels() {
        let mut config = AppConfig::default();
        assert!(!config.verbose());
        assert!(!config.quiet());

        config.chatter_level = "LOW".to_string();
        assert!(config.quiet());
    }
}
