use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::constants::{policy, seller, session};
use crate::error::Result;
use crate::market::{Product, QualityGrade};

/// Buyer decision policy parameters. Defaults reproduce the reference
/// behavior; override any of them in config.yaml.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    pub opening_ratio: f64,
    pub acceptance_threshold: f64,
    pub walk_away_threshold: f64,
    pub concession_base_rate: f64,
    pub urgency_multiplier: f64,
    pub min_progress_pct: f64,
    pub opening_budget_cap: f64,
    pub counter_budget_cap: f64,
    pub final_budget_cap: f64,
    pub origin_bonus: f64,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            opening_ratio: policy::OPENING_RATIO,
            acceptance_threshold: policy::ACCEPTANCE_THRESHOLD,
            walk_away_threshold: policy::WALK_AWAY_THRESHOLD,
            concession_base_rate: policy::CONCESSION_BASE_RATE,
            urgency_multiplier: policy::URGENCY_MULTIPLIER,
            min_progress_pct: policy::MIN_PROGRESS_PCT,
            opening_budget_cap: policy::OPENING_BUDGET_CAP,
            counter_budget_cap: policy::COUNTER_BUDGET_CAP,
            final_budget_cap: policy::FINAL_BUDGET_CAP,
            origin_bonus: policy::ORIGIN_BONUS,
        }
    }
}

/// Scripted seller model parameters. These belong to the collaborator, not
/// the buyer policy; the driver reads them only through the seller.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SellerConfig {
    pub accept_margin: f64,
    pub late_accept_margin: f64,
    pub late_round: u32,
    pub late_counter_markup: f64,
    pub opening_standard: f64,
    pub opening_aggressive: f64,
    pub opening_flexible: f64,
    pub counter_standard: f64,
    pub counter_aggressive: f64,
    pub counter_flexible: f64,
}

impl Default for SellerConfig {
    fn default() -> Self {
        Self {
            accept_margin: seller::ACCEPT_MARGIN,
            late_accept_margin: seller::LATE_ACCEPT_MARGIN,
            late_round: seller::LATE_ROUND,
            late_counter_markup: seller::LATE_COUNTER_MARKUP,
            opening_standard: 1.4,
            opening_aggressive: 1.6,
            opening_flexible: 1.3,
            counter_standard: 1.15,
            counter_aggressive: 1.2,
            counter_flexible: 1.12,
        }
    }
}

/// One difficulty tier of the benchmark grid, expressed as ratios of the
/// product's base market price.
#[derive(Clone, Debug, Deserialize)]
pub struct ScenarioConfig {
    pub name: String,
    pub budget_ratio: f64,
    pub seller_min_ratio: f64,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub max_rounds: u32,
    pub chatter_level: String,
    pub results_log: PathBuf,

    pub strategy: StrategyConfig,
    pub seller: SellerConfig,

    pub scenarios: Vec<ScenarioConfig>,
    pub products: Vec<Product>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_rounds: session::DEFAULT_MAX_ROUNDS,
            chatter_level: "normal".to_string(),
            results_log: PathBuf::from("results/sessions.jsonl"),
            strategy: StrategyConfig::default(),
            seller: SellerConfig::default(),
            scenarios: default_scenarios(),
            products: default_products(),
        }
    }
}

fn default_scenarios() -> Vec<ScenarioConfig> {
    vec![
        ScenarioConfig {
            name: "easy".to_string(),
            budget_ratio: 1.25,
            seller_min_ratio: 0.75,
        },
        ScenarioConfig {
            name: "medium".to_string(),
            budget_ratio: 1.05,
            seller_min_ratio: 0.85,
        },
        ScenarioConfig {
            name: "hard".to_string(),
            budget_ratio: 0.95,
            seller_min_ratio: 0.88,
        },
    ]
}

fn default_products() -> Vec<Product> {
    vec![
        Product {
            name: "Alphonso Mangoes".to_string(),
            category: Some("Mangoes".to_string()),
            quantity: 100,
            grade: QualityGrade::Export,
            origin: "Ratnagiri".to_string(),
            base_market_price: 200_000.0,
        },
        Product {
            name: "Kesar Mangoes".to_string(),
            category: Some("Mangoes".to_string()),
            quantity: 150,
            grade: QualityGrade::A,
            origin: "Gujarat".to_string(),
            base_market_price: 160_000.0,
        },
        Product {
            name: "Banganapalli Mangoes".to_string(),
            category: Some("Mangoes".to_string()),
            quantity: 120,
            grade: QualityGrade::B,
            origin: "Andhra Pradesh".to_string(),
            base_market_price: 140_000.0,
        },
    ]
}

impl AppConfig {
    /// Load from config.yaml, stripping a BOM if present. Missing file or
    /// fields fall back to defaults upstream.
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
        let config: AppConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }

    pub fn verbose(&self) -> bool {
        self.chatter_level.eq_ignore_ascii_case("verbose")
    }

    pub fn quiet(&self) -> bool {
        self.chatter_level.eq_ignore_ascii_case("low")
    }
}
