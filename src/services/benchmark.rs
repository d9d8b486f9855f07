//! Benchmark harness: runs a grid of sessions concurrently.
//!
//! Sessions are embarrassingly parallel - each task owns its own agent,
//! state, and seller, so the only coordination is the shared reporter.

use std::sync::Arc;

use tracing::{info, warn};

use crate::agents::BuyerAgent;
use crate::config::AppConfig;
use crate::seller::{ScriptedSeller, SellerPersonality};
use crate::services::driver::NegotiationDriver;
use crate::services::reporting::{BenchmarkSummary, SessionReporter};
use crate::session::NegotiationState;

pub struct BenchmarkRunner {
    config: AppConfig,
}

impl BenchmarkRunner {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Number of sessions one full grid run produces.
    pub fn grid_size(&self) -> usize {
        self.config.products.len() * SellerPersonality::ALL.len() * self.config.scenarios.len()
    }

    /// Run the full products x personalities x scenarios grid for one agent,
    /// one tokio task per session, and return the aggregate summary.
    ///
    /// `make_agent` builds a fresh agent per session so belief state never
    /// leaks across sessions.
    pub async fn run<F>(
        &self,
        agent_name: &str,
        make_agent: F,
        reporter: &SessionReporter,
    ) -> BenchmarkSummary
    where
        F: Fn() -> Box<dyn BuyerAgent> + Send + Sync + 'static,
    {
        info!(
            agent = agent_name,
            sessions = self.grid_size(),
            "starting benchmark grid"
        );

        let make_agent = Arc::new(make_agent);
        let mut handles = Vec::with_capacity(self.grid_size());

        for product in &self.config.products {
            for personality in SellerPersonality::ALL {
                for scenario in &self.config.scenarios {
                    let product = product.clone();
                    let scenario = scenario.clone();
                    let config = self.config.clone();
                    let reporter = reporter.clone();
                    let make_agent = Arc::clone(&make_agent);
                    let agent_name = agent_name.to_string();

                    handles.push(tokio::spawn(async move {
                        let budget = product.base_market_price * scenario.budget_ratio;
                        let seller_min = product.base_market_price * scenario.seller_min_ratio;

                        let seller =
                            ScriptedSeller::new(seller_min, personality, config.seller.clone());
                        let driver = NegotiationDriver::new(&config);
                        let mut agent = make_agent();
                        let state = NegotiationState::new(product, budget);

                        let outcome = driver.run_session(agent.as_mut(), state, &seller);
                        reporter.record(&agent_name, &outcome);
                    }));
                }
            }
        }

        for handle in handles {
            if let Err(e) = handle.await {
                warn!("benchmark session task failed: {}", e);
            }
        }

        let summary = reporter.summary();
        let stats = summary.compute_stats();
        info!(
            agent = agent_name,
            success_rate_pct = format!("{:.1}", stats.success_rate_pct),
            avg_savings_pct = format!("{:.1}", stats.avg_savings_pct),
            avg_rounds = format!("{:.1}", stats.avg_rounds_to_close),
            "benchmark grid complete"
        );
        summary
    }
}
