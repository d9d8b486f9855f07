use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use rust_haggle::agents::{BuyerAgent, CautiousBuyer, DiplomatBuyer};
use rust_haggle::config::AppConfig;
use rust_haggle::error::Result;
use rust_haggle::services::benchmark::BenchmarkRunner;
use rust_haggle::services::reporting::SessionReporter;

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting rust_haggle benchmark...");

    let config = match AppConfig::load("config.yaml") {
        Ok(config) => config,
        Err(e) => {
            warn!("config.yaml not usable ({}), falling back to defaults", e);
            AppConfig::default()
        }
    };
    info!(
        max_rounds = config.max_rounds,
        products = config.products.len(),
        scenarios = config.scenarios.len(),
        "configuration loaded"
    );

    let runner = BenchmarkRunner::new(config.clone());

    // Diplomat: the full decision policy.
    let strategy = config.strategy.clone();
    let diplomat_log = config.results_log.with_file_name("diplomat_sessions.jsonl");
    let diplomat_reporter = SessionReporter::new(diplomat_log);
    let diplomat_summary = runner
        .run(
            "diplomat",
            move || Box::new(DiplomatBuyer::new(strategy.clone())) as Box<dyn BuyerAgent>,
            &diplomat_reporter,
        )
        .await;
    diplomat_reporter.flush_summary()?;

    // Cautious: the simple baseline, same grid.
    let cautious_log = config.results_log.with_file_name("cautious_sessions.jsonl");
    let cautious_reporter = SessionReporter::new(cautious_log);
    let cautious_summary = runner
        .run(
            "cautious",
            || Box::new(CautiousBuyer) as Box<dyn BuyerAgent>,
            &cautious_reporter,
        )
        .await;
    cautious_reporter.flush_summary()?;

    let d = diplomat_summary.compute_stats();
    let c = cautious_summary.compute_stats();
    info!(
        "📊 diplomat: {:.1}% success, avg savings {:.1}%, avg {:.1} rounds",
        d.success_rate_pct, d.avg_savings_pct, d.avg_rounds_to_close
    );
    info!(
        "📊 cautious: {:.1}% success, avg savings {:.1}%, avg {:.1} rounds",
        c.success_rate_pct, c.avg_savings_pct, c.avg_rounds_to_close
    );
    for (personality, stats) in diplomat_reporter.personality_stats() {
        info!(
            "   diplomat vs {} sellers: {:.1}% ({}/{})",
            personality,
            stats.success_rate_pct(),
            stats.deals,
            stats.sessions
        );
    }

    Ok(())
}
