//! Session reporting: JSONL trail of outcomes plus aggregate statistics.
//!
//! Pure aggregation downstream of the driver; nothing here feeds back into
//! the policy.

use std::{
    collections::HashMap,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use chrono::Utc;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::seller::SellerPersonality;
use crate::session::SessionOutcome;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionLogEntry {
    pub ts: String,
    pub agent: String,
    #[serde(flatten)]
    pub outcome: SessionOutcome,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct PersonalityStats {
    pub sessions: u64,
    pub deals: u64,
}

impl PersonalityStats {
    pub fn success_rate_pct(&self) -> f64 {
        if self.sessions == 0 {
            0.0
        } else {
            self.deals as f64 / self.sessions as f64 * 100.0
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BenchmarkSummary {
    pub sessions: u64,
    pub deals: u64,
    pub total_savings: f64,
    pub total_savings_pct: f64,
    pub total_rounds_on_deals: u64,
    pub total_efficiency: u64,

    /// Per-product session counts
    pub per_product: HashMap<String, u64>,
}

/// Derived metrics, computed on demand from the summary.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ComputedStats {
    pub success_rate_pct: f64,
    pub avg_savings: f64,
    pub avg_savings_pct: f64,
    pub avg_rounds_to_close: f64,
    pub total_efficiency: u64,
}

impl BenchmarkSummary {
    pub fn compute_stats(&self) -> ComputedStats {
        let deals = self.deals as f64;
        let (avg_savings, avg_savings_pct, avg_rounds) = if self.deals > 0 {
            (
                self.total_savings / deals,
                self.total_savings_pct / deals,
                self.total_rounds_on_deals as f64 / deals,
            )
        } else {
            (0.0, 0.0, 0.0)
        };

        ComputedStats {
            success_rate_pct: if self.sessions == 0 {
                0.0
            } else {
                deals / self.sessions as f64 * 100.0
            },
            avg_savings,
            avg_savings_pct,
            avg_rounds_to_close: avg_rounds,
            total_efficiency: self.total_efficiency,
        }
    }
}

#[derive(Clone)]
pub struct SessionReporter {
    summary: Arc<Mutex<BenchmarkSummary>>,
    per_personality: Arc<DashMap<SellerPersonality, PersonalityStats>>,
    log_path: PathBuf,
}

impl SessionReporter {
    pub fn new(log_path: PathBuf) -> Self {
        Self {
            summary: Arc::new(Mutex::new(BenchmarkSummary::default())),
            per_personality: Arc::new(DashMap::new()),
            log_path,
        }
    }

    pub fn summary(&self) -> BenchmarkSummary {
        self.summary.lock().unwrap().clone()
    }

    pub fn personality_stats(&self) -> HashMap<SellerPersonality, PersonalityStats> {
        self.per_personality
            .iter()
            .map(|e| (*e.key(), *e.value()))
            .collect()
    }

    /// Fold one terminal outcome into the aggregates and append it to the
    /// JSONL log. Logging failures are reported, never propagated.
    pub fn record(&self, agent: &str, outcome: &SessionOutcome) {
        {
            let mut s = self.summary.lock().unwrap();
            s.sessions += 1;
            *s.per_product.entry(outcome.product_name.clone()).or_insert(0) += 1;
            if outcome.deal_made {
                s.deals += 1;
                s.total_savings += outcome.savings;
                s.total_savings_pct += outcome.savings_pct;
                s.total_rounds_on_deals += u64::from(outcome.rounds);
                s.total_efficiency += u64::from(outcome.efficiency_score);
            }
        }

        let mut stats = self
            .per_personality
            .entry(outcome.seller_personality)
            .or_default();
        stats.sessions += 1;
        if outcome.deal_made {
            stats.deals += 1;
        }
        drop(stats);

        let entry = SessionLogEntry {
            ts: Utc::now().to_rfc3339(),
            agent: agent.to_string(),
            outcome: outcome.clone(),
        };
        if let Err(e) = self.append_jsonl(&entry) {
            error!("failed to append session log entry: {}", e);
        }
    }

    fn append_jsonl(&self, entry: &SessionLogEntry) -> crate::error::Result<()> {
        use std::io::Write;

        if let Some(parent) = self.log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut f = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;

        let line = serde_json::to_string(entry)?;
        writeln!(f, "{}", line)?;
        Ok(())
    }

    /// Write the aggregate summary (plus derived stats and per-personality
    /// breakdown) next to the session log.
    pub fn flush_summary(&self) -> crate::error::Result<()> {
        #[derive(Serialize)]
        struct SummaryFile {
            summary: BenchmarkSummary,
            stats: ComputedStats,
            per_personality: HashMap<String, PersonalityStats>,
        }

        let summary = self.summary();
        let stats = summary.compute_stats();
        let per_personality = self
            .per_personality
            .iter()
            .map(|e| (e.key().to_string(), *e.value()))
            .collect();

        let path = self.log_path.with_file_name("benchmark_summary.json");
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = SummaryFile {
            summary,
            stats,
            per_personality,
        };
        std::fs::write(path, serde_json::to_vec_pretty(&file)?)?;
        Ok(())
    }
}
