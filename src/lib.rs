//! rust_haggle - automated buyer for turn-based price negotiations
//!
//! This library provides the core decision policy for a buyer agent
//! haggling against a scripted seller, plus the driver, reporting, and
//! benchmark harness around it.

pub mod agents;
pub mod config;
pub mod constants;
pub mod error;
pub mod extract;
pub mod market;
pub mod seller;
pub mod services;
pub mod session;

// Re-export commonly used types
pub use agents::{BuyerAgent, CautiousBuyer, DiplomatBuyer};
pub use config::AppConfig;
pub use error::NegotiationError;
pub use session::{Decision, NegotiationState, SessionOutcome};

#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod session_tests;
