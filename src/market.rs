//! Product descriptors and market-value analysis.

use serde::{Deserialize, Serialize};

use crate::constants::market::PREMIUM_ORIGINS;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityGrade {
    A,
    B,
    Export,
    #[serde(other)]
    Ungraded,
}

impl Default for QualityGrade {
    fn default() -> Self {
        QualityGrade::Ungraded
    }
}

impl QualityGrade {
    /// Premium multiplier relative to an ungraded lot.
    ///
    /// Informational: feeds valuation and message flavor, never the
    /// opening-offer base formula.
    pub fn premium(&self) -> f64 {
        match self {
            QualityGrade::Export => 1.15,
            QualityGrade::A => 1.10,
            QualityGrade::B => 0.95,
            QualityGrade::Ungraded => 1.0,
        }
    }

    pub fn praise(&self) -> &'static str {
        match self {
            QualityGrade::Export => "export-grade quality",
            QualityGrade::A => "premium Grade-A quality",
            QualityGrade::B => "excellent Grade-B value",
            QualityGrade::Ungraded => "fine quality",
        }
    }
}

/// Immutable descriptor of the lot under negotiation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    pub quantity: u32,
    #[serde(default)]
    pub grade: QualityGrade,
    pub origin: String,
    pub base_market_price: f64,
}

impl Product {
    pub fn is_premium_origin(&self) -> bool {
        PREMIUM_ORIGINS.iter().any(|o| self.origin.contains(o))
    }

    pub fn valuation(&self) -> ProductValuation {
        ProductValuation::of(self)
    }
}

/// Multi-factor value analysis of a product.
///
/// All factors here are advisory. The opening-offer formula only uses the
/// origin premium; quality and quantity factors inform messaging.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProductValuation {
    pub base_value: f64,
    pub quality_factor: f64,
    pub origin_premium: f64,
    pub quantity_efficiency: f64,
}

impl ProductValuation {
    pub fn of(product: &Product) -> Self {
        let origin_premium = if product.is_premium_origin() { 0.05 } else { 0.0 };

        // Bulk lots are expected to come with a small discount.
        let quantity_efficiency = if product.quantity >= 150 {
            0.97
        } else if product.quantity >= 100 {
            0.98
        } else {
            1.0
        };

        Self {
            base_value: product.base_market_price,
            quality_factor: product.grade.premium(),
            origin_premium,
            quantity_efficiency,
        }
    }

    /// Fully adjusted estimate of what the lot is worth to the buyer.
    pub fn adjusted_value(&self) -> f64 {
        self.base_value * self.quality_factor * (1.0 + self.origin_premium) * self.quantity_efficiency
    }
}
