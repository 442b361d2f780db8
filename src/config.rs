//! Engine configuration
//!
//! Fixed parameters established once at construction and read by every
//! analysis component. Immutable for the life of an engine instance.

use serde::{Deserialize, Serialize};

/// Golden ratio constant used as the deterministic dampening/boosting
/// multiplier in the yield and IRR formulas. Not derived from market data.
pub const DEFAULT_PHI_RATIO: f64 = 1.6180339887;

/// Default annual discount rate applied in NPV calculations
pub const DEFAULT_DISCOUNT_RATE: f64 = 0.08;

/// Fixed parameters for a DCF engine instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Project identifier for reporting
    pub project_name: String,

    /// Location label for reporting
    pub location: String,

    /// Ratio constant; must exceed 1.0 for the hedge math to behave as
    /// designed (its inverse is then below 1.0)
    pub phi_ratio: f64,

    /// Annual discount rate, a decimal in [0, 1)
    pub discount_rate: f64,
}

impl EngineConfig {
    /// Create a config with the default phi ratio and discount rate
    pub fn new(project_name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            location: location.into(),
            phi_ratio: DEFAULT_PHI_RATIO,
            discount_rate: DEFAULT_DISCOUNT_RATE,
        }
    }

    /// Override the discount rate
    pub fn with_discount_rate(mut self, discount_rate: f64) -> Self {
        self.discount_rate = discount_rate;
        self
    }

    /// Override the phi ratio
    pub fn with_phi_ratio(mut self, phi_ratio: f64) -> Self {
        self.phi_ratio = phi_ratio;
        self
    }

    /// Inverse of the phi ratio, used as the hedge weight (~0.618)
    pub fn hedge_factor(&self) -> f64 {
        1.0 / self.phi_ratio
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new("Meridian Heights Development", "Denver, CO")
    }
}
