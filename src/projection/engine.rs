//! Yearly yield projection
//!
//! Compound-growth forecast with an occupancy adjustment and a fixed
//! phi-derived conservatism multiplier. Each projected year appends one
//! cash-flow record to the ledger supplied by the caller.

use log::debug;
use serde::{Deserialize, Serialize};

use super::yields::{YieldProjection, YieldRow};
use crate::ledger::CashFlowLedger;

/// Parameters for a projection run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionParams {
    /// Initial invested capital (dollars)
    pub investment: f64,

    /// Number of years to project
    pub years: u32,

    /// Annual growth rate as a decimal (0.12 = 12%)
    pub growth_rate: f64,

    /// Occupancy rate as a decimal, conventionally in [0, 1]
    pub occupancy_rate: f64,
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self {
            investment: 50_000_000.0,
            years: 10,
            growth_rate: 0.12,
            occupancy_rate: 0.92,
        }
    }
}

/// Yield projector
///
/// Holds only the ratio constant; the ledger it writes to belongs to the
/// engine instance and is passed in per call.
#[derive(Debug, Clone)]
pub struct YieldProjector {
    phi_ratio: f64,
}

impl YieldProjector {
    pub fn new(phi_ratio: f64) -> Self {
        Self { phi_ratio }
    }

    /// Multiplier applied to every occupancy-adjusted yield
    ///
    /// `1 + (1/phi - 1) * 0.1`: a 10%-weighted pull toward the inverse ratio.
    /// For phi > 1 the inverse is below 1, so the factor sits slightly under
    /// 1.0 and the adjustment is a deterministic haircut, not a boost.
    pub fn phi_adjustment_factor(&self) -> f64 {
        1.0 + (1.0 / self.phi_ratio - 1.0) * 0.1
    }

    /// Project yearly yields and append one ledger record per year
    ///
    /// For each year t = 1..=years:
    ///   base     = investment * (1 + growth_rate)^t
    ///   adjusted = base * occupancy_rate
    ///   phi_adj  = adjusted * phi_adjustment_factor
    ///
    /// Degenerate inputs are not rejected: years = 0 yields an empty result,
    /// negative growth yields shrinking (or negative) amounts. The ledger
    /// grows by exactly `years` records; prior records are left in place.
    pub fn project(
        &self,
        params: &ProjectionParams,
        ledger: &mut CashFlowLedger,
    ) -> YieldProjection {
        let mut projection = YieldProjection::new();
        let phi_factor = self.phi_adjustment_factor();
        let mut cumulative = 0.0;

        for year in 1..=params.years {
            let base_yield = params.investment * (1.0 + params.growth_rate).powi(year as i32);
            let adjusted_yield = base_yield * params.occupancy_rate;
            let phi_adjusted_yield = adjusted_yield * phi_factor;
            cumulative += phi_adjusted_yield;

            debug!(
                "year {}: base={:.2} adjusted={:.2} phi_adjusted={:.2}",
                year, base_yield, adjusted_yield, phi_adjusted_yield
            );

            ledger.push(year, phi_adjusted_yield);
            projection.add_row(YieldRow {
                year,
                base_yield,
                adjusted_yield,
                phi_adjusted_yield,
                cumulative_yield: cumulative,
                occupancy_rate: params.occupancy_rate,
            });
        }

        projection
    }
}
