//! Liquidity validation
//!
//! Checks a pool of liquid capital against four independent threshold rules
//! and produces a status plus one recommendation message per failing rule.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Upper bound of the optimal liquidity-ratio range
const OPTIMAL_RATIO_CEILING: f64 = 0.35;

/// Minimum phi-weighted liquidity score considered aligned
const PHI_ALIGNMENT_FLOOR: f64 = 0.30;

/// Parameters for a liquidity check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiquidityParams {
    /// Total asset value of the portfolio (dollars)
    pub total_asset_value: f64,

    /// Liquid capital currently held (dollars)
    pub current_liquidity: f64,

    /// Minimum liquidity as a fraction of total asset value
    pub required_ratio: f64,

    /// Emergency reserve floor as a fraction of total asset value
    pub emergency_ratio: f64,
}

impl Default for LiquidityParams {
    fn default() -> Self {
        Self {
            total_asset_value: 100_000_000.0,
            current_liquidity: 15_000_000.0,
            required_ratio: 0.20,
            emergency_ratio: 0.05,
        }
    }
}

/// Overall liquidity status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LiquidityStatus {
    #[serde(rename = "VALIDATED")]
    Validated,
    #[serde(rename = "NEEDS_ATTENTION")]
    NeedsAttention,
}

/// Result of one liquidity check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiquidityValidation {
    /// Minimum liquidity required: total_asset_value * required_ratio
    pub required_liquidity: f64,

    /// Emergency floor: total_asset_value * emergency_ratio
    pub emergency_reserve: f64,

    /// current_liquidity / total_asset_value
    pub actual_ratio: f64,

    /// actual_ratio weighted by the phi ratio
    pub phi_liquidity_score: f64,

    /// Rule 1: current liquidity covers the required minimum
    pub sufficient_liquidity: bool,

    /// Rule 2: current liquidity covers the emergency reserve
    pub emergency_reserve_met: bool,

    /// Rule 3: actual ratio falls inside the optimal range
    pub optimal_ratio: bool,

    /// Rule 4: phi-weighted score clears the alignment floor
    pub phi_aligned: bool,

    /// Validated iff all four rules pass
    pub status: LiquidityStatus,

    /// One message per failing rule, or a single affirmative message
    pub recommendations: Vec<String>,
}

/// Validate a liquidity position against the four threshold rules
///
/// Fails with [`EngineError::ZeroAssetValue`] when `total_asset_value` is
/// zero, since the actual ratio is undefined. Other out-of-range inputs are
/// not rejected.
pub fn validate_liquidity(
    params: &LiquidityParams,
    phi_ratio: f64,
) -> Result<LiquidityValidation, EngineError> {
    if params.total_asset_value == 0.0 {
        return Err(EngineError::ZeroAssetValue);
    }

    let required_liquidity = params.total_asset_value * params.required_ratio;
    let emergency_reserve = params.total_asset_value * params.emergency_ratio;
    let actual_ratio = params.current_liquidity / params.total_asset_value;
    let phi_liquidity_score = actual_ratio * phi_ratio;

    let sufficient_liquidity = params.current_liquidity >= required_liquidity;
    let emergency_reserve_met = params.current_liquidity >= emergency_reserve;
    let optimal_ratio =
        actual_ratio >= params.required_ratio && actual_ratio <= OPTIMAL_RATIO_CEILING;
    let phi_aligned = phi_liquidity_score >= PHI_ALIGNMENT_FLOOR;

    let status = if sufficient_liquidity && emergency_reserve_met && optimal_ratio && phi_aligned {
        LiquidityStatus::Validated
    } else {
        LiquidityStatus::NeedsAttention
    };

    debug!(
        "liquidity: ratio={:.4} phi_score={:.4} status={:?}",
        actual_ratio, phi_liquidity_score, status
    );

    // Messages are generated in rule order, one per failing rule
    let mut recommendations = Vec::new();
    if !sufficient_liquidity {
        let deficit = required_liquidity - params.current_liquidity;
        recommendations.push(format!(
            "Increase liquidity by ${:.1}M to meet requirements",
            deficit / 1_000_000.0
        ));
    }
    if !emergency_reserve_met {
        recommendations
            .push("Build the emergency reserve to cover unexpected shortfalls".to_string());
    }
    if !optimal_ratio {
        if params.current_liquidity / required_liquidity < 1.0 {
            recommendations
                .push("Liquidity ratio is below the optimal range; raise liquid holdings".to_string());
        } else {
            recommendations.push(
                "Liquidity ratio is above the optimal range; consider redeploying excess capital"
                    .to_string(),
            );
        }
    }
    if !phi_aligned {
        recommendations
            .push("Phi-weighted liquidity score is below the alignment target".to_string());
    }
    if recommendations.is_empty() {
        recommendations.push("Liquidity position meets all operational thresholds".to_string());
    }

    Ok(LiquidityValidation {
        required_liquidity,
        emergency_reserve,
        actual_ratio,
        phi_liquidity_score,
        sufficient_liquidity,
        emergency_reserve_met,
        optimal_ratio,
        phi_aligned,
        status,
        recommendations,
    })
}
