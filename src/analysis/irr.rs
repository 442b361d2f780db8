//! Hedged IRR estimation
//!
//! The return figure is a closed-form geometric-mean approximation over the
//! ledger, not a root of the NPV equation. Downstream thresholds (the
//! recommendation bands, the risk level in synthesis) are calibrated to this
//! approximation, so it must not be swapped for an iterative solver.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::EngineError;
use crate::ledger::CashFlowLedger;

/// Discrete buy/hold recommendation derived from the hedged IRR
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "Strong Buy")]
    StrongBuy,
    Buy,
    Hold,
}

impl Recommendation {
    /// Band the hedged IRR (a decimal rate, never a formatted percentage)
    pub fn from_hedged_irr(hedged_irr: f64) -> Self {
        if hedged_irr > 0.12 {
            Recommendation::StrongBuy
        } else if hedged_irr > 0.08 {
            Recommendation::Buy
        } else {
            Recommendation::Hold
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::StrongBuy => write!(f, "Strong Buy"),
            Recommendation::Buy => write!(f, "Buy"),
            Recommendation::Hold => write!(f, "Hold"),
        }
    }
}

/// Result of one IRR estimation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrrAnalysis {
    /// Geometric-mean annualized return before hedging
    pub base_irr: f64,

    /// Base IRR after the phi-weighted hedge adjustment
    pub hedged_irr: f64,

    /// Ratio constant the hedge was derived from
    pub phi_ratio: f64,

    /// Hedge weight, the inverse of the ratio constant (~0.618)
    pub hedge_factor: f64,

    /// Hedged IRR over an assumed 15% volatility
    pub sharpe_ratio: f64,

    /// Hedged IRR over an assumed 10% downside volatility
    pub sortino_ratio: f64,

    /// Recommendation band for the hedged rate
    pub recommendation: Recommendation,
}

/// Estimate the risk-adjusted IRR from the ledger
///
/// `base_irr = (total_cash_flow / initial_investment)^(1/n) - 1` where n is
/// the ledger length, then `hedged_irr = base_irr * (1 + (1/phi) * 0.15)`.
/// The Sharpe and Sortino figures use fixed 15% and 10% volatility
/// assumptions rather than measured variance.
///
/// Fails with [`EngineError::EmptyLedger`] when no projection has run yet.
pub fn estimate_hedged_irr(
    ledger: &CashFlowLedger,
    initial_investment: f64,
    phi_ratio: f64,
) -> Result<IrrAnalysis, EngineError> {
    if ledger.is_empty() {
        return Err(EngineError::EmptyLedger);
    }

    let total_cash_flow = ledger.total();
    let n = ledger.len() as f64;

    let base_irr = (total_cash_flow / initial_investment).powf(1.0 / n) - 1.0;
    let hedge_factor = 1.0 / phi_ratio;
    let hedged_irr = base_irr * (1.0 + hedge_factor * 0.15);

    debug!(
        "IRR over {} records: base={:.6} hedged={:.6}",
        ledger.len(),
        base_irr,
        hedged_irr
    );

    Ok(IrrAnalysis {
        base_irr,
        hedged_irr,
        phi_ratio,
        hedge_factor,
        sharpe_ratio: hedged_irr / 0.15,
        sortino_ratio: hedged_irr / 0.10,
        recommendation: Recommendation::from_hedged_irr(hedged_irr),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const PHI: f64 = 1.6180339887;

    fn ledger_with(amounts: &[f64]) -> CashFlowLedger {
        let mut ledger = CashFlowLedger::new();
        for (i, &amount) in amounts.iter().enumerate() {
            ledger.push(i as u32 + 1, amount);
        }
        ledger
    }

    #[test]
    fn test_empty_ledger_is_invalid_state() {
        let ledger = CashFlowLedger::new();
        let err = estimate_hedged_irr(&ledger, 1_000_000.0, PHI).unwrap_err();
        assert_eq!(err, EngineError::EmptyLedger);
    }

    #[test]
    fn test_geometric_mean_formula() {
        // Total 2,000,000 over 2 records against 1,000,000 invested:
        // base = 2^(1/2) - 1 ~= 0.414214
        let ledger = ledger_with(&[900_000.0, 1_100_000.0]);
        let analysis = estimate_hedged_irr(&ledger, 1_000_000.0, PHI).unwrap();

        assert_relative_eq!(analysis.base_irr, 2.0_f64.sqrt() - 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_hedge_exceeds_base_when_positive() {
        let ledger = ledger_with(&[600_000.0, 700_000.0, 800_000.0]);
        let analysis = estimate_hedged_irr(&ledger, 1_000_000.0, PHI).unwrap();

        assert!(analysis.base_irr > 0.0);
        assert!(analysis.hedged_irr > analysis.base_irr);
        // hedge adds a 1/phi * 0.15 ~= 0.0927 multiplicative term
        assert_relative_eq!(
            analysis.hedged_irr,
            analysis.base_irr * (1.0 + 0.15 / PHI),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_risk_ratios_use_fixed_volatility() {
        let ledger = ledger_with(&[500_000.0, 600_000.0]);
        let analysis = estimate_hedged_irr(&ledger, 1_000_000.0, PHI).unwrap();

        assert_relative_eq!(analysis.sharpe_ratio, analysis.hedged_irr / 0.15, epsilon = 1e-12);
        assert_relative_eq!(analysis.sortino_ratio, analysis.hedged_irr / 0.10, epsilon = 1e-12);
    }

    #[test]
    fn test_recommendation_bands() {
        assert_eq!(Recommendation::from_hedged_irr(0.15), Recommendation::StrongBuy);
        assert_eq!(Recommendation::from_hedged_irr(0.12), Recommendation::Buy);
        assert_eq!(Recommendation::from_hedged_irr(0.10), Recommendation::Buy);
        assert_eq!(Recommendation::from_hedged_irr(0.08), Recommendation::Hold);
        assert_eq!(Recommendation::from_hedged_irr(-0.02), Recommendation::Hold);
    }

    #[test]
    fn test_recommendation_labels() {
        assert_eq!(Recommendation::StrongBuy.to_string(), "Strong Buy");
        assert_eq!(Recommendation::Hold.to_string(), "Hold");
    }
}
