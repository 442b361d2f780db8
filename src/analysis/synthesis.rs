//! NPV synthesis and the comprehensive analysis result
//!
//! Present-value math over ledger records plus the aggregate type that the
//! engine's synthesize operation assembles from the three upstream analyses.

use serde::{Deserialize, Serialize};

use super::irr::IrrAnalysis;
use super::liquidity::{LiquidityStatus, LiquidityValidation};
use crate::ledger::CashFlowRecord;
use crate::projection::YieldProjection;

/// Fixed annotation carried on every comprehensive result; reporting only,
/// not computed from data
pub const PHI_ALIGNMENT_LABEL: &str = "OPTIMIZED";

/// Net present value of a cash-flow stream against an initial investment
///
/// `NPV = sum(amount / (1 + rate)^year) - initial_investment`. Callers are
/// responsible for scoping `records` to a single analysis; discounting uses
/// each record's own year.
pub fn net_present_value(
    records: &[CashFlowRecord],
    discount_rate: f64,
    initial_investment: f64,
) -> f64 {
    let discounted: f64 = records
        .iter()
        .map(|r| r.amount / (1.0 + discount_rate).powi(r.year as i32))
        .sum();
    discounted - initial_investment
}

/// Sign classification of an NPV figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NpvStatus {
    #[serde(rename = "POSITIVE")]
    Positive,
    #[serde(rename = "NEGATIVE")]
    Negative,
}

/// NPV figure with the rate it was discounted at
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpvSummary {
    pub value: f64,
    pub discount_rate: f64,
    pub status: NpvStatus,
}

impl NpvSummary {
    pub fn new(value: f64, discount_rate: f64) -> Self {
        let status = if value > 0.0 {
            NpvStatus::Positive
        } else {
            NpvStatus::Negative
        };
        Self {
            value,
            discount_rate,
            status,
        }
    }
}

/// Final viability verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Viability {
    #[serde(rename = "VIABLE")]
    Viable,
    #[serde(rename = "REVIEW_NEEDED")]
    ReviewNeeded,
}

/// Risk classification of the hedged return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "LOW")]
    Low,
    #[serde(rename = "MODERATE")]
    Moderate,
}

impl RiskLevel {
    /// Classify from the decimal hedged rate, never a formatted percentage
    pub fn from_hedged_irr(hedged_irr: f64) -> Self {
        if hedged_irr > 0.12 {
            RiskLevel::Low
        } else {
            RiskLevel::Moderate
        }
    }
}

/// Aggregate of projection, IRR, and liquidity analyses plus the NPV verdict
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComprehensiveAnalysis {
    /// Yearly yield forecast
    pub projection: YieldProjection,

    /// Risk-adjusted return analysis over the forecast cash flows
    pub irr: IrrAnalysis,

    /// Liquidity threshold validation
    pub liquidity: LiquidityValidation,

    /// Discounted value of the forecast against the initial investment
    pub npv: NpvSummary,

    /// Viable iff NPV is positive and liquidity validated
    pub investment_viability: Viability,

    /// Low iff the hedged IRR clears the strong-buy threshold
    pub risk_level: RiskLevel,

    /// Fixed reporting annotation
    pub phi_alignment: String,

    /// RFC 3339 generation timestamp; informational only
    pub generated_at: String,
}

impl ComprehensiveAnalysis {
    /// Derive the verdict fields and assemble the aggregate
    pub fn assemble(
        projection: YieldProjection,
        irr: IrrAnalysis,
        liquidity: LiquidityValidation,
        npv: NpvSummary,
    ) -> Self {
        let investment_viability =
            if npv.status == NpvStatus::Positive && liquidity.status == LiquidityStatus::Validated {
                Viability::Viable
            } else {
                Viability::ReviewNeeded
            };
        let risk_level = RiskLevel::from_hedged_irr(irr.hedged_irr);

        Self {
            projection,
            irr,
            liquidity,
            npv,
            investment_viability,
            risk_level,
            phi_alignment: PHI_ALIGNMENT_LABEL.to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_npv_single_record() {
        // 110 in one year at 10% discounts to 100
        let records = vec![CashFlowRecord { year: 1, amount: 110.0 }];
        let npv = net_present_value(&records, 0.10, 100.0);
        assert_relative_eq!(npv, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_npv_discounts_by_record_year() {
        let records = vec![
            CashFlowRecord { year: 1, amount: 100.0 },
            CashFlowRecord { year: 2, amount: 100.0 },
        ];
        let npv = net_present_value(&records, 0.08, 0.0);
        let expected = 100.0 / 1.08 + 100.0 / (1.08 * 1.08);
        assert_relative_eq!(npv, expected, epsilon = 1e-9);
    }

    #[test]
    fn test_npv_status_follows_sign() {
        assert_eq!(NpvSummary::new(1.0, 0.08).status, NpvStatus::Positive);
        assert_eq!(NpvSummary::new(-1.0, 0.08).status, NpvStatus::Negative);
        assert_eq!(NpvSummary::new(0.0, 0.08).status, NpvStatus::Negative);
    }

    #[test]
    fn test_risk_level_threshold() {
        assert_eq!(RiskLevel::from_hedged_irr(0.13), RiskLevel::Low);
        assert_eq!(RiskLevel::from_hedged_irr(0.12), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_hedged_irr(0.05), RiskLevel::Moderate);
    }
}
