//! Post-projection analytics: IRR estimation, liquidity validation, and
//! NPV synthesis

mod irr;
mod liquidity;
mod synthesis;

pub use irr::{estimate_hedged_irr, IrrAnalysis, Recommendation};
pub use liquidity::{validate_liquidity, LiquidityParams, LiquidityStatus, LiquidityValidation};
pub use synthesis::{
    net_present_value, ComprehensiveAnalysis, NpvStatus, NpvSummary, RiskLevel, Viability,
    PHI_ALIGNMENT_LABEL,
};
