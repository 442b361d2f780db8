//! DCF Engine - Deterministic financial-projection engine for real-estate
//! investment underwriting
//!
//! This library provides:
//! - Multi-year yield forecasting with compound growth, occupancy, and a
//!   phi-derived conservatism adjustment
//! - Risk-adjusted IRR estimation (geometric-mean approximation with a fixed
//!   phi-weighted hedge)
//! - Liquidity validation against operational safety thresholds
//! - NPV-based synthesis into a single viability verdict
//! - Batch scenario runs across parameter grids

pub mod analysis;
pub mod batch;
pub mod config;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod projection;

// Re-export commonly used types
pub use analysis::{ComprehensiveAnalysis, IrrAnalysis, LiquidityParams, LiquidityValidation};
pub use config::EngineConfig;
pub use engine::{DcfEngine, EngineStateSnapshot};
pub use error::EngineError;
pub use ledger::{CashFlowLedger, CashFlowRecord};
pub use projection::{ProjectionParams, YieldProjection};
