//! The DCF engine instance
//!
//! Owns the configuration, the cash-flow ledger, and the liquidity-pool
//! snapshot, and exposes the full operation surface: project, IRR
//! estimation, liquidity validation, synthesis, and state inspection.
//!
//! All operations are synchronous and closed-form. An engine instance is not
//! meant to be shared across concurrent callers; run one instance per
//! logical analysis (see [`crate::batch::AnalysisRunner`]).

use log::info;
use serde::{Deserialize, Serialize};

use crate::analysis::{
    estimate_hedged_irr, net_present_value, validate_liquidity, ComprehensiveAnalysis,
    IrrAnalysis, LiquidityParams, LiquidityValidation, NpvSummary,
};
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::ledger::CashFlowLedger;
use crate::projection::{ProjectionParams, YieldProjection, YieldProjector};

/// Read-only snapshot of an engine instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineStateSnapshot {
    /// Copy of the fixed configuration
    pub config: EngineConfig,

    /// Number of cash-flow records currently held
    pub ledger_len: usize,

    /// Sum of all recorded cash flows
    pub ledger_total: f64,

    /// Liquidity-pool value from the most recent validation, 0 before any
    pub liquidity_pool: f64,
}

/// DCF analysis engine for a single investment case
#[derive(Debug, Clone)]
pub struct DcfEngine {
    config: EngineConfig,
    projector: YieldProjector,
    ledger: CashFlowLedger,
    liquidity_pool: f64,
}

impl DcfEngine {
    /// Create an engine with the given configuration
    pub fn new(config: EngineConfig) -> Self {
        let projector = YieldProjector::new(config.phi_ratio);
        Self {
            config,
            projector,
            ledger: CashFlowLedger::new(),
            liquidity_pool: 0.0,
        }
    }

    /// Fixed configuration for this instance
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Cash flows recorded so far
    pub fn ledger(&self) -> &CashFlowLedger {
        &self.ledger
    }

    /// Drop all recorded cash flows
    ///
    /// `project` appends across calls; callers reusing an instance for a new
    /// standalone forecast should reset first.
    pub fn reset_ledger(&mut self) {
        self.ledger.clear();
    }

    /// Run a yearly yield projection, appending one ledger record per year
    ///
    /// Repeated calls extend the ledger rather than replacing it.
    pub fn project(&mut self, params: &ProjectionParams) -> YieldProjection {
        info!(
            "projecting {} years for {} ({})",
            params.years, self.config.project_name, self.config.location
        );
        self.projector.project(params, &mut self.ledger)
    }

    /// Estimate the risk-adjusted IRR over the recorded cash flows
    ///
    /// Requires a prior projection; fails with [`EngineError::EmptyLedger`]
    /// on a fresh engine.
    pub fn estimate_hedged_irr(&self, initial_investment: f64) -> Result<IrrAnalysis, EngineError> {
        estimate_hedged_irr(&self.ledger, initial_investment, self.config.phi_ratio)
    }

    /// Validate a liquidity position against the four threshold rules
    ///
    /// Overwrites the instance's liquidity-pool value with the position
    /// under review.
    pub fn validate_liquidity(
        &mut self,
        params: &LiquidityParams,
    ) -> Result<LiquidityValidation, EngineError> {
        let result = validate_liquidity(params, self.config.phi_ratio)?;
        self.liquidity_pool = params.current_liquidity;
        Ok(result)
    }

    /// Run the full analysis: projection, IRR, liquidity, NPV, verdict
    ///
    /// The ledger is cleared first so every comprehensive analysis is
    /// self-contained and its NPV covers only the cash flows projected here.
    pub fn synthesize(
        &mut self,
        projection_params: &ProjectionParams,
        liquidity_params: &LiquidityParams,
    ) -> Result<ComprehensiveAnalysis, EngineError> {
        info!("synthesizing comprehensive analysis for {}", self.config.project_name);

        self.ledger.clear();
        let projection = self.project(projection_params);
        let irr = self.estimate_hedged_irr(projection_params.investment)?;
        let liquidity = self.validate_liquidity(liquidity_params)?;

        let npv_value = net_present_value(
            self.ledger.records(),
            self.config.discount_rate,
            projection_params.investment,
        );
        let npv = NpvSummary::new(npv_value, self.config.discount_rate);

        Ok(ComprehensiveAnalysis::assemble(projection, irr, liquidity, npv))
    }

    /// Snapshot the instance state: config, ledger size and total, pool value
    pub fn inspect_state(&self) -> EngineStateSnapshot {
        EngineStateSnapshot {
            config: self.config.clone(),
            ledger_len: self.ledger.len(),
            ledger_total: self.ledger.total(),
            liquidity_pool: self.liquidity_pool,
        }
    }
}

impl Default for DcfEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{LiquidityStatus, NpvStatus, Viability};
    use crate::error::EngineError;

    #[test]
    fn test_irr_on_fresh_engine_fails() {
        let engine = DcfEngine::default();
        let err = engine.estimate_hedged_irr(50_000_000.0).unwrap_err();
        assert_eq!(err, EngineError::EmptyLedger);
    }

    #[test]
    fn test_project_then_irr() {
        let mut engine = DcfEngine::default();
        engine.project(&ProjectionParams::default());

        let analysis = engine.estimate_hedged_irr(50_000_000.0).unwrap();
        assert!(analysis.base_irr > 0.0);
        assert!(analysis.hedged_irr > analysis.base_irr);
        assert_eq!(engine.ledger().len(), 10);
    }

    #[test]
    fn test_ledger_accumulates_then_resets() {
        let mut engine = DcfEngine::default();
        engine.project(&ProjectionParams { years: 5, ..Default::default() });
        engine.project(&ProjectionParams { years: 3, ..Default::default() });
        assert_eq!(engine.inspect_state().ledger_len, 8);

        engine.reset_ledger();
        assert_eq!(engine.inspect_state().ledger_len, 0);
    }

    #[test]
    fn test_validation_overwrites_pool() {
        let mut engine = DcfEngine::default();
        assert_eq!(engine.inspect_state().liquidity_pool, 0.0);

        engine
            .validate_liquidity(&LiquidityParams {
                current_liquidity: 25_000_000.0,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(engine.inspect_state().liquidity_pool, 25_000_000.0);

        engine
            .validate_liquidity(&LiquidityParams {
                current_liquidity: 12_000_000.0,
                ..Default::default()
            })
            .unwrap();
        // Overwritten, not accumulated
        assert_eq!(engine.inspect_state().liquidity_pool, 12_000_000.0);
    }

    #[test]
    fn test_synthesize_is_self_contained() {
        let mut engine = DcfEngine::default();
        // Leftover records from an earlier standalone projection must not
        // leak into the synthesized NPV
        engine.project(&ProjectionParams { years: 7, ..Default::default() });

        let projection_params = ProjectionParams {
            investment: 50_000_000.0,
            years: 5,
            growth_rate: 0.15,
            occupancy_rate: 0.95,
        };
        let liquidity_params = LiquidityParams {
            current_liquidity: 30_000_000.0,
            ..Default::default()
        };

        let analysis = engine.synthesize(&projection_params, &liquidity_params).unwrap();

        assert_eq!(engine.ledger().len(), 5);
        assert!(analysis.npv.value.is_finite());
        match analysis.npv.status {
            NpvStatus::Positive => assert!(analysis.npv.value > 0.0),
            NpvStatus::Negative => assert!(analysis.npv.value <= 0.0),
        }
    }

    #[test]
    fn test_viability_requires_npv_and_liquidity() {
        let projection_params = ProjectionParams {
            investment: 50_000_000.0,
            years: 5,
            growth_rate: 0.15,
            occupancy_rate: 0.95,
        };

        // Healthy liquidity: verdict tracks NPV sign (positive here)
        let mut engine = DcfEngine::default();
        let healthy = engine
            .synthesize(
                &projection_params,
                &LiquidityParams { current_liquidity: 30_000_000.0, ..Default::default() },
            )
            .unwrap();
        assert_eq!(healthy.npv.status, NpvStatus::Positive);
        assert_eq!(healthy.liquidity.status, LiquidityStatus::Validated);
        assert_eq!(healthy.investment_viability, Viability::Viable);

        // Same projection, failing liquidity: verdict flips
        let mut engine = DcfEngine::default();
        let strained = engine
            .synthesize(
                &projection_params,
                &LiquidityParams { current_liquidity: 10_000_000.0, ..Default::default() },
            )
            .unwrap();
        assert_eq!(strained.npv.status, NpvStatus::Positive);
        assert_eq!(strained.liquidity.status, LiquidityStatus::NeedsAttention);
        assert_eq!(strained.investment_viability, Viability::ReviewNeeded);
    }

    #[test]
    fn test_negative_npv_flips_verdict_despite_validated_liquidity() {
        // Shrinking cash flows: the discounted total never recovers the
        // investment, so NPV is negative even though liquidity passes
        let projection_params = ProjectionParams {
            investment: 50_000_000.0,
            years: 3,
            growth_rate: -0.5,
            occupancy_rate: 0.5,
        };
        let liquidity_params = LiquidityParams {
            current_liquidity: 30_000_000.0,
            ..Default::default()
        };

        let mut engine = DcfEngine::default();
        let analysis = engine.synthesize(&projection_params, &liquidity_params).unwrap();

        assert_eq!(analysis.liquidity.status, LiquidityStatus::Validated);
        assert!(analysis.npv.value < 0.0);
        assert_eq!(analysis.npv.status, NpvStatus::Negative);
        assert_eq!(analysis.investment_viability, Viability::ReviewNeeded);
    }

    #[test]
    fn test_determinism() {
        let projection_params = ProjectionParams::default();
        let liquidity_params = LiquidityParams::default();

        let mut a = DcfEngine::default();
        let mut b = DcfEngine::default();
        let ra = a.synthesize(&projection_params, &liquidity_params).unwrap();
        let rb = b.synthesize(&projection_params, &liquidity_params).unwrap();

        assert_eq!(ra.npv.value.to_bits(), rb.npv.value.to_bits());
        assert_eq!(ra.irr.hedged_irr.to_bits(), rb.irr.hedged_irr.to_bits());
        assert_eq!(ra.projection.total_yield.to_bits(), rb.projection.total_yield.to_bits());
    }

    #[test]
    fn test_inspect_state_snapshot() {
        let mut engine = DcfEngine::new(EngineConfig::new("Harbor Point", "Seattle, WA"));
        engine.project(&ProjectionParams::default());

        let snapshot = engine.inspect_state();
        assert_eq!(snapshot.config.project_name, "Harbor Point");
        assert_eq!(snapshot.ledger_len, 10);
        assert!(snapshot.ledger_total > 0.0);
    }
}
