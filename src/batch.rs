//! Batch runner for scenario grids
//!
//! Builds one engine instance per analysis so concurrent runs never share a
//! ledger, then fans the cases out across a rayon thread pool.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::{ComprehensiveAnalysis, LiquidityParams};
use crate::config::EngineConfig;
use crate::engine::DcfEngine;
use crate::error::EngineError;
use crate::projection::ProjectionParams;

/// One scenario: a projection parameter set paired with a liquidity position
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisCase {
    pub projection: ProjectionParams,
    pub liquidity: LiquidityParams,
}

/// Pre-configured runner for many comprehensive analyses
///
/// # Example
/// ```
/// use dcf_engine::batch::{AnalysisRunner, AnalysisCase};
/// use dcf_engine::projection::ProjectionParams;
///
/// let runner = AnalysisRunner::new();
/// let cases: Vec<AnalysisCase> = [0.10, 0.12, 0.15]
///     .iter()
///     .map(|&growth_rate| AnalysisCase {
///         projection: ProjectionParams { growth_rate, ..Default::default() },
///         ..Default::default()
///     })
///     .collect();
/// let results = runner.run_batch(&cases);
/// assert_eq!(results.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AnalysisRunner {
    base_config: EngineConfig,
}

impl AnalysisRunner {
    /// Create a runner with the default engine configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner with a specific configuration
    pub fn with_config(base_config: EngineConfig) -> Self {
        Self { base_config }
    }

    /// Run a single comprehensive analysis on a fresh engine instance
    pub fn run(&self, case: &AnalysisCase) -> Result<ComprehensiveAnalysis, EngineError> {
        let mut engine = DcfEngine::new(self.base_config.clone());
        engine.synthesize(&case.projection, &case.liquidity)
    }

    /// Run many cases in parallel, one engine instance per case
    pub fn run_batch(
        &self,
        cases: &[AnalysisCase],
    ) -> Vec<Result<ComprehensiveAnalysis, EngineError>> {
        cases.par_iter().map(|case| self.run(case)).collect()
    }

    /// Base configuration used for every spawned engine
    pub fn config(&self) -> &EngineConfig {
        &self.base_config
    }
}
