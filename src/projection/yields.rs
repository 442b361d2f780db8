//! Yield projection output structures

use serde::{Deserialize, Serialize};

/// A single row of projection output for one year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YieldRow {
    /// Projection year (1-based)
    pub year: u32,

    /// Compound-growth yield before any adjustment
    pub base_yield: f64,

    /// Base yield scaled by the occupancy rate
    pub adjusted_yield: f64,

    /// Adjusted yield after the phi conservatism multiplier
    pub phi_adjusted_yield: f64,

    /// Running sum of phi-adjusted yields through this year
    pub cumulative_yield: f64,

    /// Occupancy rate applied this year
    pub occupancy_rate: f64,
}

/// Complete yield projection result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YieldProjection {
    /// Yearly breakdown, one row per projected year
    pub rows: Vec<YieldRow>,

    /// Sum of all phi-adjusted yearly yields
    pub total_yield: f64,

    /// Average phi-adjusted yield across the period
    pub average_yield: f64,
}

impl YieldProjection {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            total_yield: 0.0,
            average_yield: 0.0,
        }
    }

    /// Add a yearly row and fold its yield into the totals
    pub fn add_row(&mut self, row: YieldRow) {
        self.total_yield += row.phi_adjusted_yield;
        self.rows.push(row);
        self.average_yield = self.total_yield / self.rows.len() as f64;
    }

    /// Number of projected years
    pub fn years(&self) -> usize {
        self.rows.len()
    }
}

impl Default for YieldProjection {
    fn default() -> Self {
        Self::new()
    }
}
