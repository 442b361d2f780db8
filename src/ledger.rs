//! Cash-flow ledger
//!
//! The ordered, append-only record of projected yearly cash flows. The ledger
//! is the hand-off artifact between yield projection and IRR estimation: the
//! projector appends one record per projected year, and downstream analytics
//! read the records in order.

use serde::{Deserialize, Serialize};

/// One year's projected cash flow
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlowRecord {
    /// Projection year, 1-based and contiguous within a single projection call
    pub year: u32,

    /// Projected cash flow for the year (phi-adjusted yield)
    pub amount: f64,
}

/// Ordered sequence of yearly cash-flow records
///
/// Appends accumulate across projection calls. A second projection on the
/// same engine extends the ledger rather than replacing it; callers that want
/// a self-contained series must clear first (the synthesizer does).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CashFlowLedger {
    records: Vec<CashFlowRecord>,
}

impl CashFlowLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record for the given year
    pub fn push(&mut self, year: u32, amount: f64) {
        self.records.push(CashFlowRecord { year, amount });
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the ledger holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of all recorded amounts
    pub fn total(&self) -> f64 {
        self.records.iter().map(|r| r.amount).sum()
    }

    /// Recorded cash flows in append order
    pub fn records(&self) -> &[CashFlowRecord] {
        &self.records
    }

    /// Remove all records
    pub fn clear(&mut self) {
        self.records.clear();
    }
}
