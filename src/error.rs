//! Error types for the DCF engine

use thiserror::Error;

/// Errors surfaced by engine operations
///
/// All errors are local to the call that raised them; the engine instance
/// stays usable and callers may correct inputs and re-invoke.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// IRR estimation was requested before any projection populated the ledger
    #[error("no cash flows available: run a projection before estimating IRR")]
    EmptyLedger,

    /// Liquidity validation with a zero total asset value would divide by zero
    #[error("total asset value must be non-zero for liquidity validation")]
    ZeroAssetValue,
}
