//! Yield projection: yearly forecast rows and the projector itself

mod engine;
mod yields;

pub use engine::{ProjectionParams, YieldProjector};
pub use yields::{YieldProjection, YieldRow};
