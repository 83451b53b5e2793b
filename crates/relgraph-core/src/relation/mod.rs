//! Relation graph derivation.
//!
//! Foreign keys are first classified into edges ([`classify`]), then
//! materialized into directed, borrowed [`Relation`]s ([`build`]). Both
//! stages are pure; their output can be cached and renamed repeatedly.

mod build;
mod classify;
mod relation;
mod set;

pub use build::build;
pub use classify::{classify, BridgeDetectionPolicy, ClassifiedEdge};
pub use relation::{Relation, RelationKind};
pub use set::RelationSet;
