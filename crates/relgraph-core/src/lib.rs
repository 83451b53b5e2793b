//! relgraph core - relation derivation and name collision detection.
//!
//! Given a validated [`Catalog`] of tables and foreign keys, this crate
//! derives many-to-one, one-to-many and many-to-many relations, names them
//! with a pluggable strategy, and reports names that collide on a table.

pub mod catalog;
pub mod collision;
pub mod config;
pub mod error;
pub mod naming;
pub mod pipeline;
pub mod relation;

pub use catalog::{
    Action, Catalog, CatalogBuilder, Column, ForeignKey, MatchType, PrimaryKey, QualifiedName,
    Table, UniqueConstraint,
};
pub use collision::{CollisionsByTable, RelationNameCollision, TableCollisions};
pub use config::{RelationConfig, RelationOptions};
pub use error::{Error, Result};
pub use naming::{BuiltinRelationNameFunction, CaseType, NameStrategy, RelationNameFunction};
pub use pipeline::{compute_relations, find_collisions};
pub use relation::{BridgeDetectionPolicy, ClassifiedEdge, Relation, RelationKind, RelationSet};
