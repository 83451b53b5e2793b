//! End-to-end relation derivation.
//!
//! [`compute_relations`] chains classify, build and generate;
//! [`find_collisions`] runs detection. Callers fixing collisions can keep the
//! relations and re-run [`crate::naming::generate`] with a refined strategy
//! instead of starting over.

use crate::catalog::Catalog;
use crate::collision::{detect, CollisionsByTable};
use crate::config::RelationOptions;
use crate::error::Result;
use crate::naming::generate;
use crate::relation::{build, classify, Relation};
use tracing::{debug, instrument};

/// Derive and name every relation of the catalog.
#[instrument(skip_all, fields(tables = catalog.table_count()))]
pub fn compute_relations<'a>(
    catalog: &'a Catalog,
    options: &RelationOptions,
) -> Result<Vec<Relation<'a>>> {
    let edges = classify(catalog, options.bridge_detection);
    let mut relations = build(catalog, &edges);
    generate(&mut relations, &options.name_strategy, options.case_type)?;

    debug!(relations = relations.len(), "computed relations");
    Ok(relations)
}

/// Report relations on the same table and kind that share a name.
pub fn find_collisions(relations: &[Relation<'_>]) -> CollisionsByTable {
    detect(relations)
}
