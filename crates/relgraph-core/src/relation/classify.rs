//! Foreign key classification and join table detection.

use crate::catalog::{Catalog, ForeignKey, Table};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use tracing::{debug, instrument, trace};

/// How join tables for many-to-many relations are recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BridgeDetectionPolicy {
    /// Any table with exactly two foreign keys to distinct tables.
    Heuristic,
    /// Tables with exactly two foreign keys whose referencing columns make up
    /// the whole primary key.
    #[default]
    StrictJunction,
}

impl fmt::Display for BridgeDetectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeDetectionPolicy::Heuristic => f.write_str("heuristic"),
            BridgeDetectionPolicy::StrictJunction => f.write_str("strict-junction"),
        }
    }
}

/// An edge of the relation graph, before it is split into directed relations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClassifiedEdge<'a> {
    /// A foreign key; yields a many-to-one and its one-to-many mirror.
    ForeignKey {
        /// Table declaring the key.
        table: &'a Table,
        /// The key itself.
        foreign_key: &'a ForeignKey,
    },
    /// A join table linking the targets of two foreign keys.
    Bridge {
        /// The join table.
        join_table: &'a Table,
        /// Key whose far side sorts first.
        first: &'a ForeignKey,
        /// The other key.
        second: &'a ForeignKey,
    },
}

/// Classify every foreign key of the catalog.
///
/// Edges come out in table discovery order; within a table, foreign keys in
/// declaration order followed by the table's bridge edge, if any.
#[instrument(skip_all, fields(policy = %policy))]
pub fn classify(catalog: &Catalog, policy: BridgeDetectionPolicy) -> Vec<ClassifiedEdge<'_>> {
    let mut edges = Vec::with_capacity(catalog.foreign_key_count());

    for table in catalog.tables() {
        for foreign_key in &table.foreign_keys {
            trace!(
                table = %table.name,
                foreign_key = %foreign_key.label(),
                referenced = %foreign_key.referenced_table,
                "foreign key edge"
            );
            edges.push(ClassifiedEdge::ForeignKey { table, foreign_key });
        }

        if let Some((first, second)) = bridge_pair(table, policy) {
            trace!(join_table = %table.name, "bridge edge");
            edges.push(ClassifiedEdge::Bridge {
                join_table: table,
                first,
                second,
            });
        }
    }

    debug!(
        tables = catalog.table_count(),
        edges = edges.len(),
        "classified foreign keys"
    );
    edges
}

/// The two keys of a join table, ordered by their far side.
fn bridge_pair(table: &Table, policy: BridgeDetectionPolicy) -> Option<(&ForeignKey, &ForeignKey)> {
    let [a, b] = table.foreign_keys.as_slice() else {
        return None;
    };

    let qualifies = match policy {
        BridgeDetectionPolicy::Heuristic => a.referenced_table != b.referenced_table,
        BridgeDetectionPolicy::StrictJunction => is_junction(table, a, b),
    };
    if !qualifies {
        return None;
    }

    if b.referenced_table < a.referenced_table {
        Some((b, a))
    } else {
        Some((a, b))
    }
}

/// Primary key columns are exactly the referencing columns of both keys.
fn is_junction(table: &Table, a: &ForeignKey, b: &ForeignKey) -> bool {
    let Some(pk) = &table.primary_key else {
        return false;
    };

    let pk_columns: BTreeSet<&str> = pk.columns.iter().map(String::as_str).collect();
    let fk_columns: BTreeSet<&str> = a
        .referencing_columns
        .iter()
        .chain(&b.referencing_columns)
        .map(String::as_str)
        .collect();

    pk_columns == fk_columns
}
