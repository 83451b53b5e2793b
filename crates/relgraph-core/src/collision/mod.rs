//! Relation name collision detection.
//!
//! Relations are grouped by the table owning the accessor and by kind; any
//! name claimed by two or more relations in a group is a collision. The
//! report is sparse: a table without collisions does not appear at all.

use crate::error::Result;
use crate::relation::{Relation, RelationKind};
use indexmap::IndexMap;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// One colliding name and the signatures of every relation that claims it.
///
/// Serializes as a single-entry map: `{ "name": ["signature", ..] }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationNameCollision {
    /// The colliding name.
    pub name: String,
    /// Relation signatures, in relation order.
    pub relations: Vec<String>,
}

impl Serialize for RelationNameCollision {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.relations)?;
        map.end()
    }
}

/// Collisions on a single table, by relation kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableCollisions {
    /// Many-to-one collisions.
    pub m2o: Vec<RelationNameCollision>,
    /// One-to-many collisions.
    pub o2m: Vec<RelationNameCollision>,
    /// Many-to-many collisions.
    pub m2m: Vec<RelationNameCollision>,
}

impl TableCollisions {
    /// Collisions of one kind.
    pub fn of_kind(&self, kind: RelationKind) -> &[RelationNameCollision] {
        match kind {
            RelationKind::ManyToOne => &self.m2o,
            RelationKind::OneToMany => &self.o2m,
            RelationKind::ManyToMany => &self.m2m,
        }
    }

    fn of_kind_mut(&mut self, kind: RelationKind) -> &mut Vec<RelationNameCollision> {
        match kind {
            RelationKind::ManyToOne => &mut self.m2o,
            RelationKind::OneToMany => &mut self.o2m,
            RelationKind::ManyToMany => &mut self.m2m,
        }
    }

    /// Number of colliding names on this table.
    pub fn len(&self) -> usize {
        self.m2o.len() + self.o2m.len() + self.m2m.len()
    }

    /// Check if there are no collisions on this table.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Collisions keyed by fully qualified table name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CollisionsByTable {
    tables: IndexMap<String, TableCollisions>,
}

impl CollisionsByTable {
    /// Check if no collisions were found.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Number of colliding names across all tables and kinds.
    pub fn total_count(&self) -> usize {
        self.tables.values().map(TableCollisions::len).sum()
    }

    /// Collisions on a table, by full name. `None` means no collisions.
    pub fn get(&self, table: &str) -> Option<&TableCollisions> {
        self.tables.get(table)
    }

    /// Iterate over tables with collisions, in detection order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TableCollisions)> {
        self.tables.iter().map(|(name, c)| (name.as_str(), c))
    }

    /// Render the report as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn insert(&mut self, table: &str, kind: RelationKind, collision: RelationNameCollision) {
        // Only called with a collision in hand, so no table is ever empty.
        self.tables
            .entry(table.to_string())
            .or_default()
            .of_kind_mut(kind)
            .push(collision);
    }
}

/// Find every name claimed by more than one relation on the same table and
/// kind. Relations that have not been named yet are ignored.
#[instrument(skip_all)]
pub fn detect(relations: &[Relation<'_>]) -> CollisionsByTable {
    let mut groups: IndexMap<(String, RelationKind), IndexMap<&str, Vec<&Relation<'_>>>> =
        IndexMap::new();

    for relation in relations.iter().filter(|r| !r.name.is_empty()) {
        groups
            .entry((relation.source_table.full_name(), relation.kind))
            .or_default()
            .entry(relation.name.as_str())
            .or_default()
            .push(relation);
    }

    let mut report = CollisionsByTable::default();
    for ((table, kind), buckets) in groups {
        for (name, members) in buckets {
            if members.len() < 2 {
                continue;
            }

            warn!(
                table = %table,
                kind = %kind,
                name,
                relations = members.len(),
                "relation name collision"
            );
            report.insert(
                &table,
                kind,
                RelationNameCollision {
                    name: name.to_string(),
                    relations: members.iter().map(|r| r.signature()).collect(),
                },
            );
        }
    }

    debug!(
        relations = relations.len(),
        tables = report.tables.len(),
        collisions = report.total_count(),
        "detected relation name collisions"
    );
    report
}
