//! Per-table lookups over a computed relation list.

use super::relation::{Relation, RelationKind};
use crate::catalog::QualifiedName;
use crate::collision::{detect, CollisionsByTable};

/// Read-only view over computed relations.
#[derive(Debug, Clone, Default)]
pub struct RelationSet<'a> {
    relations: Vec<Relation<'a>>,
}

impl<'a> RelationSet<'a> {
    /// Wrap computed relations.
    pub fn new(relations: Vec<Relation<'a>>) -> Self {
        Self { relations }
    }

    /// All relations in pipeline order.
    pub fn as_slice(&self) -> &[Relation<'a>] {
        &self.relations
    }

    /// Unwrap into the underlying list.
    pub fn into_inner(self) -> Vec<Relation<'a>> {
        self.relations
    }

    /// Number of relations.
    pub fn len(&self) -> usize {
        self.relations.len()
    }

    /// Check if there are no relations.
    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }

    /// Relations whose accessor lives on `table`.
    pub fn for_table(&self, table: &QualifiedName) -> impl Iterator<Item = &Relation<'a>> + '_ {
        let table = table.clone();
        self.relations
            .iter()
            .filter(move |r| r.source_table.name == table)
    }

    /// Relations of one kind on `table`.
    pub fn of_kind(
        &self,
        table: &QualifiedName,
        kind: RelationKind,
    ) -> impl Iterator<Item = &Relation<'a>> + '_ {
        self.for_table(table).filter(move |r| r.kind == kind)
    }

    /// Look up a relation by its generated name. With colliding names the
    /// first one wins.
    pub fn get(&self, table: &QualifiedName, kind: RelationKind, name: &str) -> Option<&Relation<'a>> {
        self.of_kind(table, kind).find(|r| r.name == name)
    }

    /// Name collisions among these relations.
    pub fn collisions(&self) -> CollisionsByTable {
        detect(&self.relations)
    }
}

impl<'a> From<Vec<Relation<'a>>> for RelationSet<'a> {
    fn from(relations: Vec<Relation<'a>>) -> Self {
        Self::new(relations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, ForeignKey, Table};
    use crate::relation::{build, classify, BridgeDetectionPolicy};

    fn employees() -> Catalog {
        let employee = Table::new("hr", "employee")
            .with_columns(["id", "manager_id"])
            .with_primary_key(["id"])
            .with_foreign_key(ForeignKey::single(
                "manager_id",
                QualifiedName::new("hr", "employee"),
                "id",
            ));
        Catalog::builder().with_table(employee).build().unwrap()
    }

    #[test]
    fn test_lookups() {
        let catalog = employees();
        let edges = classify(&catalog, BridgeDetectionPolicy::default());
        let mut relations = build(&catalog, &edges);
        relations[0].name = "manager".to_string();
        relations[1].name = "employees".to_string();

        let set = RelationSet::from(relations);
        let employee = QualifiedName::new("hr", "employee");

        assert_eq!(set.len(), 2);
        assert_eq!(set.for_table(&employee).count(), 2);
        assert_eq!(set.of_kind(&employee, RelationKind::OneToMany).count(), 1);
        assert!(set.get(&employee, RelationKind::ManyToOne, "manager").is_some());
        assert!(set.get(&employee, RelationKind::OneToMany, "manager").is_none());
        assert!(set.collisions().is_empty());
    }
}
