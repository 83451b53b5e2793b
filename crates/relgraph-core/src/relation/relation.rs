//! Relations derived from foreign keys.

use crate::catalog::{Action, ForeignKey, MatchType, Table};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a relation, seen from its source table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationKind {
    /// Source rows point at one target row (the foreign key is on the source).
    #[serde(rename = "m2o")]
    ManyToOne,
    /// Source rows are pointed at by many target rows.
    #[serde(rename = "o2m")]
    OneToMany,
    /// Source and target are linked through a join table.
    #[serde(rename = "m2m")]
    ManyToMany,
}

impl RelationKind {
    /// Short tag used in collision reports.
    pub fn tag(&self) -> &'static str {
        match self {
            RelationKind::ManyToOne => "m2o",
            RelationKind::OneToMany => "o2m",
            RelationKind::ManyToMany => "m2m",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A named relation between two tables.
///
/// Relations borrow the catalog they were built from. The only field that
/// changes after construction is `name`, filled by [`crate::naming::generate`].
#[derive(Debug, Clone, PartialEq)]
pub struct Relation<'a> {
    /// Relation kind.
    pub kind: RelationKind,
    /// Table that owns the accessor.
    pub source_table: &'a Table,
    /// Table on the far side.
    pub target_table: &'a Table,
    /// Governing foreign key. Declared on the source for m2o, on the target
    /// for o2m, and on the join table (pointing at the source) for m2m.
    pub foreign_key: &'a ForeignKey,
    /// Join table, for m2m only.
    pub join_table: Option<&'a Table>,
    /// Join table key pointing at the target, for m2m only.
    pub target_foreign_key: Option<&'a ForeignKey>,
    /// Update action of the governing key.
    pub on_update: Action,
    /// Delete action of the governing key.
    pub on_delete: Action,
    /// Match type of the governing key.
    pub match_type: MatchType,
    /// Payload carried by the governing key's comment.
    pub comment_data: Option<&'a serde_json::Value>,
    /// Generated name; empty until named.
    pub name: String,
}

const ARROW_TAIL: &str = "―――";
const ARROW_HEAD_OUT: &str = "――⥷";
const ARROW_HEAD_IN: &str = "⥶――";

impl<'a> Relation<'a> {
    fn from_key(
        kind: RelationKind,
        source_table: &'a Table,
        target_table: &'a Table,
        foreign_key: &'a ForeignKey,
    ) -> Self {
        Self {
            kind,
            source_table,
            target_table,
            foreign_key,
            join_table: None,
            target_foreign_key: None,
            on_update: foreign_key.on_update,
            on_delete: foreign_key.on_delete,
            match_type: foreign_key.match_type,
            comment_data: foreign_key.comment_data.as_ref(),
            name: String::new(),
        }
    }

    /// Create a many-to-one relation from the table declaring `foreign_key`.
    pub fn many_to_one(table: &'a Table, target: &'a Table, foreign_key: &'a ForeignKey) -> Self {
        Self::from_key(RelationKind::ManyToOne, table, target, foreign_key)
    }

    /// Create the one-to-many mirror: from the referenced table back to the
    /// table declaring `foreign_key`.
    pub fn one_to_many(referenced: &'a Table, table: &'a Table, foreign_key: &'a ForeignKey) -> Self {
        Self::from_key(RelationKind::OneToMany, referenced, table, foreign_key)
    }

    /// Create a many-to-many relation from `source` to `target` through
    /// `join_table`, where `foreign_key` points at the source and
    /// `target_foreign_key` at the target.
    pub fn many_to_many(
        source: &'a Table,
        target: &'a Table,
        join_table: &'a Table,
        foreign_key: &'a ForeignKey,
        target_foreign_key: &'a ForeignKey,
    ) -> Self {
        Self {
            join_table: Some(join_table),
            target_foreign_key: Some(target_foreign_key),
            ..Self::from_key(RelationKind::ManyToMany, source, target, foreign_key)
        }
    }

    /// Check if this is a many-to-many relation.
    pub fn is_many_to_many(&self) -> bool {
        self.kind == RelationKind::ManyToMany
    }

    /// Check if source and target are the same table.
    pub fn is_self_referencing(&self) -> bool {
        self.source_table.name == self.target_table.name
    }

    /// The table the governing foreign key is declared on.
    ///
    /// Panics for a many-to-many relation built without a join table.
    pub fn referencing_table(&self) -> &'a Table {
        match self.kind {
            RelationKind::ManyToOne => self.source_table,
            RelationKind::OneToMany => self.target_table,
            RelationKind::ManyToMany => self
                .join_table
                .expect("many-to-many relation without join table"),
        }
    }

    /// Label of the governing foreign key.
    pub fn fk_label(&self) -> String {
        self.foreign_key.label()
    }

    /// Human-readable, direction-aware description used in collision reports.
    pub fn signature(&self) -> String {
        let source = self.source_table.full_name();
        let target = self.target_table.full_name();
        let label = self.fk_label();

        match (self.join_table, self.target_foreign_key) {
            (Some(join), Some(target_fk)) => format!(
                "[{source}] {ARROW_HEAD_IN} {label} {ARROW_TAIL}[{}]{ARROW_TAIL} {} {ARROW_HEAD_OUT} [{target}]",
                join.full_name(),
                target_fk.label(),
            ),
            _ => match self.kind {
                RelationKind::ManyToOne => {
                    format!("[{source}] {ARROW_HEAD_IN} {label} {ARROW_TAIL}[{target}]")
                }
                _ => format!("[{source}]{ARROW_TAIL} {label} {ARROW_HEAD_OUT} [{target}]"),
            },
        }
    }
}

impl fmt::Display for Relation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            f.write_str(&self.signature())
        } else {
            write!(f, "{} ({})", self.name, self.signature())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::QualifiedName;

    fn tables() -> (Table, Table, Table) {
        let contact = Table::new("public", "contact").with_columns(["id"]);
        let cart = Table::new("public", "cart").with_columns(["id"]);
        let join = Table::new("public", "cart_contact").with_columns(["cart_id", "contact_id"]);
        (contact, cart, join)
    }

    #[test]
    fn test_many_to_one_copies_key_metadata() {
        let (contact, cart, _) = tables();
        let fk = ForeignKey::single("cart_id", QualifiedName::new("public", "cart"), "id")
            .with_on_delete(Action::Cascade)
            .with_match_type(MatchType::Full)
            .with_comment_data(serde_json::json!({ "hidden": true }));

        let rel = Relation::many_to_one(&contact, &cart, &fk);

        assert_eq!(rel.kind, RelationKind::ManyToOne);
        assert_eq!(rel.on_delete, Action::Cascade);
        assert_eq!(rel.on_update, Action::NoAction);
        assert_eq!(rel.match_type, MatchType::Full);
        assert_eq!(rel.comment_data.unwrap()["hidden"], true);
        assert!(rel.name.is_empty());
        assert_eq!(rel.referencing_table().full_name(), "public.contact");
    }

    #[test]
    fn test_one_to_many_mirror() {
        let (contact, cart, _) = tables();
        let fk = ForeignKey::single("cart_id", QualifiedName::new("public", "cart"), "id");

        let rel = Relation::one_to_many(&cart, &contact, &fk);

        assert_eq!(rel.source_table.full_name(), "public.cart");
        assert_eq!(rel.target_table.full_name(), "public.contact");
        assert_eq!(rel.referencing_table().full_name(), "public.contact");
        assert!(!rel.is_self_referencing());
    }

    #[test]
    fn test_signatures() {
        let (contact, cart, join) = tables();
        let to_cart = ForeignKey::single("cart_id", QualifiedName::new("public", "cart"), "id");
        let to_contact =
            ForeignKey::single("contact_id", QualifiedName::new("public", "contact"), "id");

        let o2m = Relation::one_to_many(&cart, &join, &to_cart);
        assert_eq!(
            o2m.signature(),
            "[public.cart]――― cart_id ――⥷ [public.cart_contact]"
        );

        let m2o = Relation::many_to_one(&join, &cart, &to_cart);
        assert_eq!(
            m2o.signature(),
            "[public.cart_contact] ⥶―― cart_id ―――[public.cart]"
        );

        let m2m = Relation::many_to_many(&contact, &cart, &join, &to_contact, &to_cart);
        assert!(m2m.is_many_to_many());
        assert_eq!(
            m2m.signature(),
            "[public.contact] ⥶―― contact_id ―――[public.cart_contact]――― cart_id ――⥷ [public.cart]"
        );
        assert_eq!(m2m.referencing_table().full_name(), "public.cart_contact");
    }

    #[test]
    fn test_kind_serializes_as_tag() {
        assert_eq!(serde_json::to_string(&RelationKind::OneToMany).unwrap(), "\"o2m\"");
        assert_eq!(RelationKind::ManyToMany.to_string(), "m2m");
    }
}
