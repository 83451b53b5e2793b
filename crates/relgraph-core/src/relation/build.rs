//! Materializes classified edges into directed relations.

use super::classify::ClassifiedEdge;
use super::relation::Relation;
use crate::catalog::Catalog;
use tracing::{debug, instrument};

/// Build directed relations from classified edges.
///
/// A foreign key edge yields its many-to-one relation immediately followed
/// by the one-to-many mirror. A bridge edge yields one many-to-many relation
/// per side, starting from the far side of its first key.
#[instrument(skip_all)]
pub fn build<'a>(catalog: &'a Catalog, edges: &[ClassifiedEdge<'a>]) -> Vec<Relation<'a>> {
    let mut relations = Vec::with_capacity(edges.len() * 2);

    for edge in edges {
        match *edge {
            ClassifiedEdge::ForeignKey { table, foreign_key } => {
                let target = catalog.referenced_table(foreign_key);
                relations.push(Relation::many_to_one(table, target, foreign_key));
                relations.push(Relation::one_to_many(target, table, foreign_key));
            }
            ClassifiedEdge::Bridge {
                join_table,
                first,
                second,
            } => {
                let a = catalog.referenced_table(first);
                let b = catalog.referenced_table(second);
                relations.push(Relation::many_to_many(a, b, join_table, first, second));
                relations.push(Relation::many_to_many(b, a, join_table, second, first));
            }
        }
    }

    debug!(
        edges = edges.len(),
        relations = relations.len(),
        "built relations"
    );
    relations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Action, ForeignKey, MatchType, QualifiedName, Table};
    use crate::relation::{classify, BridgeDetectionPolicy, RelationKind};
    use serde_json::json;

    fn public(name: &str) -> QualifiedName {
        QualifiedName::new("public", name)
    }

    fn shop() -> Catalog {
        let contact = Table::new("public", "contact")
            .with_columns(["id"])
            .with_primary_key(["id"]);
        let cart = Table::new("public", "cart")
            .with_columns(["id"])
            .with_primary_key(["id"]);
        let cart_contact = Table::new("public", "cart_contact")
            .with_columns(["cart_id", "contact_id"])
            .with_primary_key(["cart_id", "contact_id"])
            .with_foreign_key(
                ForeignKey::single("cart_id", public("cart"), "id")
                    .named("cart_contact_cart")
                    .with_on_delete(Action::Cascade),
            )
            .with_foreign_key(
                ForeignKey::single("contact_id", public("contact"), "id")
                    .named("cart_contact_contact"),
            );

        Catalog::builder()
            .with_tables([contact, cart, cart_contact])
            .build()
            .unwrap()
    }

    #[test]
    fn test_foreign_key_pairs() {
        let catalog = shop();
        let edges = classify(&catalog, BridgeDetectionPolicy::StrictJunction);
        let relations = build(&catalog, &edges);

        // Two key pairs plus the two m2m sides.
        assert_eq!(relations.len(), 6);

        let (m2o, o2m) = (&relations[0], &relations[1]);
        assert_eq!(m2o.kind, RelationKind::ManyToOne);
        assert_eq!(o2m.kind, RelationKind::OneToMany);
        assert_eq!(m2o.source_table.name, o2m.target_table.name);
        assert_eq!(m2o.target_table.name, o2m.source_table.name);
        assert_eq!(m2o.on_delete, Action::Cascade);
        assert_eq!(o2m.on_delete, Action::Cascade);
    }

    #[test]
    fn test_bridge_yields_both_sides() {
        let catalog = shop();
        let edges = classify(&catalog, BridgeDetectionPolicy::StrictJunction);
        let relations = build(&catalog, &edges);

        let m2m: Vec<_> = relations.iter().filter(|r| r.is_many_to_many()).collect();
        assert_eq!(m2m.len(), 2);

        assert_eq!(m2m[0].source_table.full_name(), "public.cart");
        assert_eq!(m2m[0].target_table.full_name(), "public.contact");
        assert_eq!(m2m[0].fk_label(), "cart_contact_cart");
        assert_eq!(m2m[1].source_table.full_name(), "public.contact");
        assert_eq!(m2m[1].target_table.full_name(), "public.cart");
        assert_eq!(m2m[1].fk_label(), "cart_contact_contact");
        assert_eq!(
            m2m[1].join_table.unwrap().full_name(),
            "public.cart_contact"
        );
    }

    #[test]
    fn test_bridge_sides_carry_their_own_key() {
        let cart_key = ForeignKey::single("cart_id", public("cart"), "id")
            .with_on_delete(Action::Cascade)
            .with_on_update(Action::Restrict)
            .with_match_type(MatchType::Full)
            .with_comment_data(json!({ "side": "cart" }));
        let contact_key = ForeignKey::single("contact_id", public("contact"), "id")
            .with_on_delete(Action::SetNull)
            .with_comment_data(json!({ "side": "contact" }));
        let cart_contact = Table::new("public", "cart_contact")
            .with_columns(["cart_id", "contact_id"])
            .with_primary_key(["cart_id", "contact_id"])
            .with_foreign_key(contact_key)
            .with_foreign_key(cart_key);
        let catalog = Catalog::builder()
            .with_tables([
                Table::new("public", "contact").with_columns(["id"]).with_primary_key(["id"]),
                Table::new("public", "cart").with_columns(["id"]).with_primary_key(["id"]),
                cart_contact,
            ])
            .build()
            .unwrap();

        let edges = classify(&catalog, BridgeDetectionPolicy::StrictJunction);
        let relations = build(&catalog, &edges);
        let m2m: Vec<_> = relations.iter().filter(|r| r.is_many_to_many()).collect();

        let from_cart = m2m[0];
        assert_eq!(from_cart.source_table.full_name(), "public.cart");
        assert_eq!(from_cart.fk_label(), "cart_id");
        assert_eq!(from_cart.target_foreign_key.unwrap().label(), "contact_id");
        assert_eq!(from_cart.on_delete, Action::Cascade);
        assert_eq!(from_cart.on_update, Action::Restrict);
        assert_eq!(from_cart.match_type, MatchType::Full);
        assert_eq!(from_cart.comment_data, Some(&json!({ "side": "cart" })));

        let from_contact = m2m[1];
        assert_eq!(from_contact.source_table.full_name(), "public.contact");
        assert_eq!(from_contact.fk_label(), "contact_id");
        assert_eq!(from_contact.target_foreign_key.unwrap().label(), "cart_id");
        assert_eq!(from_contact.on_delete, Action::SetNull);
        assert_eq!(from_contact.on_update, Action::NoAction);
        assert_eq!(from_contact.match_type, MatchType::Simple);
        assert_eq!(from_contact.comment_data, Some(&json!({ "side": "contact" })));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        let edges = classify(&catalog, BridgeDetectionPolicy::Heuristic);
        assert!(build(&catalog, &edges).is_empty());
    }
}
