//! Relation name generation.
//!
//! A [`NameStrategy`] produces a raw name per relation, which is then
//! converted with [`to_case`]. Generation is pure: the same relations, in the
//! same order, with the same strategy and case always get the same names.

mod case;
mod inflection;
mod strategy;

pub use case::{split_words, to_case, CaseType};
pub use inflection::{pluralize, singularize};
pub use strategy::{BuiltinRelationNameFunction, NameStrategy, RelationNameFunction};

use crate::error::{Error, Result};
use crate::relation::Relation;
use tracing::{debug, instrument, trace};

/// Name every relation in place.
///
/// Stops at the first relation the strategy cannot name; on error no
/// relation is renamed.
#[instrument(skip_all, fields(strategy = ?strategy, case = %case_type))]
pub fn generate(
    relations: &mut [Relation<'_>],
    strategy: &NameStrategy,
    case_type: CaseType,
) -> Result<()> {
    let name_fn = strategy.name_fn();

    let names = relations
        .iter()
        .map(|relation| finish_name(relation, name_fn(relation), case_type))
        .collect::<Result<Vec<_>>>()?;

    for (relation, name) in relations.iter_mut().zip(names) {
        relation.name = name;
    }

    debug!(relations = relations.len(), "generated relation names");
    Ok(())
}

/// Generate the name of a single relation without modifying it.
pub fn generate_name(
    relation: &Relation<'_>,
    strategy: &NameStrategy,
    case_type: CaseType,
) -> Result<String> {
    let raw = strategy.name_fn()(relation);
    finish_name(relation, raw, case_type)
}

fn finish_name(relation: &Relation<'_>, raw: String, case_type: CaseType) -> Result<String> {
    if raw.trim().is_empty() {
        return Err(Error::EmptyRelationName {
            relation: relation.signature(),
        });
    }

    let name = to_case(&raw, case_type)?;
    trace!(relation = %relation.signature(), raw = %raw, name = %name, "named relation");
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, ForeignKey, QualifiedName, Table};
    use crate::relation::{build, classify, BridgeDetectionPolicy, RelationKind};

    fn catalog() -> Catalog {
        let address = Table::new("public", "address")
            .with_columns(["id"])
            .with_primary_key(["id"]);
        let order = Table::new("public", "order")
            .with_columns(["id", "billing_address_id"])
            .with_primary_key(["id"])
            .with_foreign_key(ForeignKey::single(
                "billing_address_id",
                QualifiedName::new("public", "address"),
                "id",
            ));
        Catalog::builder()
            .with_tables([address, order])
            .build()
            .unwrap()
    }

    #[test]
    fn test_generate_in_place() {
        let catalog = catalog();
        let edges = classify(&catalog, BridgeDetectionPolicy::default());
        let mut relations = build(&catalog, &edges);

        generate(
            &mut relations,
            &BuiltinRelationNameFunction::Descriptive.into(),
            CaseType::CamelCase,
        )
        .unwrap();
        assert_eq!(relations[0].name, "billingAddress");
        assert_eq!(relations[1].name, "ordersViaBillingAddress");

        generate(
            &mut relations,
            &NameStrategy::default(),
            CaseType::SnakeCase,
        )
        .unwrap();
        assert_eq!(relations[0].name, "address");
        assert_eq!(relations[1].name, "orders");
    }

    #[test]
    fn test_empty_name_is_an_error() {
        let catalog = catalog();
        let edges = classify(&catalog, BridgeDetectionPolicy::default());
        let mut relations = build(&catalog, &edges);

        let err = generate(
            &mut relations,
            &NameStrategy::custom(|_| String::new()),
            CaseType::CamelCase,
        )
        .unwrap_err();
        assert!(matches!(err, Error::EmptyRelationName { relation } if relation.contains("public.order")));
    }

    #[test]
    fn test_failed_generate_keeps_previous_names() {
        let catalog = catalog();
        let edges = classify(&catalog, BridgeDetectionPolicy::default());
        let mut relations = build(&catalog, &edges);
        generate(&mut relations, &NameStrategy::default(), CaseType::CamelCase).unwrap();

        let strategy = NameStrategy::custom(|r| match r.kind {
            RelationKind::ManyToOne => format!("new_{}", r.fk_label()),
            _ => String::new(),
        });
        assert!(generate(&mut relations, &strategy, CaseType::CamelCase).is_err());

        let names: Vec<_> = relations.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["address", "orders"]);
    }

    #[test]
    fn test_unsafe_custom_name_is_an_error() {
        let catalog = catalog();
        let edges = classify(&catalog, BridgeDetectionPolicy::default());
        let relations = build(&catalog, &edges);

        let strategy = NameStrategy::custom(|r| format!("{}.{}", r.source_table.name, r.fk_label()));
        let err = generate_name(&relations[0], &strategy, CaseType::SnakeCase).unwrap_err();
        assert!(matches!(err, Error::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_generate_name_does_not_mutate() {
        let catalog = catalog();
        let edges = classify(&catalog, BridgeDetectionPolicy::default());
        let relations = build(&catalog, &edges);

        let name = generate_name(&relations[1], &NameStrategy::default(), CaseType::CamelCase).unwrap();
        assert_eq!(name, "orders");
        assert!(relations[1].name.is_empty());
    }
}
