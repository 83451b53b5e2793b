//! Relation naming strategies.

use super::inflection::{pluralize, singularize};
use crate::catalog::ForeignKey;
use crate::relation::{Relation, RelationKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Function generating a raw name for a relation.
///
/// Everything about the relation (tables, columns, foreign keys, comment
/// data) is reachable through the passed [`Relation`]. The result is only
/// case converted afterwards.
pub type RelationNameFunction = Arc<dyn Fn(&Relation<'_>) -> String + Send + Sync>;

/// Name of a built-in naming strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuiltinRelationNameFunction {
    /// Far-side table name only: `address`, `orders`, `carts`.
    #[default]
    Short,
    /// Includes the foreign key: `billing_address`, `orders_via_billing_address`.
    Descriptive,
}

impl BuiltinRelationNameFunction {
    /// Raw, not yet case converted, name for `relation`.
    pub fn name(&self, relation: &Relation<'_>) -> String {
        match self {
            BuiltinRelationNameFunction::Short => short_name(relation),
            BuiltinRelationNameFunction::Descriptive => descriptive_name(relation),
        }
    }
}

impl fmt::Display for BuiltinRelationNameFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuiltinRelationNameFunction::Short => f.write_str("short"),
            BuiltinRelationNameFunction::Descriptive => f.write_str("descriptive"),
        }
    }
}

/// A built-in strategy or a caller-supplied function.
#[derive(Clone)]
pub enum NameStrategy {
    /// One of the built-in strategies.
    Builtin(BuiltinRelationNameFunction),
    /// A custom function.
    Custom(RelationNameFunction),
}

impl NameStrategy {
    /// Wrap a custom naming function.
    pub fn custom(f: impl Fn(&Relation<'_>) -> String + Send + Sync + 'static) -> Self {
        NameStrategy::Custom(Arc::new(f))
    }

    /// Resolve the strategy into a single callable.
    pub(crate) fn name_fn(&self) -> Box<dyn Fn(&Relation<'_>) -> String + '_> {
        match self {
            NameStrategy::Builtin(builtin) => {
                let builtin = *builtin;
                Box::new(move |relation: &Relation<'_>| builtin.name(relation))
            }
            NameStrategy::Custom(f) => Box::new(move |relation: &Relation<'_>| f(relation)),
        }
    }
}

impl Default for NameStrategy {
    fn default() -> Self {
        NameStrategy::Builtin(BuiltinRelationNameFunction::default())
    }
}

impl From<BuiltinRelationNameFunction> for NameStrategy {
    fn from(builtin: BuiltinRelationNameFunction) -> Self {
        NameStrategy::Builtin(builtin)
    }
}

impl fmt::Debug for NameStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameStrategy::Builtin(builtin) => f.debug_tuple("Builtin").field(builtin).finish(),
            NameStrategy::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

fn short_name(relation: &Relation<'_>) -> String {
    match relation.kind {
        RelationKind::ManyToOne if relation.is_self_referencing() => {
            strip_key_suffix(&relation.fk_label())
        }
        RelationKind::ManyToOne => singularize(&relation.target_table.name.name),
        RelationKind::OneToMany | RelationKind::ManyToMany => {
            pluralize(&relation.target_table.name.name)
        }
    }
}

fn descriptive_name(relation: &Relation<'_>) -> String {
    let far = &relation.target_table.name.name;
    let label = key_name(relation.foreign_key);

    match (relation.kind, relation.join_table, relation.target_foreign_key) {
        (RelationKind::ManyToMany, Some(_), Some(target_fk)) if relation.is_self_referencing() => {
            format!("{}_via_{}", pluralize(far), key_name(target_fk))
        }
        (RelationKind::ManyToMany, Some(join), _) => {
            format!("{}_via_{}", pluralize(far), join.name.name)
        }
        (RelationKind::OneToMany, ..) => format!("{}_via_{label}", pluralize(far)),
        _ => label,
    }
}

/// Stripped key label; a bare `id` label names the referenced table instead.
fn key_name(foreign_key: &ForeignKey) -> String {
    let label = strip_key_suffix(&foreign_key.label());
    if label.eq_ignore_ascii_case("id") {
        singularize(&foreign_key.referenced_table.name)
    } else {
        label
    }
}

/// Drop a trailing key marker (`_fkey`, `_fk`, `_id`, `Id`) from a label.
pub(crate) fn strip_key_suffix(label: &str) -> String {
    let mut stem = label;
    for suffix in ["_fkey", "_fk"] {
        if let Some(rest) = strip_suffix_ignore_case(stem, suffix) {
            stem = rest;
            break;
        }
    }
    if let Some(rest) = strip_suffix_ignore_case(stem, "_id") {
        stem = rest;
    } else if let Some(rest) = stem.strip_suffix("Id").or_else(|| stem.strip_suffix("ID")) {
        if rest.ends_with(|c: char| c.is_ascii_lowercase()) {
            stem = rest;
        }
    }
    stem.to_string()
}

fn strip_suffix_ignore_case<'s>(s: &'s str, suffix: &str) -> Option<&'s str> {
    let split = s.len().checked_sub(suffix.len())?;
    let (rest, tail) = (s.get(..split)?, s.get(split..)?);
    (!rest.is_empty() && tail.eq_ignore_ascii_case(suffix)).then_some(rest)
}
