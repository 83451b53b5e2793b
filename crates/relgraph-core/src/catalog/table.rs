//! Table definitions.

use super::column::Column;
use super::foreign_key::ForeignKey;
use super::types::QualifiedName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A table and the constraints declared on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Schema-qualified table name.
    pub name: QualifiedName,
    /// Columns in ordinal order.
    pub columns: Vec<Column>,
    /// Primary key, if any.
    pub primary_key: Option<PrimaryKey>,
    /// Unique constraints other than the primary key.
    pub unique_constraints: Vec<UniqueConstraint>,
    /// Foreign keys in declaration order.
    pub foreign_keys: Vec<ForeignKey>,
    /// Table comment.
    pub comment: Option<String>,
}

/// Primary key of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryKey {
    /// Constraint name.
    pub name: Option<String>,
    /// Key columns in order.
    pub columns: Vec<String>,
}

/// A unique constraint (single or composite).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueConstraint {
    /// Constraint name.
    pub name: String,
    /// Columns that are unique together.
    pub columns: Vec<String>,
}

impl Table {
    /// Create a new empty table.
    pub fn new(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: QualifiedName::new(schema, name),
            columns: Vec::new(),
            primary_key: None,
            unique_constraints: Vec::new(),
            foreign_keys: Vec::new(),
            comment: None,
        }
    }

    /// Add a column. Its position is assigned from the current column count.
    pub fn with_column(mut self, mut column: Column) -> Self {
        column.position = self.columns.len() + 1;
        self.columns.push(column);
        self
    }

    /// Add several NOT NULL columns by name.
    pub fn with_columns(self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        names
            .into_iter()
            .fold(self, |table, name| table.with_column(Column::new(name)))
    }

    /// Set the primary key.
    pub fn with_primary_key(mut self, columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.primary_key = Some(PrimaryKey {
            name: None,
            columns: columns.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Add a unique constraint.
    pub fn with_unique(
        mut self,
        name: impl Into<String>,
        columns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.unique_constraints.push(UniqueConstraint {
            name: name.into(),
            columns: columns.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Add a foreign key.
    pub fn with_foreign_key(mut self, foreign_key: ForeignKey) -> Self {
        self.foreign_keys.push(foreign_key);
        self
    }

    /// Set the table comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Full name in `schema.table` form.
    pub fn full_name(&self) -> String {
        self.name.full_name()
    }

    /// Get a column by name.
    pub fn get_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Check whether the columns exactly cover the primary key or a unique
    /// constraint, regardless of order.
    pub fn is_unique_key(&self, columns: &[String]) -> bool {
        let wanted: BTreeSet<&str> = columns.iter().map(String::as_str).collect();
        let same = |key: &[String]| {
            key.len() == wanted.len() && key.iter().all(|c| wanted.contains(c.as_str()))
        };

        self.primary_key.as_ref().is_some_and(|pk| same(&pk.columns))
            || self.unique_constraints.iter().any(|u| same(&u.columns))
    }
}
