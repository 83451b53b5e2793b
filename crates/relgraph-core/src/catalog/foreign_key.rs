//! Foreign key constraints and their referential metadata.

use super::comment::comment_data_from_comment;
use super::types::QualifiedName;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Action performed when the data in the referenced columns changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Action {
    /// Propagate the change to referencing rows.
    #[serde(rename = "CASCADE")]
    Cascade,
    /// Set referencing columns to NULL.
    #[serde(rename = "SET NULL")]
    SetNull,
    /// Set referencing columns to their defaults.
    #[serde(rename = "SET DEFAULT")]
    SetDefault,
    /// Reject the change immediately.
    #[serde(rename = "RESTRICT")]
    Restrict,
    /// Reject the change at the end of the statement.
    #[default]
    #[serde(rename = "NO ACTION")]
    NoAction,
}

impl Action {
    /// SQL spelling of the action.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Action::Cascade => "CASCADE",
            Action::SetNull => "SET NULL",
            Action::SetDefault => "SET DEFAULT",
            Action::Restrict => "RESTRICT",
            Action::NoAction => "NO ACTION",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// How referencing values are matched against the referenced columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MatchType {
    /// All referencing columns must be NULL or all must match.
    #[serde(rename = "FULL")]
    Full,
    /// Not implemented by most databases; kept for completeness.
    #[serde(rename = "PARTIAL")]
    Partial,
    /// Any NULL referencing column skips the check.
    #[default]
    #[serde(rename = "SIMPLE")]
    Simple,
}

impl MatchType {
    /// SQL spelling of the match type.
    pub fn as_sql(&self) -> &'static str {
        match self {
            MatchType::Full => "FULL",
            MatchType::Partial => "PARTIAL",
            MatchType::Simple => "SIMPLE",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// A foreign key declared on a table.
///
/// The referencing side is the table the key is declared on. Column pair `i`
/// of `referencing_columns` corresponds to `referenced_columns[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForeignKey {
    /// Constraint name, if the database reported one.
    pub name: Option<String>,
    /// Table whose key is referenced.
    pub referenced_table: QualifiedName,
    /// Columns on the declaring table.
    pub referencing_columns: Vec<String>,
    /// Columns on the referenced table.
    pub referenced_columns: Vec<String>,
    /// Action on update of the referenced key.
    pub on_update: Action,
    /// Action on delete of the referenced row.
    pub on_delete: Action,
    /// Match type.
    pub match_type: MatchType,
    /// Raw constraint comment.
    pub comment: Option<String>,
    /// Caller-defined payload forwarded to relations untouched.
    pub comment_data: Option<serde_json::Value>,
}

impl ForeignKey {
    /// Create a foreign key referencing `referenced_table`.
    pub fn new(
        referenced_table: QualifiedName,
        referencing_columns: impl IntoIterator<Item = impl Into<String>>,
        referenced_columns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: None,
            referenced_table,
            referencing_columns: referencing_columns.into_iter().map(Into::into).collect(),
            referenced_columns: referenced_columns.into_iter().map(Into::into).collect(),
            on_update: Action::default(),
            on_delete: Action::default(),
            match_type: MatchType::default(),
            comment: None,
            comment_data: None,
        }
    }

    /// Create a single-column foreign key.
    pub fn single(
        column: impl Into<String>,
        referenced_table: QualifiedName,
        referenced_column: impl Into<String>,
    ) -> Self {
        Self::new(
            referenced_table,
            [column.into()],
            [referenced_column.into()],
        )
    }

    /// Set the constraint name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the update action.
    pub fn with_on_update(mut self, action: Action) -> Self {
        self.on_update = action;
        self
    }

    /// Set the delete action.
    pub fn with_on_delete(mut self, action: Action) -> Self {
        self.on_delete = action;
        self
    }

    /// Set the match type.
    pub fn with_match_type(mut self, match_type: MatchType) -> Self {
        self.match_type = match_type;
        self
    }

    /// Attach a comment, extracting any embedded data payload.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Result<Self> {
        let comment = comment.into();
        self.comment_data = comment_data_from_comment(&comment)?;
        self.comment = Some(comment);
        Ok(self)
    }

    /// Attach a data payload directly.
    pub fn with_comment_data(mut self, data: serde_json::Value) -> Self {
        self.comment_data = Some(data);
        self
    }

    /// Label used in relation names and signatures: the constraint name, or
    /// the referencing column names joined by `_` when unnamed.
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => self.referencing_columns.join("_"),
        }
    }

    /// Number of column pairs.
    pub fn column_count(&self) -> usize {
        self.referencing_columns.len()
    }

    /// Iterate over `(referencing, referenced)` column pairs.
    pub fn column_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.referencing_columns
            .iter()
            .zip(self.referenced_columns.iter())
            .map(|(a, b)| (a.as_str(), b.as_str()))
    }
}
