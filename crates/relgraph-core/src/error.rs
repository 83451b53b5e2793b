//! Core error types.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while validating a catalog or naming relations.
///
/// Name collisions are not errors; see [`crate::collision`].
#[derive(Debug, Error)]
pub enum Error {
    /// Two tables share a qualified name.
    #[error("duplicate table: {table}")]
    DuplicateTable {
        /// Qualified table name.
        table: String,
    },

    /// A foreign key references a table missing from the catalog.
    #[error("foreign key {foreign_key} on {table} references unknown table {referenced}")]
    UnknownTable {
        /// Table declaring the foreign key.
        table: String,
        /// Foreign key label.
        foreign_key: String,
        /// Qualified name of the missing table.
        referenced: String,
    },

    /// A constraint names a column its table does not have.
    #[error("unknown column {column} on {table}")]
    UnknownColumn {
        /// Qualified table name.
        table: String,
        /// Column name.
        column: String,
    },

    /// A foreign key without any column pairs.
    #[error("foreign key {foreign_key} on {table} has no columns")]
    EmptyForeignKey {
        /// Table declaring the foreign key.
        table: String,
        /// Foreign key label.
        foreign_key: String,
    },

    /// Referencing and referenced column lists differ in length.
    #[error(
        "foreign key {foreign_key} on {table} has {referencing} referencing but {referenced} referenced columns"
    )]
    ColumnCountMismatch {
        /// Table declaring the foreign key.
        table: String,
        /// Foreign key label.
        foreign_key: String,
        /// Number of referencing columns.
        referencing: usize,
        /// Number of referenced columns.
        referenced: usize,
    },

    /// Referenced columns are neither the primary key nor a unique constraint.
    #[error("foreign key {foreign_key} on {table} references non-unique columns of {referenced}")]
    ReferencedColumnsNotUnique {
        /// Table declaring the foreign key.
        table: String,
        /// Foreign key label.
        foreign_key: String,
        /// Qualified name of the referenced table.
        referenced: String,
    },

    /// A naming strategy produced an empty name.
    #[error("relation name function returned an empty name for {relation}")]
    EmptyRelationName {
        /// Signature of the relation being named.
        relation: String,
    },

    /// A name cannot be converted into an identifier.
    #[error("invalid identifier {name:?}: {reason}")]
    InvalidIdentifier {
        /// The offending name.
        name: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A comment carries a malformed data payload.
    #[error("invalid comment data: {0}")]
    CommentData(String),

    /// Deserialization error.
    #[error("deserialization error: {0}")]
    Deserialization(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
