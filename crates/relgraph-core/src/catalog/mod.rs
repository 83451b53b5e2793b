//! Catalog model for relation derivation.
//!
//! The catalog holds tables, columns, and foreign keys as supplied by an
//! external loader. It is validated once on construction and read-only after.

mod catalog;
mod column;
mod comment;
mod foreign_key;
mod table;
mod types;

pub use catalog::{Catalog, CatalogBuilder};
pub use column::Column;
pub use comment::{comment_data_from_comment, comment_text};
pub use foreign_key::{Action, ForeignKey, MatchType};
pub use table::{PrimaryKey, Table, UniqueConstraint};
pub use types::QualifiedName;
