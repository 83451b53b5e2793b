//! Column definitions for tables.

use serde::{Deserialize, Serialize};

/// A column within a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// 1-based ordinal position, assigned when added to a table.
    pub position: usize,
    /// Whether the column accepts NULL.
    pub nullable: bool,
}

impl Column {
    /// Create a new NOT NULL column.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: 0,
            nullable: false,
        }
    }

    /// Create a nullable column.
    pub fn nullable(name: impl Into<String>) -> Self {
        Self {
            nullable: true,
            ..Self::new(name)
        }
    }
}
