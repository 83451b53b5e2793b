//! Core type definitions for the catalog.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Schema-qualified name of a table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QualifiedName {
    /// Schema the table lives in.
    pub schema: String,
    /// Table name within the schema.
    pub name: String,
}

impl QualifiedName {
    /// Create a qualified name.
    pub fn new(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            name: name.into(),
        }
    }

    /// Full name in `schema.table` form.
    pub fn full_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.schema, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let name = QualifiedName::new("public", "contact");
        assert_eq!(name.full_name(), "public.contact");
    }

    #[test]
    fn test_ordering_by_schema_then_name() {
        let mut names = vec![
            QualifiedName::new("public", "cart"),
            QualifiedName::new("other", "zone"),
            QualifiedName::new("public", "address"),
        ];
        names.sort();

        assert_eq!(names[0].full_name(), "other.zone");
        assert_eq!(names[1].full_name(), "public.address");
        assert_eq!(names[2].full_name(), "public.cart");
    }
}
