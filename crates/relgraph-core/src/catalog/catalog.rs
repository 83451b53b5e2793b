//! Validated, read-only catalog snapshot.

use super::{ForeignKey, QualifiedName, Table};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use tracing::debug;

/// An immutable snapshot of tables and their foreign keys.
///
/// Tables iterate in discovery order, i.e. the order they were added to the
/// [`CatalogBuilder`]. Every foreign key of a built catalog is known to
/// reference an existing table through existing, uniquely keyed columns.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: IndexMap<QualifiedName, Table>,
}

/// Collects tables and validates them into a [`Catalog`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    tables: Vec<Table>,
}

impl CatalogBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table.
    pub fn with_table(mut self, table: Table) -> Self {
        self.tables.push(table);
        self
    }

    /// Add several tables.
    pub fn with_tables(mut self, tables: impl IntoIterator<Item = Table>) -> Self {
        self.tables.extend(tables);
        self
    }

    /// Validate the collected tables and freeze them into a catalog.
    pub fn build(self) -> Result<Catalog> {
        let mut tables = IndexMap::with_capacity(self.tables.len());
        for table in self.tables {
            if tables.contains_key(&table.name) {
                return Err(Error::DuplicateTable {
                    table: table.full_name(),
                });
            }
            tables.insert(table.name.clone(), table);
        }

        let catalog = Catalog { tables };
        for table in catalog.tables.values() {
            for fk in &table.foreign_keys {
                catalog.validate_foreign_key(table, fk)?;
            }
        }

        debug!(
            tables = catalog.table_count(),
            foreign_keys = catalog.foreign_key_count(),
            "catalog validated"
        );
        Ok(catalog)
    }
}

impl Catalog {
    /// Start building a catalog.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// Iterate over tables in discovery order.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.values()
    }

    /// Get a table by qualified name.
    pub fn table(&self, name: &QualifiedName) -> Option<&Table> {
        self.tables.get(name)
    }

    /// Get a table by schema and name.
    pub fn get_table(&self, schema: &str, name: &str) -> Option<&Table> {
        self.table(&QualifiedName::new(schema, name))
    }

    /// Discovery index of a table.
    pub fn table_index(&self, name: &QualifiedName) -> Option<usize> {
        self.tables.get_index_of(name)
    }

    /// The table a foreign key points at.
    ///
    /// # Panics
    ///
    /// Panics if the key does not belong to this catalog. Built catalogs
    /// guarantee every referenced table exists.
    pub fn referenced_table(&self, fk: &ForeignKey) -> &Table {
        self.table(&fk.referenced_table).unwrap_or_else(|| {
            panic!(
                "foreign key {} references {} which is not in the catalog",
                fk.label(),
                fk.referenced_table
            )
        })
    }

    /// Number of tables.
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Total number of foreign keys across all tables.
    pub fn foreign_key_count(&self) -> usize {
        self.tables.values().map(|t| t.foreign_keys.len()).sum()
    }

    fn validate_foreign_key(&self, table: &Table, fk: &ForeignKey) -> Result<()> {
        let label = fk.label();

        if fk.referencing_columns.is_empty() || fk.referenced_columns.is_empty() {
            return Err(Error::EmptyForeignKey {
                table: table.full_name(),
                foreign_key: label,
            });
        }

        if fk.referencing_columns.len() != fk.referenced_columns.len() {
            return Err(Error::ColumnCountMismatch {
                table: table.full_name(),
                foreign_key: label,
                referencing: fk.referencing_columns.len(),
                referenced: fk.referenced_columns.len(),
            });
        }

        let target = self
            .table(&fk.referenced_table)
            .ok_or_else(|| Error::UnknownTable {
                table: table.full_name(),
                foreign_key: label.clone(),
                referenced: fk.referenced_table.full_name(),
            })?;

        for column in &fk.referencing_columns {
            if table.get_column(column).is_none() {
                return Err(Error::UnknownColumn {
                    table: table.full_name(),
                    column: column.clone(),
                });
            }
        }
        for column in &fk.referenced_columns {
            if target.get_column(column).is_none() {
                return Err(Error::UnknownColumn {
                    table: target.full_name(),
                    column: column.clone(),
                });
            }
        }

        if !target.is_unique_key(&fk.referenced_columns) {
            return Err(Error::ReferencedColumnsNotUnique {
                table: table.full_name(),
                foreign_key: label,
                referenced: target.full_name(),
            });
        }

        Ok(())
    }
}
