use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::{borrow::Borrow, fmt};

/// Opaque table identifier assigned by the schema designer.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableId(pub String);

/// Opaque column identifier assigned by the schema designer.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(pub String);

/// Bidirectional lookup between designer identifiers and names.
///
/// Both maps are filled in while tables and columns are assembled. Reverse
/// lookups (name to id) scan linearly; schemas are expected to hold tens to
/// low hundreds of tables.
#[derive(Debug, Default, Clone)]
pub struct Idents {
    tables: IndexMap<TableId, String>,
    columns: IndexMap<ColumnId, ColumnEntry>,
}

#[derive(Debug, Clone)]
struct ColumnEntry {
    table: String,
    name: String,
}

impl Idents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a table. Returns `false` if the id was already registered,
    /// in which case the existing entry is left untouched.
    pub fn register_table(&mut self, id: TableId, name: impl Into<String>) -> bool {
        if self.tables.contains_key(&id) {
            return false;
        }
        self.tables.insert(id, name.into());
        true
    }

    /// Registers a column of `table`. Returns `false` if the id was already
    /// registered, in which case the existing entry is left untouched.
    pub fn register_column(
        &mut self,
        id: ColumnId,
        table: impl Into<String>,
        name: impl Into<String>,
    ) -> bool {
        if self.columns.contains_key(&id) {
            return false;
        }
        self.columns.insert(
            id,
            ColumnEntry {
                table: table.into(),
                name: name.into(),
            },
        );
        true
    }

    pub fn table_name(&self, id: &str) -> Option<&str> {
        self.tables.get(id).map(String::as_str)
    }

    pub fn table_id(&self, name: &str) -> Option<&TableId> {
        self.tables
            .iter()
            .find(|(_, table)| *table == name)
            .map(|(id, _)| id)
    }

    pub fn column_name(&self, id: &str) -> Option<&str> {
        self.columns.get(id).map(|entry| entry.name.as_str())
    }

    pub fn column_table(&self, id: &str) -> Option<&str> {
        self.columns.get(id).map(|entry| entry.table.as_str())
    }

    pub fn column_id(&self, name: &str, table: &str) -> Option<&ColumnId> {
        self.columns
            .iter()
            .find(|(_, entry)| entry.name == name && entry.table == table)
            .map(|(id, _)| id)
    }
}

impl TableId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ColumnId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TableId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ColumnId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TableId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for ColumnId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Debug for TableId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "TableId({})", self.0)
    }
}

impl fmt::Debug for ColumnId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ColumnId({})", self.0)
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(&self.0)
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(&self.0)
    }
}
