use super::Relation;

use serde::Serialize;

/// Reverse side of a non-unique foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HasMany {
    /// Table holding the foreign key
    pub table: String,

    pub model: String,

    /// Referenced column on the owning table
    pub primary_key: String,

    /// Foreign key column on `table`
    pub foreign_key: String,
}

impl From<HasMany> for Relation {
    fn from(value: HasMany) -> Self {
        Self::HasMany(value)
    }
}
