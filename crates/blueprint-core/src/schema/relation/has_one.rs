use super::Relation;

use serde::Serialize;

/// Reverse side of a unique foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HasOne {
    /// Table holding the foreign key
    pub table: String,

    pub model: String,

    /// Referenced column on the owning table
    pub primary_key: String,

    /// Foreign key column on `table`
    pub foreign_key: String,
}

impl From<HasOne> for Relation {
    fn from(value: HasOne) -> Self {
        Self::HasOne(value)
    }
}
