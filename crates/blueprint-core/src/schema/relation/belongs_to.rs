use super::Relation;

use serde::Serialize;

/// The owning table holds a foreign key into `table`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BelongsTo {
    /// Referenced table
    pub table: String,

    /// Model derived from the referenced table
    pub model: String,

    /// Column on the owning table
    pub foreign_key: String,

    /// Referenced column on `table`
    pub primary_key: String,
}

impl From<BelongsTo> for Relation {
    fn from(value: BelongsTo) -> Self {
        Self::BelongsTo(value)
    }
}
