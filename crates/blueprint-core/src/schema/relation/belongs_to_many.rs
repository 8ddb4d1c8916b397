use super::Relation;

use serde::Serialize;

/// Many-to-many edge through a link (pivot) table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BelongsToMany {
    /// Partner table
    pub table: String,

    pub model: String,

    /// Pivot column referencing the owning table
    pub foreign_key: String,

    /// Pivot column referencing the partner table
    pub related_foreign_key: String,

    /// Column on the owning table referenced by `foreign_key`
    pub primary_key: String,

    /// Column on the partner table referenced by `related_foreign_key`
    pub related_primary_key: String,

    pub pivot_table: String,

    /// Copied from the pivot table's timestamp setting
    pub with_timestamps: bool,
}

impl From<BelongsToMany> for Relation {
    fn from(value: BelongsToMany) -> Self {
        Self::BelongsToMany(value)
    }
}
