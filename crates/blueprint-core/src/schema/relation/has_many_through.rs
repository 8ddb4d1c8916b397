use super::Relation;

use serde::Serialize;

/// Two-hop relationship discovered by chaining existing relationships.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HasManyThrough {
    /// Table reached at the end of the chain
    pub table: String,

    pub model: String,

    /// Relationship on the owning table that is traversed first
    pub through: String,

    /// Model at the intermediate hop
    pub through_model: String,

    /// Relationship on the intermediate model that is traversed second
    pub related_method: String,

    /// Keys of the `through` relationship
    pub primary_key: String,
    pub foreign_key: String,
}

impl From<HasManyThrough> for Relation {
    fn from(value: HasManyThrough) -> Self {
        Self::HasManyThrough(value)
    }
}
