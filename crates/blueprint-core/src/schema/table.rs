use super::{Column, Relation};

use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Unique within the schema.
    pub name: String,

    /// Singular, upper camel case form of the table name.
    pub model: String,

    pub soft_delete: bool,

    pub timestamps: bool,

    /// True when the name follows the join-table convention. Link tables only
    /// contribute `belongsToMany` relationships and get no model or factory.
    pub is_link: bool,

    /// Columns in declaration order.
    pub columns: IndexMap<String, Column>,

    /// Relationships in the order they were resolved.
    pub relations: IndexMap<String, Relation>,
}

impl Table {
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    pub fn columns(&self) -> impl ExactSizeIterator<Item = &Column> {
        self.columns.values()
    }

    pub fn relation(&self, name: &str) -> Option<&Relation> {
        self.relations.get(name)
    }

    pub fn relations(&self) -> impl ExactSizeIterator<Item = (&str, &Relation)> {
        self.relations.iter().map(|(name, rel)| (name.as_str(), rel))
    }

    pub fn has_relation(&self, name: &str) -> bool {
        self.relations.contains_key(name)
    }
}
