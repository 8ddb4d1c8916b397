//! The schema document as exported by the visual designer.
//!
//! These types mirror the JSON layout one-to-one and carry no invariants of
//! their own; [`Builder`](super::Builder) validates and resolves them.

use super::{ColumnId, TableId};
use crate::Result;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Document {
    pub tables: Vec<TableDef>,

    /// Column declarations keyed by the id of the owning table.
    #[serde(default)]
    pub columns: IndexMap<TableId, Vec<ColumnDef>>,

    #[serde(default)]
    pub relations: Vec<RelationDef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDef {
    pub id: TableId,
    pub name: String,

    #[serde(default)]
    pub soft_delete: bool,

    #[serde(default, rename = "timeStamp")]
    pub timestamps: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDef {
    pub id: ColumnId,
    pub name: String,

    /// Declared type name, e.g. `mediumInteger` or `longText`.
    #[serde(default, rename = "type")]
    pub ty: Option<String>,

    #[serde(default, deserialize_with = "deserialize_length")]
    pub length: Option<u32>,

    #[serde(default)]
    pub nullable: bool,

    #[serde(default)]
    pub unique: bool,

    #[serde(default)]
    pub index: bool,

    #[serde(default)]
    pub unsigned: bool,

    #[serde(default, rename = "defValue")]
    pub default: Option<String>,

    #[serde(default)]
    pub comment: Option<String>,

    #[serde(default, rename = "autoInc")]
    pub auto_increment: bool,

    #[serde(default)]
    pub foreign_key: Option<ForeignKeyDef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForeignKeyDef {
    /// The referenced column.
    #[serde(default)]
    pub references: Option<RefDef>,

    /// The referenced table.
    #[serde(default)]
    pub on: Option<RefDef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RefDef {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelationDef {
    pub source: EndpointDef,
    pub target: EndpointDef,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointDef {
    pub table_id: TableId,
    pub column_id: ColumnId,
}

impl Document {
    pub fn from_json(src: &str) -> Result<Document> {
        Ok(serde_json::from_str(src)?)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Document> {
        Ok(serde_json::from_value(value)?)
    }
}

impl FromStr for Document {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Document> {
        Document::from_json(s)
    }
}

impl ForeignKeyDef {
    /// The referenced column id, if the designer recorded one.
    pub fn referenced_column(&self) -> Option<&str> {
        self.references
            .as_ref()
            .and_then(|references| references.id.as_deref())
            .filter(|id| !id.is_empty())
    }
}

/// Lengths are exported either as numbers or as numeric strings; an empty
/// string means "no length".
fn deserialize_length<'de, D>(deserializer: D) -> core::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Length {
        Number(u32),
        Text(String),
    }

    match Option::<Length>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Length::Number(0)) => Ok(None),
        Some(Length::Number(n)) => Ok(Some(n)),
        Some(Length::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Length::Text(s)) => s
            .trim()
            .parse()
            .map(|n: u32| (n > 0).then_some(n))
            .map_err(|_| serde::de::Error::custom(format!("invalid column length `{s}`"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_accepts_numbers_and_strings() {
        let doc = Document::from_value(serde_json::json!({
            "tables": [{ "id": "t1", "name": "posts" }],
            "columns": {
                "t1": [
                    { "id": "c1", "name": "a", "length": 50 },
                    { "id": "c2", "name": "b", "length": "90" },
                    { "id": "c3", "name": "c", "length": "" },
                    { "id": "c4", "name": "d" }
                ]
            }
        }))
        .unwrap();

        let lengths: Vec<_> = doc.columns["t1"].iter().map(|c| c.length).collect();
        assert_eq!(lengths, [Some(50), Some(90), None, None]);
    }

    #[test]
    fn length_rejects_garbage() {
        let res = Document::from_value(serde_json::json!({
            "tables": [],
            "columns": { "t1": [{ "id": "c1", "name": "a", "length": "wide" }] }
        }));
        assert!(res.is_err());
    }

    #[test]
    fn referenced_column_ignores_blank_ids() {
        let fk: ForeignKeyDef = serde_json::from_value(serde_json::json!({
            "references": { "id": "", "name": "id" },
            "on": { "id": "t2", "name": "users" }
        }))
        .unwrap();
        assert_eq!(fk.referenced_column(), None);
    }
}
