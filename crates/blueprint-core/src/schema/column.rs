use super::{raw, Type};

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Unique within the owning table.
    pub name: String,

    #[serde(rename = "type")]
    pub ty: Type,

    pub length: Option<u32>,

    pub nullable: bool,

    pub unique: bool,

    pub index: bool,

    pub unsigned: bool,

    pub default: Option<String>,

    pub comment: Option<String>,

    pub auto_increment: bool,

    /// Only present when the reference resolved to a declared column.
    pub foreign_key: Option<ForeignKey>,
}

/// A resolved column reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForeignKey {
    pub table: String,
    pub column: String,
}

impl Column {
    pub fn new(name: impl Into<String>, ty: Type) -> Column {
        Column {
            name: name.into(),
            ty,
            length: None,
            nullable: false,
            unique: false,
            index: false,
            unsigned: false,
            default: None,
            comment: None,
            auto_increment: false,
            foreign_key: None,
        }
    }

    /// Builds an unresolved, unnormalized column from its declaration. The
    /// foreign key is filled in later, once every column id is known.
    pub(crate) fn from_def(def: &raw::ColumnDef) -> Column {
        Column {
            name: def.name.clone(),
            ty: def.ty.as_deref().map(Type::from_name).unwrap_or_default(),
            length: def.length,
            nullable: def.nullable,
            unique: def.unique,
            index: def.index,
            unsigned: def.unsigned,
            default: def.default.clone().filter(|v| !v.is_empty()),
            comment: def.comment.clone().filter(|v| !v.is_empty()),
            auto_increment: def.auto_increment,
            foreign_key: None,
        }
    }

    /// Auto-increment ids and foreign keys are filled by the database or by
    /// relationships, so factories and validators leave them alone.
    pub fn is_key(&self) -> bool {
        self.ty.is_increments() || self.foreign_key.is_some()
    }
}
