mod builder;
pub use builder::Builder;

mod collision;
pub use collision::{Collision, Reject, ResolveCollision, Suffix};

mod column;
pub use column::{Column, ForeignKey};

mod ident;
pub use ident::{ColumnId, Idents, TableId};

mod name;

pub mod raw;

pub mod relation;
pub use relation::{Relation, RelationKind};

mod table;
pub use table::Table;

mod ty;
pub use ty::{normalize, Type};

mod verify;

use crate::Result;
use indexmap::IndexMap;
use serde::Serialize;

/// The resolved table map.
///
/// Produced in one piece by [`Builder`]; formatters only ever see a fully
/// resolved schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Schema {
    /// Tables keyed by name, in declaration order.
    pub tables: IndexMap<String, Table>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Assembles and resolves `doc` with the default [`Builder`].
    pub fn from_document(doc: &raw::Document) -> Result<Schema> {
        Builder::default().assemble(doc)
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    pub fn tables(&self) -> impl ExactSizeIterator<Item = &Table> {
        self.tables.values()
    }

    /// Tables that get a model and a factory.
    pub fn entity_tables(&self) -> impl Iterator<Item = &Table> {
        self.tables().filter(|table| !table.is_link)
    }
}
