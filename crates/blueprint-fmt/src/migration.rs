use crate::{
    delim::Comma,
    fmt::{render, Formatter, ToDsl},
    quote::Quoted,
};

use blueprint_core::{
    schema::{Column, Table, Type},
    Schema,
};
use serde::Serialize;
use tracing::debug;

/// One migration file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Migration {
    /// Name of the table being created
    pub name: String,

    pub action: Action,

    pub soft_delete: bool,

    pub timestamps: bool,

    /// One schema-builder call per column, in declaration order
    pub columns: Vec<Fragment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    Create,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fragment {
    pub name: String,
    pub dsl: String,
}

pub fn format(schema: &Schema) -> Vec<Migration> {
    let migrations: Vec<_> = schema.tables().map(migration).collect();
    debug!(migrations = migrations.len(), "formatted migrations");
    migrations
}

pub fn migration(table: &Table) -> Migration {
    Migration {
        name: table.name.clone(),
        action: Action::Create,
        soft_delete: table.soft_delete,
        timestamps: table.timestamps,
        columns: table
            .columns()
            .map(|column| Fragment {
                name: column.name.clone(),
                dsl: column_dsl(column),
            })
            .collect(),
    }
}

/// Renders the schema-builder call for a single column, e.g.
/// `table.string('email', 120).notNullable().unique()`.
pub fn column_dsl(column: &Column) -> String {
    render(column)
}

/// The type method call that opens every column fragment. Columns that
/// were built by hand are normalized on the way out.
struct TypeCall<'a>(&'a Column);

impl ToDsl for &Column {
    fn to_dsl(self, f: &mut Formatter<'_>) {
        fmt!(f, "table." TypeCall(self));

        if let Some(default) = &self.default {
            fmt!(f, ".defaultTo(" Quoted(default) ")");
        }

        if !self.nullable {
            fmt!(f, ".notNullable()");
        }

        if self.unique {
            fmt!(f, ".unique()");
        }

        if self.index {
            fmt!(f, ".index()");
        }

        if self.unsigned {
            fmt!(f, ".unsigned()");
        }

        if let Some(comment) = &self.comment {
            fmt!(f, ".comment(" Quoted(comment) ")");
        }

        if let Some(fk) = &self.foreign_key {
            fmt!(f, ".references(" Quoted(&fk.column) ").on(" Quoted(&fk.table) ").onDelete('set null')");
        }
    }
}

impl ToDsl for TypeCall<'_> {
    fn to_dsl(self, f: &mut Formatter<'_>) {
        let column = self.0;
        let name = Quoted(&column.name);
        let ty = column
            .ty
            .normalized(column.length.is_some(), column.auto_increment);

        match &ty {
            Type::Unknown(raw) => {
                fmt!(f, "specificType(" Comma([name, Quoted(raw)]) ")");
            }
            ty => match ty.text_size() {
                Some(size) => {
                    let text = format!("{size}text");
                    fmt!(f, "text(" Comma([name, Quoted(&text)]) ")");
                }
                None => {
                    fmt!(f, ty.name() "(" name);
                    if let Some(length) = column.length {
                        fmt!(f, ", " length);
                    }
                    fmt!(f, ")");
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_core::schema::ForeignKey;

    #[test]
    fn clause_order() {
        let mut column = Column::new("slug", Type::String);
        column.length = Some(80);
        column.default = Some("draft".into());
        column.unique = true;
        column.index = true;
        column.unsigned = true;
        column.comment = Some("url path".into());

        assert_eq!(
            column_dsl(&column),
            "table.string('slug', 80).defaultTo('draft').notNullable().unique().index().unsigned().comment('url path')"
        );
    }

    #[test]
    fn foreign_key_is_last() {
        let mut column = Column::new("user_id", Type::Integer);
        column.nullable = true;
        column.unsigned = true;
        column.foreign_key = Some(ForeignKey {
            table: "users".into(),
            column: "id".into(),
        });

        assert_eq!(
            column_dsl(&column),
            "table.integer('user_id').unsigned().references('id').on('users').onDelete('set null')"
        );
    }
}
