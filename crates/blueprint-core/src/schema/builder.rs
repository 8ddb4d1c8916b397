mod relations;
mod through;

use super::{
    collision::{Collision, ResolveCollision, Suffix},
    name, normalize, raw, Column, ForeignKey, Idents, Relation, Schema, Table,
};
use crate::{Error, Result};

use indexmap::IndexMap;
use tracing::{debug, trace, warn};

/// Assembles a raw [`raw::Document`] into a resolved [`Schema`].
#[derive(Debug, Clone)]
pub struct Builder {
    /// Table names containing this string are treated as link tables.
    link_separator: String,
}

/// Used to track state during the build process
struct BuildSchema<'a> {
    /// Build options
    builder: &'a Builder,

    /// Decides the final name of colliding relationships
    collisions: &'a mut dyn ResolveCollision,

    /// Id to name lookups, filled as tables and columns are assembled
    idents: Idents,

    /// Tables as they are built
    tables: IndexMap<String, Table>,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            link_separator: "_".to_string(),
        }
    }

    pub fn link_separator(&mut self, separator: &str) -> &mut Self {
        self.link_separator = separator.to_string();
        self
    }

    /// Builds the schema, renaming colliding relationships with [`Suffix`].
    pub fn assemble(&self, doc: &raw::Document) -> Result<Schema> {
        self.build(doc, &mut Suffix)
    }

    pub fn build(
        &self,
        doc: &raw::Document,
        collisions: &mut dyn ResolveCollision,
    ) -> Result<Schema> {
        let mut builder = BuildSchema {
            builder: self,
            collisions,
            idents: Idents::new(),
            tables: IndexMap::new(),
        };

        builder.build_tables(doc)?;
        builder.build_columns(doc)?;
        builder.resolve_foreign_keys(doc);

        builder.resolve_relations(&doc.relations)?;
        builder.discover_through()?;

        let schema = Schema {
            tables: builder.tables,
        };

        schema.verify()?;

        Ok(schema)
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildSchema<'_> {
    fn build_tables(&mut self, doc: &raw::Document) -> Result<()> {
        for def in &doc.tables {
            if self.tables.contains_key(&def.name) {
                return Err(Error::invalid_schema(format!(
                    "duplicate table name `{}`",
                    def.name
                )));
            }

            if !self.idents.register_table(def.id.clone(), &def.name) {
                return Err(Error::invalid_schema(format!(
                    "duplicate table id `{}`",
                    def.id
                )));
            }

            self.tables.insert(
                def.name.clone(),
                Table {
                    name: def.name.clone(),
                    model: name::model_name(&def.name),
                    soft_delete: def.soft_delete,
                    timestamps: def.timestamps,
                    is_link: name::is_link_table(&def.name, &self.builder.link_separator),
                    columns: IndexMap::new(),
                    relations: IndexMap::new(),
                },
            );
        }

        if let Some(id) = doc
            .columns
            .keys()
            .find(|id| self.idents.table_name(id.as_str()).is_none())
        {
            return Err(Error::invalid_schema(format!(
                "column list for unknown table id `{id}`"
            )));
        }

        Ok(())
    }

    fn build_columns(&mut self, doc: &raw::Document) -> Result<()> {
        for (table_name, table) in &mut self.tables {
            let Some(id) = self.idents.table_id(table_name) else {
                return Err(Error::invalid_schema(format!(
                    "table `{table_name}` is not registered"
                )));
            };

            let Some(defs) = doc.columns.get(id) else {
                return Err(Error::invalid_schema(format!(
                    "table `{table_name}` (id `{id}`) has no column list"
                )));
            };

            for def in defs {
                if table.columns.contains_key(&def.name) {
                    return Err(Error::invalid_schema(format!(
                        "duplicate column `{}` in table `{table_name}`",
                        def.name
                    )));
                }

                if !self
                    .idents
                    .register_column(def.id.clone(), table_name, &def.name)
                {
                    return Err(Error::invalid_schema(format!(
                        "duplicate column id `{}`",
                        def.id
                    )));
                }

                let column = normalize(Column::from_def(def));
                table.columns.insert(column.name.clone(), column);
            }

            debug!(
                table = %table_name,
                model = %table.model,
                columns = table.columns.len(),
                is_link = table.is_link,
                "assembled table"
            );
        }

        Ok(())
    }

    /// Keeps a foreign key only when it points at a declared column.
    fn resolve_foreign_keys(&mut self, doc: &raw::Document) {
        for (table_id, defs) in &doc.columns {
            let Some(table_name) = self.idents.table_name(table_id.as_str()) else {
                continue;
            };
            let Some(table) = self.tables.get_mut(table_name) else {
                continue;
            };

            for def in defs {
                let Some(fk) = &def.foreign_key else {
                    continue;
                };

                let target = fk.referenced_column().and_then(|id| {
                    Some(ForeignKey {
                        table: self.idents.column_table(id)?.to_string(),
                        column: self.idents.column_name(id)?.to_string(),
                    })
                });

                if target.is_none() {
                    trace!(table = %table_name, column = %def.name, "dropping dangling foreign key");
                }

                if let Some(column) = table.columns.get_mut(&def.name) {
                    column.foreign_key = target;
                }
            }
        }
    }

    /// Registers `relation` on `owner`, consulting the collision policy when
    /// the name is already taken.
    fn insert_relation(&mut self, owner: &str, name: String, relation: Relation) -> Result<()> {
        let Some(table) = self.tables.get_mut(owner) else {
            return Err(Error::invalid_schema(format!(
                "relationship `{name}` refers to unknown table `{owner}`"
            )));
        };

        let name = if table.has_relation(&name) {
            let collision = Collision {
                table: owner,
                proposed: &name,
                existing: table.relations.keys().map(String::as_str).collect(),
            };

            let renamed = self.collisions.resolve(&collision)?;

            if renamed.is_empty() || table.has_relation(&renamed) {
                return Err(Error::name_collision(owner, renamed));
            }

            warn!(table = %owner, from = %name, to = %renamed, "renamed colliding relationship");
            renamed
        } else {
            name
        };

        trace!(table = %owner, %name, kind = %relation.kind(), target = %relation.table(), "registered relationship");
        table.relations.insert(name, relation);
        Ok(())
    }

    fn model_of(&self, table: &str) -> Result<&str> {
        self.tables
            .get(table)
            .map(|table| table.model.as_str())
            .ok_or_else(|| Error::invalid_schema(format!("unknown table `{table}`")))
    }
}
