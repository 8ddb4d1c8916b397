use super::BuildSchema;
use crate::schema::{
    name, raw,
    relation::{BelongsTo, BelongsToMany, HasMany, HasOne},
    Relation,
};
use crate::{Error, Reference, Result};

use tracing::debug;

/// A relation declaration with both endpoints resolved to names.
#[derive(Debug)]
struct Edge {
    source: Endpoint,
    target: Endpoint,
}

#[derive(Debug)]
struct Endpoint {
    table: String,
    column: String,
}

impl BuildSchema<'_> {
    /// First pass: `belongsTo` / `hasOne` / `hasMany` from plain foreign keys
    /// and `belongsToMany` from link tables.
    pub(super) fn resolve_relations(&mut self, defs: &[raw::RelationDef]) -> Result<()> {
        let edges = defs
            .iter()
            .map(|def| -> Result<Edge> {
                Ok(Edge {
                    source: self.resolve_endpoint(&def.source)?,
                    target: self.resolve_endpoint(&def.target)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        for (i, edge) in edges.iter().enumerate() {
            if self.tables[&edge.source.table].is_link {
                self.link_edge(i, &edges)?;
            } else {
                self.foreign_key_edge(edge)?;
            }
        }

        debug!(relations = edges.len(), "resolved direct relationships");
        Ok(())
    }

    fn resolve_endpoint(&self, def: &raw::EndpointDef) -> Result<Endpoint> {
        let column_id = def.column_id.as_str();

        let (Some(table), Some(column)) = (
            self.idents.column_table(column_id),
            self.idents.column_name(column_id),
        ) else {
            return Err(Error::unresolved_reference(Reference::Column(
                column_id.to_string(),
            )));
        };

        let Some(declared) = self.idents.table_name(def.table_id.as_str()) else {
            return Err(Error::unresolved_reference(Reference::Table(
                def.table_id.to_string(),
            )));
        };

        if declared != table {
            return Err(Error::invalid_schema(format!(
                "relation endpoint column `{column_id}` belongs to `{table}`, not `{declared}`"
            )));
        }

        Ok(Endpoint {
            table: table.to_string(),
            column: column.to_string(),
        })
    }

    fn foreign_key_edge(&mut self, edge: &Edge) -> Result<()> {
        let Edge { source, target } = edge;

        let source_model = self.model_of(&source.table)?.to_string();
        let target_model = self.model_of(&target.table)?.to_string();

        let unique = self.tables[&source.table]
            .column(&source.column)
            .is_some_and(|column| column.unique);

        let belongs_to = BelongsTo {
            table: target.table.clone(),
            model: target_model.clone(),
            foreign_key: source.column.clone(),
            primary_key: target.column.clone(),
        };

        self.insert_relation(
            &source.table,
            name::belongs_to(&source.table, &target.table, &target_model),
            belongs_to.into(),
        )?;

        let reciprocal: Relation = if unique {
            HasOne {
                table: source.table.clone(),
                model: source_model,
                primary_key: target.column.clone(),
                foreign_key: source.column.clone(),
            }
            .into()
        } else {
            HasMany {
                table: source.table.clone(),
                model: source_model,
                primary_key: target.column.clone(),
                foreign_key: source.column.clone(),
            }
            .into()
        };

        self.insert_relation(
            &target.table,
            name::has_n(&source.table, unique),
            reciprocal,
        )
    }

    /// Pairs edge `i` with every other edge leaving the same link table
    /// through a different column. Each pairing registers a `belongsToMany`
    /// on the other edge's target pointing at this edge's target, so an
    /// N-column link table yields one relationship per ordered pair.
    fn link_edge(&mut self, i: usize, edges: &[Edge]) -> Result<()> {
        let this = &edges[i];
        let pivot = &this.source.table;
        let with_timestamps = self.tables[pivot].timestamps;
        let model = self.model_of(&this.target.table)?.to_string();

        for (j, other) in edges.iter().enumerate() {
            if j == i
                || other.source.table != *pivot
                || other.source.column == this.source.column
            {
                continue;
            }

            let relation = BelongsToMany {
                table: this.target.table.clone(),
                model: model.clone(),
                foreign_key: other.source.column.clone(),
                related_foreign_key: this.source.column.clone(),
                primary_key: other.target.column.clone(),
                related_primary_key: this.target.column.clone(),
                pivot_table: pivot.clone(),
                with_timestamps,
            };

            self.insert_relation(
                &other.target.table,
                name::belongs_to_many(&this.target.table),
                relation.into(),
            )?;
        }

        Ok(())
    }
}
