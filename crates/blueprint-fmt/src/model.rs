use crate::{
    delim::Comma,
    fmt::{render, Formatter, ToDsl},
    quote::Quoted,
};

use blueprint_core::{
    schema::{Column, Relation, RelationKind, Table, Type},
    Schema,
};
use serde::Serialize;
use tracing::debug;

/// Namespace the generated model classes live in.
const NAMESPACE: &str = "App/Models/";

/// One model class.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Model class name
    pub name: String,

    pub table: String,

    pub timestamps: bool,

    pub disable_timestamps: bool,

    pub soft_delete: bool,

    pub has_relations: bool,

    pub columns: Vec<ColumnRules>,

    pub relations: Vec<Declaration>,
}

/// Validation and sanitization rules of one column. Both are `None` for
/// auto-increment ids and foreign keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnRules {
    pub name: String,
    pub validation: Option<String>,
    pub sanitization: Option<String>,
}

/// A relationship accessor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Declaration {
    /// Accessor method name
    pub name: String,

    pub kind: RelationKind,

    /// Body of the accessor, e.g.
    /// `return this.hasMany('App/Models/Post', 'id', 'user_id')`
    pub body: String,
}

pub fn format(schema: &Schema) -> Vec<Model> {
    let models: Vec<_> = schema.entity_tables().map(model).collect();
    debug!(models = models.len(), "formatted models");
    models
}

pub fn model(table: &Table) -> Model {
    let relations: Vec<_> = table
        .relations()
        .map(|(name, relation)| Declaration {
            name: name.to_string(),
            kind: relation.kind(),
            body: declaration(relation),
        })
        .collect();

    Model {
        name: table.model.clone(),
        table: table.name.clone(),
        timestamps: table.timestamps,
        disable_timestamps: !table.timestamps,
        soft_delete: table.soft_delete,
        has_relations: !relations.is_empty(),
        columns: table
            .columns()
            .map(|column| ColumnRules {
                name: column.name.clone(),
                validation: validation_rule(column),
                sanitization: sanitization_rule(column),
            })
            .collect(),
        relations,
    }
}

/// Renders a validation rule, e.g. `email: 'string|required|unique|max:120'`.
///
/// Columns of an unrecognized type get an empty rule.
pub fn validation_rule(column: &Column) -> Option<String> {
    if column.is_key() {
        return None;
    }

    let Some(base) = validator(column) else {
        return Some(String::new());
    };

    let mut rule = base.to_string();

    if !column.nullable {
        rule.push_str("|required");
    }

    if column.unique {
        rule.push_str("|unique");
    }

    if let Some(length) = column.length {
        rule.push_str(&format!("|max:{length}"));
    }

    Some(render(Rule {
        name: &column.name,
        rule: &rule,
    }))
}

/// Renders a sanitization rule, e.g. `title: 'strip_tags'`.
pub fn sanitization_rule(column: &Column) -> Option<String> {
    if column.is_key() {
        return None;
    }

    let rule = match sanitizer(column) {
        Some(rule) => render(Rule {
            name: &column.name,
            rule,
        }),
        None => String::new(),
    };

    Some(rule)
}

/// Renders the accessor body for a relationship.
pub fn declaration(relation: &Relation) -> String {
    render(relation)
}

fn validator(column: &Column) -> Option<&'static str> {
    let base = match &column.ty {
        Type::Timestamp => "integer",
        Type::String | Type::Text | Type::Char => "string",
        ty if ty.is_sized_text() => "string",
        Type::TinyInteger
        | Type::SmallInteger
        | Type::MediumInteger
        | Type::Integer
        | Type::BigInteger => {
            if column.unsigned {
                "integer|above:0"
            } else {
                "integer"
            }
        }
        Type::Float | Type::Double | Type::Decimal => "number",
        Type::Date | Type::Time | Type::DateTime => "date",
        Type::Boolean => "boolean",
        _ => return None,
    };

    Some(base)
}

fn sanitizer(column: &Column) -> Option<&'static str> {
    let rule = match &column.ty {
        Type::Timestamp
        | Type::TinyInteger
        | Type::SmallInteger
        | Type::MediumInteger
        | Type::Integer
        | Type::BigInteger => "to_int",
        Type::String | Type::Text | Type::Char => "strip_tags",
        ty if ty.is_sized_text() => "strip_tags",
        Type::Float | Type::Double | Type::Decimal => "to_float",
        Type::Date | Type::Time | Type::DateTime => "to_date",
        Type::Boolean => "to_boolean",
        _ => return None,
    };

    Some(rule)
}

/// `<name>: '<rule>'`
struct Rule<'a> {
    name: &'a str,
    rule: &'a str,
}

impl ToDsl for Rule<'_> {
    fn to_dsl(self, f: &mut Formatter<'_>) {
        fmt!(f, self.name ": " Quoted(self.rule));
    }
}

impl ToDsl for &Relation {
    fn to_dsl(self, f: &mut Formatter<'_>) {
        match self {
            Relation::BelongsTo(rel) => {
                let model = format!("{NAMESPACE}{}", rel.model);
                fmt!(f, "return this.belongsTo(" Comma([
                    Quoted(&model),
                    Quoted(&rel.foreign_key),
                    Quoted(&rel.primary_key),
                ]) ")");
            }
            Relation::HasOne(rel) => {
                let model = format!("{NAMESPACE}{}", rel.model);
                fmt!(f, "return this.hasOne(" Comma([
                    Quoted(&model),
                    Quoted(&rel.primary_key),
                    Quoted(&rel.foreign_key),
                ]) ")");
            }
            Relation::HasMany(rel) => {
                let model = format!("{NAMESPACE}{}", rel.model);
                fmt!(f, "return this.hasMany(" Comma([
                    Quoted(&model),
                    Quoted(&rel.primary_key),
                    Quoted(&rel.foreign_key),
                ]) ")");
            }
            Relation::HasManyThrough(rel) => {
                let model = format!("{NAMESPACE}{}", rel.through_model);
                fmt!(f, "return this.hasManyThrough(" Comma([
                    Quoted(&model),
                    Quoted(&rel.related_method),
                    Quoted(&rel.primary_key),
                    Quoted(&rel.foreign_key),
                ]) ")");
            }
            Relation::BelongsToMany(rel) => {
                let model = format!("{NAMESPACE}{}", rel.model);
                fmt!(f, "return this.belongsToMany(" Comma([
                    Quoted(&model),
                    Quoted(&rel.foreign_key),
                    Quoted(&rel.related_foreign_key),
                    Quoted(&rel.primary_key),
                    Quoted(&rel.related_primary_key),
                ]) ").pivotTable(" Quoted(&rel.pivot_table) ")");

                if rel.with_timestamps {
                    fmt!(f, ".withTimestamps()");
                }
            }
        }
    }
}
