use crate::fmt::{render, Formatter, ToDsl};

use blueprint_core::{
    schema::{Column, Table, Type},
    Schema,
};
use serde::Serialize;
use tracing::debug;

const DATE: &str = "date({string: true, american: false})";
const TIME: &str = "hour({twentyfour: true}) + '/' + faker.minute() + '/' + faker.second()";
const DATE_TIME: &str = "date({string: true, american: false}) + ' ' + faker.hour({twentyfour: true}) + '/' + faker.minute() + '/' + faker.second()";

/// Fake-data blueprint for one model.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Factory {
    /// Model the blueprint is registered for
    pub name: String,

    pub table: String,

    pub columns: Vec<FieldRule>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldRule {
    pub name: String,

    /// `None` for auto-increment ids and foreign keys, which the database
    /// or the relationship fills in.
    pub rule: Option<String>,
}

pub fn format(schema: &Schema) -> Vec<Factory> {
    let factories: Vec<_> = schema.entity_tables().map(factory).collect();
    debug!(factories = factories.len(), "formatted factories");
    factories
}

pub fn factory(table: &Table) -> Factory {
    Factory {
        name: table.model.clone(),
        table: table.name.clone(),
        columns: table
            .columns()
            .map(|column| FieldRule {
                name: column.name.clone(),
                rule: field_rule(column),
            })
            .collect(),
    }
}

/// Renders the fake-data rule for a column, e.g. `title: faker.sentence()`.
///
/// Columns of an unrecognized type get an empty rule.
pub fn field_rule(column: &Column) -> Option<String> {
    if column.is_key() {
        return None;
    }

    let rule = match generator(column) {
        Some(generator) => render(FakeData { column, generator }),
        None => String::new(),
    };

    Some(rule)
}

struct FakeData<'a> {
    column: &'a Column,
    generator: &'static str,
}

fn generator(column: &Column) -> Option<&'static str> {
    let generator = match &column.ty {
        Type::Timestamp => "timestamp()",
        Type::String | Type::Text | Type::Char => "sentence()",
        ty if ty.is_sized_text() => "sentence()",
        Type::TinyInteger
        | Type::SmallInteger
        | Type::MediumInteger
        | Type::Integer
        | Type::BigInteger => {
            if column.unsigned {
                "natural()"
            } else {
                "integer()"
            }
        }
        Type::Float | Type::Double | Type::Decimal => "floating({min: 0})",
        Type::Date => DATE,
        Type::DateTime => DATE_TIME,
        Type::Time => TIME,
        Type::Boolean => "bool()",
        _ => return None,
    };

    Some(generator)
}

impl ToDsl for FakeData<'_> {
    fn to_dsl(self, f: &mut Formatter<'_>) {
        let column = self.column;

        fmt!(f, &column.name ": faker.");

        if column.nullable {
            fmt!(f, "bool() ? null : faker.");
        }

        fmt!(f, self.generator);

        if let (Some(length), Type::String | Type::Text) = (column.length, &column.ty) {
            fmt!(f, ".substring(0, " length ")");
        }
    }
}
