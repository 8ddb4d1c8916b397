use blueprint_core::schema::{raw::Document, Column, ForeignKey, Schema, Type};
use blueprint_fmt::migration::{self, column_dsl, Action};
use pretty_assertions::assert_eq;
use serde_json::json;
use std_util::prelude::*;

fn column(ty: &str) -> Column {
    Column::new("myColumn", Type::from_name(ty))
}

#[test]
fn type_calls() {
    let cases = [
        ("text", "table.text('myColumn').notNullable()"),
        ("tinyText", "table.text('myColumn', 'tinytext').notNullable()"),
        ("mediumText", "table.text('myColumn', 'mediumtext').notNullable()"),
        ("longText", "table.text('myColumn', 'longtext').notNullable()"),
        ("string", "table.string('myColumn').notNullable()"),
        ("integer", "table.integer('myColumn').notNullable()"),
        ("bigInteger", "table.bigInteger('myColumn').notNullable()"),
        ("tinyInteger", "table.integer('myColumn').notNullable()"),
        ("date", "table.date('myColumn').notNullable()"),
        ("dateTime", "table.dateTime('myColumn').notNullable()"),
        ("timestamp", "table.timestamp('myColumn').notNullable()"),
        ("time", "table.time('myColumn').notNullable()"),
        ("float", "table.float('myColumn').notNullable()"),
        ("decimal", "table.decimal('myColumn').notNullable()"),
        ("boolean", "table.boolean('myColumn').notNullable()"),
        ("double", "table.float('myColumn').notNullable()"),
        ("char", "table.text('myColumn').notNullable()"),
        ("point", "table.specificType('myColumn', 'point').notNullable()"),
    ];

    for (ty, expected) in cases {
        assert_eq!(column_dsl(&column(ty)), expected, "type `{ty}`");
    }
}

#[test]
fn lengths() {
    let mut text = column("text");
    text.length = Some(50);
    assert_eq!(column_dsl(&text), "table.string('myColumn', 50).notNullable()");

    let mut string = column("string");
    string.length = Some(90);
    assert_eq!(column_dsl(&string), "table.string('myColumn', 90).notNullable()");
}

#[test]
fn auto_increment() {
    let mut id = Column::new("id", Type::Integer);
    id.auto_increment = true;
    assert_eq!(column_dsl(&id), "table.increments('id').notNullable()");
}

#[test]
fn chained_clauses() {
    let mut default = column("text");
    default.default = Some("someValue".into());
    assert_eq!(
        column_dsl(&default),
        "table.text('myColumn').defaultTo('someValue').notNullable()"
    );

    let mut comment = column("text");
    comment.comment = Some("This field is dope".into());
    assert_eq!(
        column_dsl(&comment),
        "table.text('myColumn').notNullable().comment('This field is dope')"
    );

    let mut nullable = column("text");
    nullable.nullable = true;
    assert_eq!(column_dsl(&nullable), "table.text('myColumn')");

    let mut unique = column("text");
    unique.unique = true;
    assert_eq!(column_dsl(&unique), "table.text('myColumn').notNullable().unique()");

    let mut unsigned = column("integer");
    unsigned.unsigned = true;
    assert_eq!(
        column_dsl(&unsigned),
        "table.integer('myColumn').notNullable().unsigned()"
    );

    let mut index = column("integer");
    index.index = true;
    assert_eq!(column_dsl(&index), "table.integer('myColumn').notNullable().index()");
}

#[test]
fn foreign_key() {
    let mut column = Column::new("myRelationship", Type::Integer);
    column.foreign_key = Some(ForeignKey {
        table: "otherTable".into(),
        column: "id".into(),
    });

    assert_eq!(
        column_dsl(&column),
        "table.integer('myRelationship').notNullable().references('id').on('otherTable').onDelete('set null')"
    );
}

#[test]
fn literals_are_escaped() {
    let mut column = column("string");
    column.comment = Some("the user's handle".into());

    assert_eq!(
        column_dsl(&column),
        r"table.string('myColumn').notNullable().comment('the user\'s handle')"
    );
}

#[test]
fn every_table_gets_a_migration() {
    let doc = assert_ok!(Document::from_value(json!({
        "tables": [
            { "id": "t1", "name": "posts", "softDelete": true },
            { "id": "t2", "name": "tags", "timeStamp": true },
            { "id": "t3", "name": "posts_tags" }
        ],
        "columns": {
            "t1": [
                { "id": "c1", "name": "id", "type": "integer", "autoInc": true },
                { "id": "c2", "name": "title", "type": "char", "length": 120 }
            ],
            "t2": [{ "id": "c3", "name": "id", "type": "integer", "autoInc": true }],
            "t3": [
                {
                    "id": "c4", "name": "post_id", "type": "integer", "unsigned": true,
                    "foreignKey": { "references": { "id": "c1" }, "on": { "id": "t1" } }
                },
                {
                    "id": "c5", "name": "tag_id", "type": "integer", "unsigned": true,
                    "foreignKey": { "references": { "id": "c3" }, "on": { "id": "t2" } }
                }
            ]
        }
    })));
    let schema = assert_ok!(Schema::from_document(&doc));

    let migrations = migration::format(&schema);

    let names: Vec<_> = migrations.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["posts", "tags", "posts_tags"]);
    assert!(migrations.iter().all(|m| m.action == Action::Create));
    assert!(migrations[0].soft_delete);
    assert!(migrations[1].timestamps);

    let posts: Vec<_> = migrations[0].columns.iter().map(|c| c.dsl.as_str()).collect();
    assert_eq!(
        posts,
        [
            "table.increments('id').notNullable()",
            "table.string('title', 120).notNullable()",
        ]
    );

    let link: Vec<_> = migrations[2].columns.iter().map(|c| c.dsl.as_str()).collect();
    assert_eq!(
        link,
        [
            "table.integer('post_id').notNullable().unsigned().references('id').on('posts').onDelete('set null')",
            "table.integer('tag_id').notNullable().unsigned().references('id').on('tags').onDelete('set null')",
        ]
    );
}
