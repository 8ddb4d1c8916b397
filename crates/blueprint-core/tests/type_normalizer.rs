use blueprint_core::schema::{normalize, Column, Type};
use pretty_assertions::assert_eq;

const DECLARED: &[&str] = &[
    "tinyInteger",
    "smallInteger",
    "mediumInteger",
    "integer",
    "bigInteger",
    "char",
    "string",
    "text",
    "tinyText",
    "mediumText",
    "longText",
    "double",
    "float",
    "decimal",
    "date",
    "dateTime",
    "timestamp",
    "time",
    "boolean",
    "increments",
    "uuid",
];

fn column(ty: &str, length: Option<u32>, auto_increment: bool) -> Column {
    let mut column = Column::new("field", Type::from_name(ty));
    column.length = length;
    column.auto_increment = auto_increment;
    column
}

#[test]
fn auto_increment_always_wins() {
    for ty in DECLARED {
        for length in [None, Some(20)] {
            let normalized = normalize(column(ty, length, true));
            assert_eq!(normalized.ty, Type::Increments, "declared `{ty}`");
        }
    }
}

#[test]
fn sized_text_and_char_become_string() {
    assert_eq!(normalize(column("text", Some(90), false)).ty, Type::String);
    assert_eq!(normalize(column("char", Some(2), false)).ty, Type::String);
}

#[test]
fn unsized_types() {
    let cases = [
        ("tinyInteger", Type::Integer),
        ("smallInteger", Type::Integer),
        ("mediumInteger", Type::Integer),
        ("bigInteger", Type::BigInteger),
        ("char", Type::Text),
        ("text", Type::Text),
        ("double", Type::Float),
        ("longText", Type::LongText),
        ("uuid", Type::Unknown("uuid".into())),
    ];

    for (declared, expected) in cases {
        assert_eq!(normalize(column(declared, None, false)).ty, expected);
    }
}

#[test]
fn normalization_is_idempotent() {
    for ty in DECLARED {
        for length in [None, Some(12)] {
            for auto_increment in [false, true] {
                let once = normalize(column(ty, length, auto_increment));
                let twice = normalize(once.clone());
                assert_eq!(once, twice);
            }
        }
    }
}

#[test]
fn normalized_types_are_canonical() {
    for ty in DECLARED.iter().filter(|ty| **ty != "uuid") {
        let normalized = normalize(column(ty, None, false));
        assert!(normalized.ty.is_canonical(), "`{ty}` -> `{}`", normalized.ty);
    }
}
