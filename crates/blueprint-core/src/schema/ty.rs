use super::Column;

use serde::{Serialize, Serializer};
use std::fmt;

/// Column type.
///
/// Holds every type name the designer can emit. After [`normalize`] only the
/// canonical subset remains (see [`Type::is_canonical`]); formatters only
/// ever see canonical types or [`Type::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    TinyInteger,
    SmallInteger,
    MediumInteger,
    Integer,
    BigInteger,
    Char,
    String,
    Text,
    TinyText,
    MediumText,
    LongText,
    Double,
    Float,
    Decimal,
    Date,
    DateTime,
    Timestamp,
    Time,
    Boolean,

    /// Auto-incrementing primary key.
    Increments,

    /// A type name this compiler does not recognize. Carried through so the
    /// migration can still name it; rule formatters render nothing for it.
    Unknown(String),
}

/// Rewrites a column's declared type into the canonical vocabulary.
///
/// Applying it to an already normalized column is a no-op.
pub fn normalize(mut column: Column) -> Column {
    column.ty = column
        .ty
        .normalized(column.length.is_some(), column.auto_increment);
    column
}

impl Type {
    pub fn from_name(name: &str) -> Type {
        match name {
            "tinyInteger" => Type::TinyInteger,
            "smallInteger" => Type::SmallInteger,
            "mediumInteger" => Type::MediumInteger,
            "integer" => Type::Integer,
            "bigInteger" => Type::BigInteger,
            "char" => Type::Char,
            "string" => Type::String,
            "text" => Type::Text,
            "tinyText" => Type::TinyText,
            "mediumText" => Type::MediumText,
            "longText" => Type::LongText,
            "double" => Type::Double,
            "float" => Type::Float,
            "decimal" => Type::Decimal,
            "date" => Type::Date,
            "dateTime" => Type::DateTime,
            "timestamp" => Type::Timestamp,
            "time" => Type::Time,
            "boolean" => Type::Boolean,
            "increments" => Type::Increments,
            other => Type::Unknown(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Type::TinyInteger => "tinyInteger",
            Type::SmallInteger => "smallInteger",
            Type::MediumInteger => "mediumInteger",
            Type::Integer => "integer",
            Type::BigInteger => "bigInteger",
            Type::Char => "char",
            Type::String => "string",
            Type::Text => "text",
            Type::TinyText => "tinyText",
            Type::MediumText => "mediumText",
            Type::LongText => "longText",
            Type::Double => "double",
            Type::Float => "float",
            Type::Decimal => "decimal",
            Type::Date => "date",
            Type::DateTime => "dateTime",
            Type::Timestamp => "timestamp",
            Type::Time => "time",
            Type::Boolean => "boolean",
            Type::Increments => "increments",
            Type::Unknown(name) => name,
        }
    }

    /// Applies the normalization rules in order; later rules see the effect
    /// of earlier ones and auto-increment overrides everything.
    pub fn normalized(&self, has_length: bool, auto_increment: bool) -> Type {
        if auto_increment {
            return Type::Increments;
        }

        let mut ty = match self {
            Type::TinyInteger | Type::SmallInteger | Type::MediumInteger => Type::Integer,
            ty => ty.clone(),
        };

        if has_length && matches!(ty, Type::Text | Type::Char) {
            ty = Type::String;
        }

        match ty {
            Type::Double => Type::Float,
            Type::Char => Type::Text,
            ty => ty,
        }
    }

    pub fn is_canonical(&self) -> bool {
        !matches!(
            self,
            Type::TinyInteger
                | Type::SmallInteger
                | Type::MediumInteger
                | Type::Char
                | Type::Double
                | Type::Unknown(_)
        )
    }

    pub fn is_increments(&self) -> bool {
        matches!(self, Type::Increments)
    }

    /// `tinyText`, `mediumText` and `longText`.
    pub fn is_sized_text(&self) -> bool {
        matches!(self, Type::TinyText | Type::MediumText | Type::LongText)
    }

    /// Any string-like type, sized text included.
    pub fn is_textual(&self) -> bool {
        matches!(self, Type::String | Type::Text) || self.is_sized_text()
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Type::Integer | Type::BigInteger)
    }

    /// The size prefix of a sized text type (`tiny`, `medium`, `long`).
    pub fn text_size(&self) -> Option<&'static str> {
        match self {
            Type::TinyText => Some("tiny"),
            Type::MediumText => Some("medium"),
            Type::LongText => Some("long"),
            _ => None,
        }
    }
}

impl Default for Type {
    fn default() -> Self {
        Type::Unknown(String::new())
    }
}

impl From<&str> for Type {
    fn from(value: &str) -> Self {
        Type::from_name(value)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Type {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for name in ["tinyInteger", "dateTime", "longText", "increments", "uuid"] {
            assert_eq!(Type::from_name(name).name(), name);
        }
    }

    #[test]
    fn rules_apply_in_order() {
        // `char` with a length becomes `string` before the `char -> text` rule runs.
        assert_eq!(Type::Char.normalized(true, false), Type::String);
        assert_eq!(Type::Char.normalized(false, false), Type::Text);
        assert_eq!(Type::Double.normalized(true, false), Type::Float);
        assert_eq!(Type::MediumInteger.normalized(false, false), Type::Integer);
        assert_eq!(Type::LongText.normalized(true, false), Type::LongText);
    }
}
