//! Naming conventions shared by assembly and relationship resolution.

use std_util::str;

/// `posts_categories` -> `PostsCategory`
pub(crate) fn model_name(table: &str) -> String {
    str::upper_first(&str::singularize(&str::camel_case(table)))
}

pub(crate) fn is_link_table(table: &str, separator: &str) -> bool {
    !separator.is_empty() && table.contains(separator)
}

/// Name of the `belongsTo` side of a foreign key. A table pointing at itself
/// gets a `parent` prefix so the name does not read as the row's own identity.
pub(crate) fn belongs_to(source: &str, target: &str, target_model: &str) -> String {
    if source == target {
        format!("parent{target_model}")
    } else {
        str::singularize(&str::camel_case(target))
    }
}

/// Name of the `hasOne` / `hasMany` side of a foreign key.
pub(crate) fn has_n(source: &str, unique: bool) -> String {
    let base = str::camel_case(source);
    if unique {
        str::singularize(&base)
    } else {
        str::pluralize(&base)
    }
}

pub(crate) fn belongs_to_many(partner: &str) -> String {
    str::pluralize(&str::camel_case(partner))
}
