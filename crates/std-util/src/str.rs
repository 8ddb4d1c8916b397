//! Case conversion and inflection helpers shared by the naming code.

use heck::ToLowerCamelCase;

pub fn camel_case(src: &str) -> String {
    src.to_lower_camel_case()
}

pub fn pluralize(src: &str) -> String {
    pluralizer::pluralize(src, 2, false)
}

pub fn singularize(src: &str) -> String {
    pluralizer::pluralize(src, 1, false)
}

/// Upper-cases the first character, leaving the rest untouched.
pub fn upper_first(src: &str) -> String {
    let mut chars = src.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_conversion() {
        assert_eq!(camel_case("posts_categories"), "postsCategories");
        assert_eq!(camel_case("blog_posts"), "blogPosts");
    }

    #[test]
    fn inflection() {
        assert_eq!(singularize("users"), "user");
        assert_eq!(singularize("categories"), "category");
        assert_eq!(pluralize("comment"), "comments");
        assert_eq!(pluralize("posts"), "posts");
    }

    #[test]
    fn upper_first_keeps_tail() {
        assert_eq!(upper_first("postsCategory"), "PostsCategory");
        assert_eq!(upper_first(""), "");
    }
}
