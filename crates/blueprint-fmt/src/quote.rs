use crate::fmt::{Formatter, ToDsl};

/// A single-quoted string literal.
///
/// Embedded quotes and backslashes are escaped so the literal survives
/// being pasted into generated JavaScript.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Quoted<'a>(pub(crate) &'a str);

impl ToDsl for Quoted<'_> {
    fn to_dsl(self, f: &mut Formatter<'_>) {
        f.dst.push('\'');
        for ch in self.0.chars() {
            if matches!(ch, '\'' | '\\') {
                f.dst.push('\\');
            }
            f.dst.push(ch);
        }
        f.dst.push('\'');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fmt::render;

    #[test]
    fn escapes_quotes() {
        assert_eq!(render(Quoted("id")), "'id'");
        assert_eq!(render(Quoted("it's")), r"'it\'s'");
        assert_eq!(render(Quoted(r"a\b")), r"'a\\b'");
    }
}
