macro_rules! fmt {
    ($f:expr, $( $fragments:expr )*) => {{
        $(
            $fragments.to_dsl($f);
        )*
    }};
}

/// Where rendered fragments are written.
pub(crate) struct Formatter<'a> {
    pub(crate) dst: &'a mut String,
}

pub(crate) trait ToDsl {
    fn to_dsl(self, f: &mut Formatter<'_>);
}

/// Renders a single fragment into a new string.
pub(crate) fn render(fragment: impl ToDsl) -> String {
    let mut dst = String::new();
    fragment.to_dsl(&mut Formatter { dst: &mut dst });
    dst
}

impl ToDsl for &str {
    fn to_dsl(self, f: &mut Formatter<'_>) {
        f.dst.push_str(self);
    }
}

impl ToDsl for &String {
    fn to_dsl(self, f: &mut Formatter<'_>) {
        f.dst.push_str(self);
    }
}

impl ToDsl for u32 {
    fn to_dsl(self, f: &mut Formatter<'_>) {
        use std::fmt::Write;
        write!(f.dst, "{self}").unwrap();
    }
}

impl<T: ToDsl> ToDsl for Option<T> {
    fn to_dsl(self, f: &mut Formatter<'_>) {
        if let Some(fragment) = self {
            fragment.to_dsl(f);
        }
    }
}
