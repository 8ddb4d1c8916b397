use crate::fmt::{Formatter, ToDsl};

/// Comma delimited
pub(crate) struct Comma<L>(pub(crate) L);

impl<L> ToDsl for Comma<L>
where
    L: IntoIterator,
    L::Item: ToDsl,
{
    fn to_dsl(self, f: &mut Formatter<'_>) {
        let mut s = "";
        for i in self.0 {
            fmt!(f, s i);
            s = ", ";
        }
    }
}
