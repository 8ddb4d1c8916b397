use super::Error;

/// Error when a relationship name is already taken on its owning table and
/// the configured collision policy could not produce a free one.
#[derive(Debug)]
pub(super) struct NameCollisionError {
    table: Box<str>,
    name: Box<str>,
}

impl std::error::Error for NameCollisionError {}

impl core::fmt::Display for NameCollisionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "relationship name `{}` is already taken on table `{}`",
            self.name, self.table
        )
    }
}

impl Error {
    /// Creates a name collision error.
    pub fn name_collision(table: impl Into<String>, name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NameCollision(NameCollisionError {
            table: table.into().into(),
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is a name
    /// collision error.
    pub fn is_name_collision(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::NameCollision(_)))
    }
}
