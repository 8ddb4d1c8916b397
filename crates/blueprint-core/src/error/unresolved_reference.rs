use super::Error;

/// The identifier that failed to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    Table(String),
    Column(String),
}

/// Error when a relation endpoint names a table or column id that was never
/// declared.
#[derive(Debug)]
pub(super) struct UnresolvedReferenceError {
    reference: Reference,
}

impl std::error::Error for UnresolvedReferenceError {}

impl core::fmt::Display for UnresolvedReferenceError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.reference {
            Reference::Table(id) => write!(f, "unresolved reference: no table with id `{id}`"),
            Reference::Column(id) => write!(f, "unresolved reference: no column with id `{id}`"),
        }
    }
}

impl Error {
    /// Creates an unresolved reference error.
    pub fn unresolved_reference(reference: Reference) -> Error {
        Error::from(super::ErrorKind::UnresolvedReference(
            UnresolvedReferenceError { reference },
        ))
    }

    /// Returns `true` if this error, or any error it wraps, is an unresolved
    /// reference error.
    pub fn is_unresolved_reference(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::UnresolvedReference(_)))
    }
}
