use crate::{Error, Result};

/// A relationship name that is already taken on its owning table.
#[derive(Debug)]
pub struct Collision<'a> {
    /// Table that will own the relationship
    pub table: &'a str,

    /// The conventional name that is already in use
    pub proposed: &'a str,

    /// Every relationship name currently registered on `table`
    pub existing: Vec<&'a str>,
}

impl Collision<'_> {
    pub fn is_taken(&self, name: &str) -> bool {
        self.existing.iter().any(|existing| *existing == name)
    }
}

/// Decides the final name of a relationship whose conventional name is
/// already taken.
///
/// Returning a name that is still taken is reported as a name collision;
/// existing relationships are never overwritten.
pub trait ResolveCollision {
    fn resolve(&mut self, collision: &Collision<'_>) -> Result<String>;
}

/// Appends the lowest free numeric suffix: `user`, `user2`, `user3`, ...
#[derive(Debug, Default, Clone, Copy)]
pub struct Suffix;

/// Fails the conversion on the first collision.
#[derive(Debug, Default, Clone, Copy)]
pub struct Reject;

impl ResolveCollision for Suffix {
    fn resolve(&mut self, collision: &Collision<'_>) -> Result<String> {
        (2..)
            .map(|n| format!("{}{n}", collision.proposed))
            .find(|name| !collision.is_taken(name))
            .ok_or_else(|| Error::name_collision(collision.table, collision.proposed))
    }
}

impl ResolveCollision for Reject {
    fn resolve(&mut self, collision: &Collision<'_>) -> Result<String> {
        Err(Error::name_collision(collision.table, collision.proposed))
    }
}

impl<F> ResolveCollision for F
where
    F: FnMut(&Collision<'_>) -> Result<String>,
{
    fn resolve(&mut self, collision: &Collision<'_>) -> Result<String> {
        self(collision)
    }
}
