use super::Compiler;

use blueprint_core::schema::{self, ResolveCollision, Suffix};

pub struct Builder {
    /// Schema builder
    core: schema::Builder,

    /// Collision policy, [`Suffix`] unless replaced
    collisions: Option<Box<dyn ResolveCollision>>,
}

impl Builder {
    /// Table names containing `separator` are treated as link tables.
    /// Defaults to `_`.
    pub fn link_separator(&mut self, separator: &str) -> &mut Self {
        self.core.link_separator(separator);
        self
    }

    /// Sets the policy used when a relationship name is already taken.
    pub fn collisions(&mut self, policy: impl ResolveCollision + 'static) -> &mut Self {
        self.collisions = Some(Box::new(policy));
        self
    }

    pub fn build(&mut self) -> Compiler {
        Compiler {
            schema: self.core.clone(),
            collisions: self.collisions.take().unwrap_or_else(|| Box::new(Suffix)),
        }
    }
}

impl Default for Builder {
    fn default() -> Self {
        Builder {
            core: schema::Builder::new(),
            collisions: None,
        }
    }
}
