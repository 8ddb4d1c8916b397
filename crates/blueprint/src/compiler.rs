mod builder;
pub use builder::Builder;

use crate::{Artifacts, Document, Result};

use blueprint_core::schema::{self, ResolveCollision};
use tracing::info;

/// Converts schema documents into [`Artifacts`].
///
/// A compiler is configured once through [`Builder`] and may convert any
/// number of documents. Each conversion resolves the whole table map before
/// any formatter runs.
pub struct Compiler {
    /// Assembles and resolves the table map
    schema: schema::Builder,

    /// Consulted whenever a relationship name is already taken
    collisions: Box<dyn ResolveCollision>,
}

impl Compiler {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Resolves `doc` into a table map without formatting it.
    pub fn resolve(&mut self, doc: &Document) -> Result<crate::Schema> {
        self.schema.build(doc, &mut *self.collisions)
    }

    pub fn convert(&mut self, doc: &Document) -> Result<Artifacts> {
        let schema = self.resolve(doc)?;

        let artifacts = Artifacts::from_schema(schema);

        info!(
            tables = artifacts.tables.tables.len(),
            migrations = artifacts.migrations.len(),
            factories = artifacts.factories.len(),
            models = artifacts.models.len(),
            "converted schema"
        );

        Ok(artifacts)
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Builder::default().build()
    }
}

impl std::fmt::Debug for Compiler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Compiler")
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}
