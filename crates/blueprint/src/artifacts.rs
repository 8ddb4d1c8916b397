use crate::{Factory, Migration, Model, Schema};

use serde::Serialize;

/// Everything produced by one conversion, handed to the artifact sink in
/// one piece.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Artifacts {
    /// The fully resolved table map the records were derived from
    pub tables: Schema,

    pub migrations: Vec<Migration>,

    pub factories: Vec<Factory>,

    pub models: Vec<Model>,

    /// Declared for the sink but never populated
    pub seeds: Vec<Seed>,

    /// Declared for the sink but never populated
    pub tests: Vec<TestCase>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Seed {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestCase {
    pub name: String,
}

impl Artifacts {
    pub(crate) fn from_schema(tables: Schema) -> Artifacts {
        Artifacts {
            migrations: blueprint_fmt::migrations(&tables),
            factories: blueprint_fmt::factories(&tables),
            models: blueprint_fmt::models(&tables),
            seeds: vec![],
            tests: vec![],
            tables,
        }
    }
}
