//! Compiles a visually designed relational schema into migrations, data
//! factories and model classes.
//!
//! ```no_run
//! # fn main() -> blueprint::Result<()> {
//! let doc = blueprint::Document::from_json(&std::fs::read_to_string("schema.json")?)?;
//! let artifacts = blueprint::convert(&doc)?;
//!
//! for migration in &artifacts.migrations {
//!     println!("{}", migration.name);
//! }
//! # Ok(())
//! # }
//! ```

mod artifacts;
pub use artifacts::{Artifacts, Seed, TestCase};

pub mod compiler;
pub use compiler::Compiler;

pub use blueprint_core::{
    schema::{self, raw::Document, Collision, Reject, ResolveCollision, Suffix},
    Error, Result, Schema,
};

pub use blueprint_fmt::{factory, migration, model, Factory, Migration, Model};

/// Converts `doc` with the default configuration.
pub fn convert(doc: &Document) -> Result<Artifacts> {
    Compiler::default().convert(doc)
}
