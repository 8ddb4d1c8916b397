//! Derives rendering-ready records from a resolved [`Schema`].
//!
//! The three formatters are independent of one another. Each reads the
//! finished table map and produces one record per table, with per-column
//! strings in column declaration order.

#[macro_use]
mod fmt;

mod delim;
mod quote;

pub mod factory;
pub use factory::Factory;

pub mod migration;
pub use migration::Migration;

pub mod model;
pub use model::Model;

use blueprint_core::Schema;

/// Formats every migration.
pub fn migrations(schema: &Schema) -> Vec<Migration> {
    migration::format(schema)
}

/// Formats every factory. Link tables get none.
pub fn factories(schema: &Schema) -> Vec<Factory> {
    factory::format(schema)
}

/// Formats every model. Link tables get none.
pub fn models(schema: &Schema) -> Vec<Model> {
    model::format(schema)
}
