mod error;
pub use error::{Error, IntoError, Reference};

pub mod schema;
pub use schema::Schema;

/// A Result type alias that uses blueprint's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
