//! maybe-lite: an optional-value container that tells absence apart from a
//! present slot holding null, with `filter`/`map`/`flat_map`/`or_else`
//! combinators.

pub mod error;
pub mod maybe;

pub use error::{MaybeError, Result};
pub use maybe::{none, of, some, Maybe};
