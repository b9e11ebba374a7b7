//! Error kinds raised by `Maybe` combinators.

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MaybeError {
    /// A combinator that needs a value found a present slot holding null.
    #[error("invalid value: combinator applied to a null payload")]
    InvalidValue,
    /// The absent value was asked for its payload.
    #[error("empty container: no payload to unwrap")]
    EmptyContainer,
}

pub type Result<T, E = MaybeError> = core::result::Result<T, E>;
