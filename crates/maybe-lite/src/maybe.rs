//! Dynamic `Maybe<T>`: absence, a present slot, and the combinators over both.
//!
//! A present slot may itself hold null (`Present(None)`). That state is not
//! absence: it survives `filter`, is handed to `if_present`, and makes `map`
//! fail with [`MaybeError::InvalidValue`].

use core::fmt;

use log::{debug, trace};

use crate::error::{MaybeError, Result};

/// A value that may be absent, or present with a possibly-null payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    /// The canonical absent value, shared by every `T`.
    #[default]
    Absent,
    /// A slot exists; its content may still be null.
    Present(Option<T>),
}

impl<T> Maybe<T> {
    /// The canonical absent value.
    pub const NONE: Self = Maybe::Absent;

    #[inline]
    pub const fn none() -> Self {
        Maybe::Absent
    }

    #[inline]
    pub const fn some(value: T) -> Self {
        Maybe::Present(Some(value))
    }

    /// A present slot holding null.
    #[inline]
    pub const fn some_null() -> Self {
        Maybe::Present(None)
    }

    /// Wraps `value` as-is; a null value stays present.
    #[inline]
    pub const fn some_nullable(value: Option<T>) -> Self {
        Maybe::Present(value)
    }

    /// Null-safe entry point: null collapses to [`Maybe::Absent`].
    #[inline]
    pub fn of(value: Option<T>) -> Self {
        match value {
            Some(v) => Maybe::some(v),
            None => Maybe::none(),
        }
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Maybe::Absent)
    }

    #[inline]
    pub fn is_present(&self) -> bool {
        !self.is_none()
    }

    #[inline]
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Absent => Maybe::Absent,
            Maybe::Present(payload) => Maybe::Present(payload.as_ref()),
        }
    }

    /// Keeps a non-null payload only if `predicate` accepts it.
    ///
    /// A null payload is passed through untouched and the predicate is not
    /// called.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Absent => Maybe::none(),
            Maybe::Present(None) => Maybe::some_null(),
            Maybe::Present(Some(v)) => {
                if predicate(&v) {
                    Maybe::of(Some(v))
                } else {
                    Maybe::of(None)
                }
            }
        }
    }

    /// Applies `f` to a non-null payload and wraps the result as present.
    pub fn map<U, F>(self, f: F) -> Result<Maybe<U>>
    where
        F: FnOnce(T) -> U,
    {
        self.map_nullable(|v| Some(f(v)))
    }

    /// Like [`Maybe::map`], but `f` may yield null, which stays present.
    pub fn map_nullable<U, F>(self, f: F) -> Result<Maybe<U>>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Maybe::Absent => Ok(Maybe::none()),
            Maybe::Present(None) => {
                debug!("map over a null payload");
                Err(MaybeError::InvalidValue)
            }
            Maybe::Present(Some(v)) => Ok(Maybe::some_nullable(f(v))),
        }
    }

    /// Feeds the raw payload, null included, to `f` and flattens one level.
    ///
    /// An absent inner result yields absence; otherwise the inner payload is
    /// unwrapped and rewrapped as present, so an inner `Present(None)` comes
    /// back as `Present(None)`.
    pub fn flat_map_nullable<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(Option<T>) -> Maybe<U>,
    {
        match self {
            Maybe::Absent => Maybe::none(),
            Maybe::Present(payload) => {
                // Absent inner results fail the unwrap and flatten to absence.
                match f(payload).into_payload() {
                    Ok(p) => Maybe::some_nullable(p),
                    Err(_) => Maybe::none(),
                }
            }
        }
    }

    /// [`Maybe::flat_map_nullable`] over non-null payloads only. A null
    /// payload propagates as `Present(None)` without calling `f`, so a chain
    /// whose transform would have returned absence stays present here. Use
    /// [`Maybe::flat_map_nullable`] when `f` must also see a null payload.
    pub fn flat_map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        self.flat_map_nullable(|payload| match payload {
            Some(v) => f(v),
            None => Maybe::some_null(),
        })
    }

    /// Returns the payload when present (null included), else `default`.
    pub fn or_else(self, default: T) -> Option<T> {
        match self {
            Maybe::Absent => Some(default),
            Maybe::Present(payload) => payload,
        }
    }

    /// Lazy [`Maybe::or_else`]: `supplier` runs only on absence.
    pub fn or_else_get<S>(self, supplier: S) -> Option<T>
    where
        S: FnOnce() -> T,
    {
        match self {
            Maybe::Absent => Some(supplier()),
            Maybe::Present(payload) => payload,
        }
    }

    /// Hands the payload to `consumer` whenever a slot exists, even a null one.
    pub fn if_present<C>(&self, consumer: C)
    where
        C: FnOnce(Option<&T>),
    {
        if let Maybe::Present(payload) = self {
            consumer(payload.as_ref());
        }
    }

    /// Unwraps the slot; absence is `EmptyContainer`.
    pub(crate) fn into_payload(self) -> Result<Option<T>> {
        match self {
            Maybe::Present(payload) => Ok(payload),
            Maybe::Absent => {
                trace!("unwrap of the absent value");
                Err(MaybeError::EmptyContainer)
            }
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Maybe::of(value)
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maybe::Absent => f.write_str("[]"),
            Maybe::Present(None) => f.write_str("[null]"),
            Maybe::Present(Some(v)) => write!(f, "[{v}]"),
        }
    }
}

/// Free-function form of [`Maybe::none`].
#[inline]
pub fn none<T>() -> Maybe<T> {
    Maybe::none()
}

/// Free-function form of [`Maybe::some`].
#[inline]
pub fn some<T>(value: T) -> Maybe<T> {
    Maybe::some(value)
}

/// Free-function form of [`Maybe::of`].
#[inline]
pub fn of<T>(value: Option<T>) -> Maybe<T> {
    Maybe::of(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwrap_absent_is_empty_container() {
        assert_eq!(Maybe::<u8>::none().into_payload(), Err(MaybeError::EmptyContainer));
    }

    #[test]
    fn unwrap_present_keeps_null() {
        assert_eq!(Maybe::<u8>::some_null().into_payload(), Ok(None));
        assert_eq!(Maybe::some(3u8).into_payload(), Ok(Some(3)));
    }
}
