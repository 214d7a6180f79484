//! Standard trait surface for `Optional<T>`.

use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
};

use super::Optional;

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Optional<T> {
    #[inline]
    fn clone(&self) -> Self {
        match self.as_ref() {
            Some(payload) => Self::from_value(payload.clone()),
            None => Self::new(),
        }
    }

    /// Copy-assigns from `source`.
    ///
    /// The payload is cloned before the old one is dropped, so a panicking
    /// `clone` leaves `self` untouched.
    fn clone_from(&mut self, source: &Self) {
        match source.as_ref() {
            Some(payload) => {
                self.assign(payload.clone());
            }
            None => self.reset(),
        }
    }
}

// `ne` delegates to `T::ne` rather than negating `eq`.
#[allow(clippy::partialeq_ne_impl)]
impl<T: PartialEq> PartialEq for Optional<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.as_ref(), other.as_ref()) {
            (Some(lhs), Some(rhs)) => lhs == rhs,
            (None, None) => true,
            _ => false,
        }
    }

    fn ne(&self, other: &Self) -> bool {
        match (self.as_ref(), other.as_ref()) {
            (Some(lhs), Some(rhs)) => lhs != rhs,
            (None, None) => false,
            _ => true,
        }
    }
}

impl<T: Eq> Eq for Optional<T> {}

/// Empty orders before present, as with `Option`.
impl<T: PartialOrd> PartialOrd for Optional<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_ref().partial_cmp(&other.as_ref())
    }
}

impl<T: Ord> Ord for Optional<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_ref().cmp(&other.as_ref())
    }
}

impl<T: Hash> Hash for Optional<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.has_value().hash(state);
        if let Some(payload) = self.as_ref() {
            payload.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_ref() {
            Some(payload) => f.debug_tuple("Optional").field(payload).finish(),
            None => f.write_str("Optional(<empty>)"),
        }
    }
}

/// Forwards to [`Optional::value`]; panics when empty.
///
/// Inherent methods shadow payload methods of the same name: on an
/// `Optional<Vec<u8>>`, `slot.is_empty()` asks about the container while
/// `slot.value().is_empty()` or `(*slot).is_empty()` asks about the vector.
/// The same holds for `take`, `replace`, `as_ref`, `as_mut`, `get`, `iter`
/// and `iter_mut`.
impl<T> Deref for Optional<T> {
    type Target = T;

    #[inline]
    #[track_caller]
    fn deref(&self) -> &T {
        self.value()
    }
}

impl<T> DerefMut for Optional<T> {
    #[inline]
    #[track_caller]
    fn deref_mut(&mut self) -> &mut T {
        self.value_mut()
    }
}

impl<T> From<T> for Optional<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::from_value(value)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(payload) => Self::from_value(payload),
            None => Self::new(),
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

impl<T> From<&Optional<T>> for bool {
    #[inline]
    fn from(value: &Optional<T>) -> Self {
        value.has_value()
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = core::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = core::option::IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Optional<T> {
    type Item = &'a mut T;
    type IntoIter = core::option::IntoIter<&'a mut T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
