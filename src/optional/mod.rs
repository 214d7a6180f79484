//! `Optional<T>` — zero-or-one inline payload with explicit lifetime control.
//!
//! The payload lives in a `MaybeUninit<T>` next to a presence flag. No heap
//! allocation, no sentinel values and no `T: Default` requirement for the
//! common operations.
//!
//! ## Presence invariant
//!
//! - `has_value == false` ⇒ the slot holds no live `T` and nothing is dropped.
//! - `has_value == true` ⇒ the slot holds exactly one live `T`.
//! - The flag is only set by writing a payload into an empty slot, and only
//!   cleared together with dropping or moving the payload out.
//!
//! Every mutating operation below resets before it constructs, so at most one
//! payload is ever live.
//!
//! ## Moves
//!
//! A Rust move of an `Optional<T>` moves the whole container. The element-wise
//! move operations ([`Optional::move_from`] and [`Optional::move_assign`]) are
//! different: they move the *payload* out with `mem::take` and leave the source
//! **present** with `T::default()`. Use [`Optional::take`] to empty the source.
//!
//! ## Method resolution through `Deref`
//!
//! `Optional<T>` derefs to `T`, but its own methods win over the payload's
//! methods of the same name: `is_empty`, `take`, `replace`, `as_ref`,
//! `as_mut`, `get`, `iter` and `iter_mut` always act on the container. Reach
//! the payload's versions through [`Optional::value`] or `(*slot)`.

mod ops;

use core::{mem, mem::MaybeUninit, ptr};

use crate::error::EmptyAccessError;
use crate::macros::{contract_assert, trace_event};
use crate::raw::slot;

/// An inline container that either holds one `T` or nothing.
///
/// # Examples
///
/// ```
/// use inline_optional::Optional;
///
/// let mut slot: Optional<i32> = Optional::new();
/// assert!(!slot.has_value());
/// assert_eq!(*slot.get(&42), 42);
///
/// slot.emplace(7);
/// assert_eq!(*slot.value(), 7);
/// assert_eq!(*slot.get(&42), 7);
/// ```
pub struct Optional<T> {
    value: MaybeUninit<T>,
    has_value: bool,
}

impl<T> Optional<T> {
    /// Creates an empty container.
    #[inline]
    pub const fn new() -> Self {
        Self {
            value: MaybeUninit::uninit(),
            has_value: false,
        }
    }

    /// Creates an empty container. Alias of [`Optional::new`].
    #[inline]
    pub const fn empty() -> Self {
        Self::new()
    }

    /// Creates a container holding `value`.
    #[inline]
    pub const fn from_value(value: T) -> Self {
        Self {
            value: MaybeUninit::new(value),
            has_value: true,
        }
    }

    /// Creates a container holding a clone of `value`.
    #[inline]
    pub fn from_ref(value: &T) -> Self
    where
        T: Clone,
    {
        Self::from_value(value.clone())
    }

    /// Creates a container whose payload is produced by `init`.
    #[inline]
    pub fn from_fn<F>(init: F) -> Self
    where
        F: FnOnce() -> T,
    {
        Self::from_value(init())
    }

    /// Creates a container from a fallible payload constructor.
    ///
    /// The constructor's error is returned unchanged.
    #[inline]
    pub fn try_from_fn<F, E>(init: F) -> Result<Self, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        init().map(Self::from_value)
    }

    /// Creates a container by moving the payload out of `source`.
    ///
    /// `source` keeps its presence flag: if it held a value it still does,
    /// now `T::default()`. An empty `source` yields an empty container.
    pub fn move_from(source: &mut Self) -> Self
    where
        T: Default,
    {
        let had_value = source.has_value;
        trace_event!(T, "move_from", had_value);
        match source.as_mut() {
            Some(payload) => Self::from_value(mem::take(payload)),
            None => Self::new(),
        }
    }

    /// Returns `true` if a payload is present.
    #[inline(always)]
    pub const fn has_value(&self) -> bool {
        self.has_value
    }

    /// Returns `true` if no payload is present.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        !self.has_value
    }

    // --- lifecycle ---------------------------------------------------------

    /// Writes `value` into the empty slot and raises the flag.
    #[inline(always)]
    fn construct(&mut self, value: T) -> &mut T {
        contract_assert!(!self.has_value, "construct over a live payload");
        self.has_value = true;
        slot::write(&mut self.value, value)
    }

    /// Drops the payload if present. Calling it on an empty container is a no-op.
    pub fn reset(&mut self) {
        let had_value = self.has_value;
        if had_value {
            // Cleared first: a panicking destructor must not leave the flag set.
            self.has_value = false;
            // SAFETY: the flag was set, so the slot holds a live payload.
            unsafe { slot::drop_in_place(&mut self.value) };
        }
        trace_event!(T, "reset", had_value);
    }

    /// Replaces any payload with `value` and returns a reference to it.
    ///
    /// The old payload is dropped before the new one is stored.
    pub fn emplace(&mut self, value: T) -> &mut T {
        let had_value = self.has_value;
        trace_event!(T, "emplace", had_value);
        self.reset();
        self.construct(value)
    }

    /// Drops any payload, then constructs a new one in place from `init`.
    ///
    /// If `init` panics the container is left empty; the old payload is gone.
    pub fn emplace_with<F>(&mut self, init: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        let had_value = self.has_value;
        trace_event!(T, "emplace_with", had_value);
        self.reset();
        let value = init();
        self.construct(value)
    }

    /// Drops any payload, then constructs a new one from a fallible constructor.
    ///
    /// On `Err` the error is returned unchanged and the container is empty.
    pub fn try_emplace_with<F, E>(&mut self, init: F) -> Result<&mut T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let had_value = self.has_value;
        trace_event!(T, "try_emplace_with", had_value);
        self.reset();
        let value = init()?;
        Ok(self.construct(value))
    }

    /// Assigns `value`, dropping any previous payload first.
    #[inline]
    pub fn assign(&mut self, value: T) -> &mut T {
        let had_value = self.has_value;
        trace_event!(T, "assign", had_value);
        self.reset();
        self.construct(value)
    }

    /// Assigns a clone of `value`, dropping any previous payload first.
    ///
    /// `value` cannot borrow this container's own payload: the `&mut self`
    /// receiver rules that out, so self-assignment never destroys its source.
    #[inline]
    pub fn assign_ref(&mut self, value: &T) -> &mut T
    where
        T: Clone,
    {
        self.assign(value.clone())
    }

    /// Move-assigns from another container.
    ///
    /// Any payload of `self` is dropped. If `source` holds a payload it is
    /// moved in with `mem::take`; `source` stays present with `T::default()`.
    /// An empty `source` leaves `self` empty.
    pub fn move_assign(&mut self, source: &mut Self)
    where
        T: Default,
    {
        let had_value = source.has_value;
        trace_event!(T, "move_assign", had_value);
        self.reset();
        if let Some(payload) = source.as_mut() {
            let moved = mem::take(payload);
            self.construct(moved);
        }
    }

    /// Moves the payload out, leaving the container empty.
    pub fn take(&mut self) -> Option<T> {
        let had_value = self.has_value;
        trace_event!(T, "take", had_value);
        if !had_value {
            return None;
        }
        self.has_value = false;
        // SAFETY: the flag was set and is now cleared; the payload is read once.
        Some(unsafe { slot::read_out(&mut self.value) })
    }

    /// Stores `value` and returns the previous payload, if any.
    pub fn replace(&mut self, value: T) -> Option<T> {
        let old = self.take();
        self.construct(value);
        old
    }

    /// Converts into the native `Option<T>`.
    #[inline]
    pub fn into_option(mut self) -> Option<T> {
        self.take()
    }

    // --- access ------------------------------------------------------------

    /// Returns the payload as `Some(&T)`, or `None` when empty.
    #[inline]
    pub fn as_ref(&self) -> Option<&T> {
        if self.has_value {
            // SAFETY: the flag is set.
            Some(unsafe { slot::assume_init_ref(&self.value) })
        } else {
            None
        }
    }

    /// Returns the payload as `Some(&mut T)`, or `None` when empty.
    #[inline]
    pub fn as_mut(&mut self) -> Option<&mut T> {
        if self.has_value {
            // SAFETY: the flag is set.
            Some(unsafe { slot::assume_init_mut(&mut self.value) })
        } else {
            None
        }
    }

    /// Returns a reference to the payload.
    ///
    /// # Panics
    /// Panics if the container is empty. Accessing an absent payload is a
    /// caller error; use [`Optional::try_value`] when emptiness is expected.
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &T {
        match self.as_ref() {
            Some(payload) => payload,
            None => panic!("value() called on an empty Optional"),
        }
    }

    /// Returns a mutable reference to the payload.
    ///
    /// # Panics
    /// Panics if the container is empty.
    #[inline]
    #[track_caller]
    pub fn value_mut(&mut self) -> &mut T {
        match self.as_mut() {
            Some(payload) => payload,
            None => panic!("value_mut() called on an empty Optional"),
        }
    }

    /// Returns a reference to the payload without checking presence in release builds.
    ///
    /// # Safety
    /// The container must hold a payload. Debug builds assert this.
    #[inline(always)]
    pub unsafe fn value_unchecked(&self) -> &T {
        contract_assert!(self.has_value, "value_unchecked() called on an empty Optional");
        // SAFETY: caller guarantees presence.
        unsafe { slot::assume_init_ref(&self.value) }
    }

    /// Returns a mutable reference to the payload without checking presence in release builds.
    ///
    /// # Safety
    /// The container must hold a payload. Debug builds assert this.
    #[inline(always)]
    pub unsafe fn value_unchecked_mut(&mut self) -> &mut T {
        contract_assert!(self.has_value, "value_unchecked_mut() called on an empty Optional");
        // SAFETY: caller guarantees presence.
        unsafe { slot::assume_init_mut(&mut self.value) }
    }

    /// Returns the payload, or [`EmptyAccessError`] when empty.
    #[inline]
    pub fn try_value(&self) -> Result<&T, EmptyAccessError> {
        self.as_ref().ok_or(EmptyAccessError)
    }

    /// Returns the payload mutably, or [`EmptyAccessError`] when empty.
    #[inline]
    pub fn try_value_mut(&mut self) -> Result<&mut T, EmptyAccessError> {
        self.as_mut().ok_or(EmptyAccessError)
    }

    /// Returns the payload if present, otherwise `default`.
    ///
    /// `default` must outlive the returned borrow, so a temporary default can
    /// never dangle.
    #[inline]
    pub fn get<'a>(&'a self, default: &'a T) -> &'a T {
        self.as_ref().unwrap_or(default)
    }

    /// Returns a clone of the payload if present, otherwise `default`.
    #[inline]
    pub fn get_or(&self, default: T) -> T
    where
        T: Clone,
    {
        match self.as_ref() {
            Some(payload) => payload.clone(),
            None => default,
        }
    }

    /// Returns a raw pointer to the payload, or null when empty.
    ///
    /// For handing the payload to interfaces that take a nullable pointer.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        if self.has_value {
            self.value.as_ptr()
        } else {
            ptr::null()
        }
    }

    /// Returns a raw mutable pointer to the payload, or null when empty.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        if self.has_value {
            self.value.as_mut_ptr()
        } else {
            ptr::null_mut()
        }
    }

    /// Iterates over the payload (zero or one item).
    #[inline]
    pub fn iter(&self) -> core::option::IntoIter<&T> {
        self.as_ref().into_iter()
    }

    /// Iterates mutably over the payload (zero or one item).
    #[inline]
    pub fn iter_mut(&mut self) -> core::option::IntoIter<&mut T> {
        self.as_mut().into_iter()
    }
}

impl<T> Drop for Optional<T> {
    fn drop(&mut self) {
        self.reset();
    }
}
