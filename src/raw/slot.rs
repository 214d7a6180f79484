//! Unsafe, centralized operations on a `MaybeUninit<T>` payload slot.
//!
//! `Optional<T>` hosts its payload in a `MaybeUninit<T>` and tracks liveness
//! with a separate flag. These helpers are the only place that:
//! - writes a payload into the slot (`write`)
//! - moves a payload out of the slot (`read_out`)
//! - drops a payload in place (`drop_in_place`)
//! - views a payload as a reference (`assume_init_ref` / `assume_init_mut`)
//!
//! ## Core invariant
//! A slot holds a live `T` *exactly when* its owner's flag is set. Callers flip
//! the flag only after the corresponding helper returns, and clear it before
//! any code that could observe the slot runs again.

use core::mem::MaybeUninit;

/// Interprets an initialized slot as `&T`.
///
/// # Safety
/// - `slot` must hold a live `T`.
#[inline(always)]
pub(crate) unsafe fn assume_init_ref<T>(slot: &MaybeUninit<T>) -> &T {
    // SAFETY: caller asserts `slot` is initialized.
    unsafe { slot.assume_init_ref() }
}

/// Interprets an initialized slot as `&mut T`.
///
/// # Safety
/// - `slot` must hold a live `T`.
#[inline(always)]
pub(crate) unsafe fn assume_init_mut<T>(slot: &mut MaybeUninit<T>) -> &mut T {
    // SAFETY: caller asserts `slot` is initialized; `&mut` gives exclusivity.
    unsafe { slot.assume_init_mut() }
}

/// Writes `value` into an empty slot and returns a reference to it.
///
/// Writing over a live payload does not drop it; callers must have emptied the
/// slot first (I4: at most one live payload).
#[inline(always)]
pub(crate) fn write<T>(slot: &mut MaybeUninit<T>, value: T) -> &mut T {
    slot.write(value)
}

/// Moves the payload out of the slot, leaving its bytes logically uninitialized.
///
/// # Safety
/// - `slot` must hold a live `T`.
/// - The caller must clear its presence flag so the value is not read or
///   dropped a second time.
#[inline(always)]
pub(crate) unsafe fn read_out<T>(slot: &mut MaybeUninit<T>) -> T {
    // SAFETY: caller asserts initialization and takes over ownership.
    unsafe { slot.assume_init_read() }
}

/// Drops the payload in place.
///
/// # Safety
/// - `slot` must hold a live `T`.
/// - Must not be called more than once for the same payload.
#[inline(always)]
pub(crate) unsafe fn drop_in_place<T>(slot: &mut MaybeUninit<T>) {
    // SAFETY: caller asserts initialization and drop uniqueness.
    unsafe { slot.assume_init_drop() }
}
