//! # `inline-optional` - Inline Optional Values
//!
//! An `Optional<T>` holds zero or one `T` in inline storage: no heap
//! allocation, no sentinel values, no dynamic dispatch. Construction,
//! destruction, copy and move of the payload stay under the caller's control
//! and cost exactly what the payload's own operations cost.
//!
//! ## Layers
//!
//! - `raw::slot` concentrates every `MaybeUninit` operation in one audited place.
//! - [`Optional`] pairs a slot with a presence flag and keeps the two in sync.
//! - [`EmptyAccessError`] is the typed error of the checked accessors.
//!
//! ## Access contract
//!
//! | Accessor | Empty container |
//! |---|---|
//! | [`Optional::value`] / `*` | panics |
//! | [`Optional::try_value`] | `Err(EmptyAccessError)` |
//! | [`Optional::value_unchecked`] | debug assertion, UB in release (`unsafe`) |
//! | [`Optional::as_ptr`] | null pointer |
//! | [`Optional::get`] | the supplied default |
//!
//! ## Features
//!
//! - `tracing`: emit `trace`-level events for state changes.
//! - `proptest`: `Arbitrary` for `Optional<T>` and the [`arbitrary::of`] strategy.
//!
//! ## Example
//!
//! ```rust
//! use inline_optional::Optional;
//!
//! let mut a = Optional::from_value(String::from("hello"));
//! let b = a.clone();
//! a.reset();
//!
//! assert!(!a.has_value());
//! assert_eq!(b.value(), "hello");
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod macros;
mod raw;

pub mod error;
pub mod optional;

#[cfg(feature = "proptest")]
pub mod arbitrary;

pub use error::EmptyAccessError;
pub use optional::Optional;

// Compile-time assertions for the inline layout.
const _: () = {
    use core::mem;

    // Same alignment as the payload; the flag costs at most one alignment unit.
    assert!(mem::align_of::<Optional<u64>>() == mem::align_of::<u64>());
    assert!(mem::size_of::<Optional<u64>>() <= mem::size_of::<u64>() + mem::align_of::<u64>());

    assert!(mem::size_of::<Optional<u8>>() == 2);
    assert!(mem::size_of::<Optional<()>>() == 1);

    assert!(mem::align_of::<Optional<[u32; 3]>>() == mem::align_of::<[u32; 3]>());
    assert!(
        mem::size_of::<Optional<[u32; 3]>>()
            <= mem::size_of::<[u32; 3]>() + mem::align_of::<[u32; 3]>()
    );
};
