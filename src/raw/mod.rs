//! Raw storage building blocks.
//!
//! Every `MaybeUninit` / `ptr::*` operation the crate performs lives in
//! [`slot`]. `Optional<T>` pairs these with its presence flag; nothing above
//! this layer touches uninitialized memory directly.

pub(crate) mod slot;
