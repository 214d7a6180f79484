//! Crate-internal helper macros.

/// Debug-asserts an access contract.
///
/// Active only with `debug_assertions`; release builds compile it out and the
/// caller's `unsafe` obligation stands on its own.
macro_rules! contract_assert {
    ($cond:expr, $message:literal) => {
        debug_assert!($cond, "contract violated: {}", $message)
    };
}

/// Emits a `trace`-level event for a state-changing operation on `Optional<$ty>`.
///
/// Expands to nothing unless the `tracing` feature is enabled.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($ty:ty, $op:literal, $had_value:expr) => {
        ::tracing::trace!(
            op = $op,
            had_value = $had_value,
            type_name = ::core::any::type_name::<$ty>(),
            "optional state change"
        )
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($ty:ty, $op:literal, $had_value:expr) => {{
        let _ = $had_value;
    }};
}

pub(crate) use contract_assert;
pub(crate) use trace_event;
