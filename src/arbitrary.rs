//! `proptest` strategies for `Optional<T>` (feature `proptest`).

use proptest::arbitrary::{any_with, Arbitrary};
use proptest::option::OptionStrategy;
use proptest::strategy::{Map, Strategy};

use crate::Optional;

/// Generates empty and present containers whose payloads come from `element`.
pub fn of<S>(element: S) -> impl Strategy<Value = Optional<S::Value>>
where
    S: Strategy,
{
    proptest::option::of(element).prop_map(Optional::from)
}

impl<T: Arbitrary> Arbitrary for Optional<T> {
    type Parameters = T::Parameters;
    type Strategy = Map<OptionStrategy<T::Strategy>, fn(Option<T>) -> Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        proptest::option::of(any_with::<T>(args)).prop_map(Optional::from as fn(Option<T>) -> Self)
    }
}
