//! `proptest` strategy for `OptionalBox`, built on the `Option<T>` strategy.

use core::fmt;

use proptest::arbitrary::{any_with, Arbitrary};
use proptest::option::{self, OptionStrategy};
use proptest::strategy::{Map, Strategy};

use super::OptionalBox;

impl<T> Arbitrary for OptionalBox<T>
where
    T: Arbitrary + fmt::Debug,
{
    type Parameters = T::Parameters;
    type Strategy = Map<OptionStrategy<T::Strategy>, fn(Option<T>) -> Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        option::of(any_with::<T>(args)).prop_map(OptionalBox::from as fn(Option<T>) -> Self)
    }
}
