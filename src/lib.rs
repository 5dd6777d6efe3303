//! # `optbox` - Inline Optional Container
//!
//! [`OptionalBox<T>`] holds either one `T` or nothing, in storage embedded in
//! the box itself. It never allocates.
//!
//! ## Lifetime Guarantees
//!
//! - **Exactly one teardown**: every value constructed into the box is either
//!   destroyed once or moved out once. Never both, never twice.
//! - **Flag follows the slot**: the presence flag is set only after a value is
//!   fully written and cleared before its destructor runs, so a panic in
//!   `T::clone` or `T::drop` cannot leave a half-built or twice-dropped value.
//! - **Destructive moves**: [`OptionalBox::take`] and
//!   [`OptionalBox::assign_from`] leave the source empty.
//!
//! ## Access
//!
//! | accessor | empty box |
//! |---|---|
//! | [`OptionalBox::value`] / [`OptionalBox::value_mut`] | `Err(EmptyAccessError)` |
//! | [`OptionalBox::get`] / [`OptionalBox::get_mut`] | `None` |
//! | [`OptionalBox::get_unchecked`] / [`OptionalBox::get_unchecked_mut`] | undefined behavior (`unsafe`, no check) |
//!
//! ## Architecture
//!
//! 1. **Raw slot layer** (`raw::slot`): the only code touching
//!    `MaybeUninit` unsafely. Construct, destroy, move out, reinterpret.
//! 2. **Container** (`optional_box`): owns the slot and the flag, routes all
//!    lifetime changes through one `construct_in_place` / `destroy_in_place`
//!    pair, and builds the assignment matrix on top.
//!
//! ## Features
//!
//! - `tracing`: emit `trace!` events on every in-place construction and
//!   destruction.
//! - `proptest`: implement `proptest::arbitrary::Arbitrary` for `OptionalBox<T>`.
//!
//! ## Example
//!
//! ```rust
//! use optbox::{EmptyAccessError, OptionalBox};
//!
//! let mut a = OptionalBox::with_value(5);
//! let mut b = OptionalBox::new();
//!
//! b.clone_from(&a);
//! *a.value_mut()? = 6;
//! assert_eq!(b.value(), Ok(&5));
//!
//! b.assign_from(&mut a);
//! assert_eq!(b.value(), Ok(&6));
//! assert_eq!(a.value(), Err(EmptyAccessError));
//! # Ok::<(), EmptyAccessError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod optional_box;
pub(crate) mod raw;

pub use error::EmptyAccessError;
pub use optional_box::OptionalBox;

// Compile-time assertions for the inline layout
const _: () = {
    use core::mem;

    // The box never grows beyond `Option<T>` for types without a niche.
    assert!(mem::size_of::<OptionalBox<u64>>() == mem::size_of::<Option<u64>>());
    assert!(mem::size_of::<OptionalBox<u32>>() == mem::size_of::<Option<u32>>());

    // Storage keeps the contained type's alignment.
    assert!(mem::align_of::<OptionalBox<u64>>() == mem::align_of::<u64>());
    assert!(mem::align_of::<OptionalBox<u128>>() == mem::align_of::<u128>());

    // Only the flag is added for small and zero-sized types.
    assert!(mem::size_of::<OptionalBox<u8>>() == 2);
    assert!(mem::size_of::<OptionalBox<()>>() == 1);
};
