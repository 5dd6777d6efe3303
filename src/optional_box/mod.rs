//! `OptionalBox` — zero or one value held in inline storage (no heap).
//!
//! The box owns a `MaybeUninit<T>` slot and a presence flag. All lifetime
//! management funnels through two private methods:
//! - `construct_in_place` writes a fully built value and only then sets the flag,
//! - `destroy_in_place` clears the flag and only then runs the destructor.
//!
//! Every public operation, including the assignment matrix in `assign`, is
//! expressed in terms of that pair plus `move_out_in_place`, so the flag and the
//! slot can never disagree.

mod assign;
#[cfg(feature = "proptest")]
mod arbitrary;
mod traits;


use core::mem::MaybeUninit;

use crate::error::EmptyAccessError;
use crate::raw::slot;

/// A container that holds either one `T` or nothing, stored inline.
///
/// Moves between boxes are destructive: [`take`](Self::take) and
/// [`assign_from`](Self::assign_from) leave the source empty.
///
/// # Example
/// ```rust
/// use optbox::OptionalBox;
///
/// let mut b = OptionalBox::new();
/// assert!(!b.has_value());
/// assert!(b.value().is_err());
///
/// b.assign(String::from("hi"));
/// assert_eq!(b.value().map(String::as_str), Ok("hi"));
///
/// b.reset();
/// assert!(!b.has_value());
/// ```
pub struct OptionalBox<T> {
    // Layout note: store `storage` first; keep `present` in tail padding.
    storage: MaybeUninit<T>,
    present: bool,
}

impl<T> OptionalBox<T> {
    /// Creates an empty box.
    #[inline]
    pub const fn new() -> Self {
        Self {
            storage: MaybeUninit::uninit(),
            present: false,
        }
    }

    /// Creates a box holding `value`.
    #[inline]
    pub fn with_value(value: T) -> Self {
        let mut this = Self::new();
        this.construct_in_place(value);
        this
    }

    /// Creates a box holding a clone of `value`.
    ///
    /// If `T::clone` panics, no box is produced and nothing leaks.
    #[inline]
    pub fn from_ref(value: &T) -> Self
    where
        T: Clone,
    {
        Self::with_value(value.clone())
    }

    /// Returns `true` if the box holds a value.
    #[inline(always)]
    pub const fn has_value(&self) -> bool {
        self.present
    }

    /// Returns a reference to the value without checking presence.
    ///
    /// # Safety
    /// The box must hold a value (`has_value()` is `true`). Calling this on an
    /// empty box is undefined behavior.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self) -> &T {
        // SAFETY: caller asserts the slot is initialized.
        unsafe { slot::assume_init_ref(&self.storage) }
    }

    /// Returns a mutable reference to the value without checking presence.
    ///
    /// # Safety
    /// The box must hold a value (`has_value()` is `true`). Calling this on an
    /// empty box is undefined behavior.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        // SAFETY: caller asserts the slot is initialized.
        unsafe { slot::assume_init_mut(&mut self.storage) }
    }

    /// Returns a raw pointer into the inline storage.
    ///
    /// The pointer is always non-null and aligned for `T`, but only points to
    /// a live value while [`has_value`](Self::has_value) is `true`. It is
    /// invalidated when the box moves.
    #[inline(always)]
    pub const fn as_ptr(&self) -> *const T {
        self.storage.as_ptr()
    }

    /// Returns a mutable raw pointer into the inline storage.
    ///
    /// Same validity rules as [`as_ptr`](Self::as_ptr).
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.storage.as_mut_ptr()
    }

    /// Returns a reference to the value.
    ///
    /// # Errors
    /// Returns [`EmptyAccessError`] if the box is empty.
    #[inline]
    pub fn value(&self) -> Result<&T, EmptyAccessError> {
        self.get().ok_or(EmptyAccessError)
    }

    /// Returns a mutable reference to the value.
    ///
    /// # Errors
    /// Returns [`EmptyAccessError`] if the box is empty.
    #[inline]
    pub fn value_mut(&mut self) -> Result<&mut T, EmptyAccessError> {
        self.get_mut().ok_or(EmptyAccessError)
    }

    /// Gets a shared reference to the value if present.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        if !self.present {
            return None;
        }
        // SAFETY: `present` is true.
        unsafe { Some(slot::assume_init_ref(&self.storage)) }
    }

    /// Gets an exclusive reference to the value if present.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        if self.present {
            // SAFETY: `present` is true.
            unsafe { Some(slot::assume_init_mut(&mut self.storage)) }
        } else {
            None
        }
    }

    /// Destroys the value if present. Calling it on an empty box does nothing.
    #[inline]
    pub fn reset(&mut self) {
        if self.present {
            self.destroy_in_place();
        }
    }

    /// Moves the value out, leaving the box empty.
    #[inline]
    pub fn take_value(&mut self) -> Option<T> {
        if self.present {
            Some(self.move_out_in_place())
        } else {
            None
        }
    }

    /// Moves this box's contents into a new box, leaving this one empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        let mut moved = Self::new();
        if self.present {
            moved.construct_in_place(self.move_out_in_place());
        }
        moved
    }

    /// Consumes the box, returning its contents as an `Option`.
    #[inline]
    pub fn into_option(mut self) -> Option<T> {
        self.take_value()
    }

    /// Destroys any current value, then constructs `value` in its place.
    ///
    /// Unlike [`assign`](Self::assign), this never goes through `T`'s
    /// assignment: the old value is torn down before the new one moves in.
    #[inline]
    pub fn emplace(&mut self, value: T) -> &mut T {
        self.reset();
        self.construct_in_place(value)
    }

    /// Returns the value, constructing it with `init` first if the box is empty.
    ///
    /// If `init` panics the box stays empty.
    pub fn get_or_insert_with<F>(&mut self, init: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if !self.present {
            self.construct_in_place(init());
        }
        // SAFETY: present, either before or via `construct_in_place`.
        unsafe { slot::assume_init_mut(&mut self.storage) }
    }

    /// Writes `value` into the vacant slot, then marks the box present.
    #[inline]
    fn construct_in_place(&mut self, value: T) -> &mut T {
        debug_assert!(!self.present, "construct into an occupied OptionalBox");
        #[cfg(feature = "tracing")]
        tracing::trace!(ty = core::any::type_name::<T>(), "construct_in_place");
        // SAFETY: the slot is vacant, so nothing is overwritten.
        let value = unsafe { slot::construct(&mut self.storage, value) };
        self.present = true;
        value
    }

    /// Marks the box empty, then runs the destructor of the held value.
    #[inline]
    fn destroy_in_place(&mut self) {
        debug_assert!(self.present, "destroy of an empty OptionalBox");
        #[cfg(feature = "tracing")]
        tracing::trace!(ty = core::any::type_name::<T>(), "destroy_in_place");
        // Flag goes first: a panicking destructor must not be rerun by `Drop`.
        self.present = false;
        // SAFETY: the slot was initialized and is now logically vacant.
        unsafe { slot::destroy(&mut self.storage) }
    }

    /// Marks the box empty and hands the held value to the caller.
    #[inline]
    fn move_out_in_place(&mut self) -> T {
        debug_assert!(self.present, "move out of an empty OptionalBox");
        self.present = false;
        // SAFETY: the slot was initialized; the flag now says it is vacant.
        unsafe { slot::move_out(&self.storage) }
    }
}

impl<T> Drop for OptionalBox<T> {
    fn drop(&mut self) {
        self.reset();
    }
}
