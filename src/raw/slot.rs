//! Unsafe, centralized operations on a single `MaybeUninit<T>` slot.
//!
//! These helpers give one place to audit:
//! - in-place construction (`construct`)
//! - in-place destruction (`destroy`)
//! - moving a value out (`move_out`)
//! - conversion to references (`assume_init_ref` / `assume_init_mut`)
//!
//! ## Core invariant
//! A slot is initialized exactly between a `construct` and the matching
//! `destroy` or `move_out`. The owner tracks this with a presence flag; none
//! of these functions look at it.

use core::{mem::MaybeUninit, ptr};

/// Constructs `value` in the slot and returns a reference to it.
///
/// # Safety
/// - `slot` must not hold a live value; an existing one would be leaked.
#[inline(always)]
pub(crate) unsafe fn construct<T>(slot: &mut MaybeUninit<T>, value: T) -> &mut T {
    slot.write(value)
}

/// Runs the destructor of the value held in the slot.
///
/// # Safety
/// - `slot` must be initialized.
/// - Must not be called more than once for the same value.
#[inline(always)]
pub(crate) unsafe fn destroy<T>(slot: &mut MaybeUninit<T>) {
    // SAFETY: caller asserts initialization and drop uniqueness.
    unsafe { ptr::drop_in_place(slot.as_mut_ptr()) }
}

/// Bitwise-moves the value out of the slot.
///
/// # Safety
/// - `slot` must be initialized.
/// - The slot is logically vacant afterwards; it must not be destroyed or
///   read again until a new value is constructed.
#[inline(always)]
pub(crate) unsafe fn move_out<T>(slot: &MaybeUninit<T>) -> T {
    // SAFETY: caller asserts initialization and gives up the slot's copy.
    unsafe { slot.assume_init_read() }
}

/// Interprets an initialized slot as `&T`.
///
/// # Safety
/// - `slot` must be initialized.
#[inline(always)]
pub(crate) unsafe fn assume_init_ref<T>(slot: &MaybeUninit<T>) -> &T {
    // SAFETY: caller asserts `slot` is initialized.
    unsafe { slot.assume_init_ref() }
}

/// Interprets an initialized slot as `&mut T`.
///
/// # Safety
/// - `slot` must be initialized.
#[inline(always)]
pub(crate) unsafe fn assume_init_mut<T>(slot: &mut MaybeUninit<T>) -> &mut T {
    // SAFETY: caller asserts `slot` is initialized; `&mut` gives exclusivity.
    unsafe { slot.assume_init_mut() }
}
