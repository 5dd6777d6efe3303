//! Assignment into an `OptionalBox`, from a bare value or from another box.
//!
//! | self    | source          | result                                   |
//! |---------|-----------------|------------------------------------------|
//! | empty   | value           | construct in place                       |
//! | present | value           | assign through `T`'s own assignment      |
//! | present | empty box       | destroy, become empty                    |
//! | empty   | empty box       | nothing                                  |
//! | present | present box     | assign through `T`'s own assignment      |
//!
//! Copy assignment between boxes is `Clone::clone_from` (see `traits`).

use super::OptionalBox;
use crate::raw::slot;

impl<T> OptionalBox<T> {
    /// Moves `value` into the box and returns a reference to it.
    ///
    /// An empty box constructs `value` in place. A present box move-assigns it
    /// over the held value, which drops the old one. Never empties the box.
    pub fn assign(&mut self, value: T) -> &mut T {
        if self.present {
            // SAFETY: `present` is true.
            let held = unsafe { slot::assume_init_mut(&mut self.storage) };
            *held = value;
            held
        } else {
            self.construct_in_place(value)
        }
    }

    /// Copies `value` into the box and returns a reference to it.
    ///
    /// An empty box constructs a clone in place. A present box goes through
    /// `T::clone_from`, reusing the held value. If that panics the box stays
    /// present and the held value is whatever `T` leaves behind.
    pub fn assign_ref(&mut self, value: &T) -> &mut T
    where
        T: Clone,
    {
        if self.present {
            // SAFETY: `present` is true.
            let held = unsafe { slot::assume_init_mut(&mut self.storage) };
            held.clone_from(value);
            held
        } else {
            self.construct_in_place(value.clone())
        }
    }

    /// Moves the contents of `source` into `self`, leaving `source` empty.
    ///
    /// `self` ends up with exactly the presence `source` had: an empty source
    /// empties `self`.
    pub fn assign_from(&mut self, source: &mut Self) {
        match (self.present, source.present) {
            (true, true) => {
                let value = source.move_out_in_place();
                // SAFETY: `self.present` is true.
                unsafe { *slot::assume_init_mut(&mut self.storage) = value };
            }
            (false, true) => {
                let value = source.move_out_in_place();
                self.construct_in_place(value);
            }
            (true, false) => self.destroy_in_place(),
            (false, false) => {}
        }
    }

    /// Copy-assigns from another box; shared by `Clone::clone_from`.
    pub(super) fn assign_cloned_from(&mut self, source: &Self)
    where
        T: Clone,
    {
        match (self.present, source.present) {
            (true, true) => {
                // SAFETY: both slots are initialized; `&mut self` and `&Self`
                // cannot alias.
                unsafe {
                    slot::assume_init_mut(&mut self.storage)
                        .clone_from(slot::assume_init_ref(&source.storage));
                }
            }
            (false, true) => {
                // SAFETY: `source.present` is true.
                let value = unsafe { slot::assume_init_ref(&source.storage) }.clone();
                self.construct_in_place(value);
            }
            (true, false) => self.destroy_in_place(),
            (false, false) => {}
        }
    }
}
