//! Standard trait impls for `OptionalBox`.

use core::fmt;

use super::OptionalBox;

impl<T> Default for OptionalBox<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for OptionalBox<T> {
    /// Copy-constructs a new box. If `T::clone` panics, the partially built
    /// box is dropped empty.
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        if let Some(value) = self.get() {
            copy.construct_in_place(value.clone());
        }
        copy
    }

    /// Copy-assigns, replicating `source`'s presence exactly.
    fn clone_from(&mut self, source: &Self) {
        self.assign_cloned_from(source);
    }
}

impl<T> From<T> for OptionalBox<T> {
    fn from(value: T) -> Self {
        Self::with_value(value)
    }
}

impl<T> From<Option<T>> for OptionalBox<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::with_value(value),
            None => Self::new(),
        }
    }
}

impl<T> From<OptionalBox<T>> for Option<T> {
    fn from(value: OptionalBox<T>) -> Self {
        value.into_option()
    }
}

impl<T: fmt::Debug> fmt::Debug for OptionalBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => f.debug_tuple("OptionalBox").field(value).finish(),
            None => f.write_str("OptionalBox(<empty>)"),
        }
    }
}
