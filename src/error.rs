//! Error reported by the checked accessors.

/// Returned by [`OptionalBox::value`](crate::OptionalBox::value) and
/// [`OptionalBox::value_mut`](crate::OptionalBox::value_mut) when the box is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmptyAccessError;

impl core::fmt::Display for EmptyAccessError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("bad optional access")
    }
}

impl std::error::Error for EmptyAccessError {}
