//! Raw building blocks for inline storage.
//!
//! Every unsafe `MaybeUninit` operation in the crate lives in [`slot`].
//! Higher layers (`optional_box`) call into it and keep the presence flag in
//! step with what the slot actually holds.

pub(crate) mod slot;
