//! Error types returned by [`AssocArray`](crate::AssocArray) operations.

/// [`NullKeyError`] is returned when an absent key is given to
/// [`AssocArray::set`](crate::AssocArray::set).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, thiserror::Error)]
#[error("null keys are not permitted")]
pub struct NullKeyError;

/// [`KeyNotFoundError`] is returned when the key is absent or not bound to any value.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, thiserror::Error)]
#[error("key not found")]
pub struct KeyNotFoundError;

/// Any error an [`AssocArray`](crate::AssocArray) operation can return.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// An absent key was given to `set`.
    #[error(transparent)]
    NullKey(#[from] NullKeyError),
    /// The key is absent or not bound to any value.
    #[error(transparent)]
    KeyNotFound(#[from] KeyNotFoundError),
}
