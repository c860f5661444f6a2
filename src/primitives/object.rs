//! Deep copies through a JSON round trip.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{CodecError, Result};

/// Clones `value` by serializing it to JSON and deserializing a new instance.
///
/// # Errors
///
/// Returns [`CodecError::Serialization`] when either direction fails.
pub fn deep_clone<T>(value: &T) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    let json = serde_json::to_string(value).map_err(CodecError::from)?;
    Ok(serde_json::from_str(&json).map_err(CodecError::from)?)
}

/// Like [`deep_clone`], but reports failure as `None`.
pub fn try_deep_clone<T>(value: &T) -> Option<T>
where
    T: Serialize + DeserializeOwned,
{
    match deep_clone(value) {
        Ok(copy) => Some(copy),
        Err(e) => {
            tracing::debug!(error = %e, "deep clone failed");
            None
        }
    }
}

/// Method form of [`deep_clone`] and [`try_deep_clone`].
///
/// # Examples
///
/// ```
/// use extkit::primitives::DeepClone;
///
/// let original = vec![("a".to_string(), 1)];
/// let copy = original.deep_clone().unwrap();
/// assert_eq!(copy, original);
/// ```
pub trait DeepClone: Sized {
    /// See [`deep_clone`].
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Serialization`] when either direction fails.
    fn deep_clone(&self) -> Result<Self>;

    /// See [`try_deep_clone`].
    fn try_deep_clone(&self) -> Option<Self>;
}

impl<T> DeepClone for T
where
    T: Serialize + DeserializeOwned,
{
    fn deep_clone(&self) -> Result<Self> {
        deep_clone(self)
    }

    fn try_deep_clone(&self) -> Option<Self> {
        try_deep_clone(self)
    }
}
