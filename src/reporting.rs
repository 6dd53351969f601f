//! [`Reporting`] wraps an [`AssocArray`] and emits a [`tracing`] event for every call.

use super::{AssocArray, KeyNotFoundError, NullKeyError};
use equivalent::Equivalent;
use std::fmt::{self, Debug, Display};
use tracing::{info, warn};

/// [`AssocArray`] wrapper that reports each call before forwarding it.
///
/// Every forwarded call is announced with an `INFO` event in the form `name.set(key, value)`,
/// where an absent key is shown as `null`. It is followed by an event describing the outcome:
/// `OK` for calls without a result, the result itself otherwise, and `FAILED` at `WARN` for
/// failures.
/// Return values and errors are passed back unchanged.
pub struct Reporting<K, V> {
    name: String,
    array: AssocArray<K, V>,
}

impl<K, V> Reporting<K, V> {
    /// Creates a [`Reporting`] wrapper around a new, empty [`AssocArray`].
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_array::Reporting;
    ///
    /// let s2s: Reporting<String, String> = Reporting::new("s2s");
    /// assert_eq!(s2s.name(), "s2s");
    /// ```
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_array(name, AssocArray::new())
    }

    /// Creates a [`Reporting`] wrapper around the supplied [`AssocArray`].
    #[inline]
    #[must_use]
    pub fn with_array(name: impl Into<String>, array: AssocArray<K, V>) -> Self {
        Self {
            name: name.into(),
            array,
        }
    }

    /// Returns the name used in reports.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a reference to the wrapped [`AssocArray`] without reporting.
    #[inline]
    #[must_use]
    pub fn inner(&self) -> &AssocArray<K, V> {
        &self.array
    }

    /// Consumes the wrapper, returning the [`AssocArray`].
    #[inline]
    pub fn into_inner(self) -> AssocArray<K, V> {
        self.array
    }

    /// Reports and forwards [`AssocArray::size`].
    #[inline]
    pub fn size(&self) -> usize {
        info!(array = %self.name, "{}.size()", self.name);
        let size = self.array.size();
        info!(array = %self.name, size, "{size}");
        size
    }
}

impl<K, V> Reporting<K, V>
where
    K: Display + Eq,
    V: Display,
{
    /// Reports and forwards [`AssocArray::set`].
    ///
    /// # Errors
    ///
    /// Returns [`NullKeyError`] if the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_array::Reporting;
    ///
    /// let mut s2s: Reporting<&str, &str> = Reporting::new("s2s");
    /// assert!(s2s.set("a", "apple").is_ok());
    /// assert!(s2s.set(None, "nothing").is_err());
    /// assert_eq!(s2s.size(), 1);
    /// ```
    #[inline]
    pub fn set(&mut self, key: impl Into<Option<K>>, value: V) -> Result<(), NullKeyError> {
        let key = key.into();
        info!(array = %self.name, "{}.set({}, {value})", self.name, Nullable(key.as_ref()));
        let result = self.array.set(key, value);
        self.report(result.map(|()| "OK"));
        result
    }

    /// Reports and forwards [`AssocArray::get`].
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFoundError`] if the key is absent or not bound to any value.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_array::Reporting;
    ///
    /// let mut b2s: Reporting<u128, &str> = Reporting::new("b2s");
    /// assert!(b2s.set(1, "Vertex A").is_ok());
    /// assert_eq!(b2s.get(&1), Ok(&"Vertex A"));
    /// assert!(b2s.get(&2).is_err());
    /// ```
    #[inline]
    pub fn get<'q, Q>(&self, key: impl Into<Option<&'q Q>>) -> Result<&V, KeyNotFoundError>
    where
        Q: Display + Equivalent<K> + ?Sized + 'q,
    {
        let key = key.into();
        info!(array = %self.name, "{}.get({})", self.name, Nullable(key));
        let result = self.array.get(key);
        self.report(result);
        result
    }

    /// Reports and forwards [`AssocArray::has_key`].
    #[inline]
    pub fn has_key<'q, Q>(&self, key: impl Into<Option<&'q Q>>) -> bool
    where
        Q: Display + Equivalent<K> + ?Sized + 'q,
    {
        let key = key.into();
        info!(array = %self.name, "{}.hasKey({})", self.name, Nullable(key));
        let found = self.array.has_key(key);
        info!(array = %self.name, found, "{found}");
        found
    }

    /// Reports and forwards [`AssocArray::remove`].
    #[inline]
    pub fn remove<'q, Q>(&mut self, key: impl Into<Option<&'q Q>>)
    where
        Q: Display + Equivalent<K> + ?Sized + 'q,
    {
        let key = key.into();
        info!(array = %self.name, "{}.remove({})", self.name, Nullable(key));
        self.array.remove(key);
        info!(array = %self.name, "OK");
    }

    /// Reports the outcome of a forwarded call.
    fn report<T: Display, E: Display>(&self, result: Result<T, E>) {
        match result {
            Ok(value) => info!(array = %self.name, "{value}"),
            Err(error) => warn!(array = %self.name, %error, "FAILED"),
        }
    }
}

impl<K, V> AsRef<AssocArray<K, V>> for Reporting<K, V> {
    #[inline]
    fn as_ref(&self) -> &AssocArray<K, V> {
        &self.array
    }
}

impl<K, V> Debug for Reporting<K, V>
where
    K: Debug,
    V: Debug,
{
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reporting")
            .field("name", &self.name)
            .field("array", &self.array)
            .finish()
    }
}

impl<K, V> Display for Reporting<K, V>
where
    K: Display,
    V: Display,
{
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.array, f)
    }
}

/// Renders a key, or `null` if it is absent.
struct Nullable<'k, Q: ?Sized>(Option<&'k Q>);

impl<Q> Display for Nullable<'_, Q>
where
    Q: Display + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(key) => Display::fmt(key, f),
            None => f.write_str("null"),
        }
    }
}
