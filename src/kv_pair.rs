//! [`KVPair`] is a single key-value entry of an [`AssocArray`](crate::AssocArray).

use std::fmt;

/// A key and the value bound to it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KVPair<K, V> {
    key: K,
    value: V,
}

impl<K, V> KVPair<K, V> {
    /// Creates a new [`KVPair`].
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_array::KVPair;
    ///
    /// let pair = KVPair::new("a", "apple");
    /// assert_eq!(pair.key(), &"a");
    /// assert_eq!(pair.value(), &"apple");
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Returns a reference to the key.
    #[inline]
    #[must_use]
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Returns a reference to the value.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Returns a mutable reference to the value.
    ///
    /// The key cannot be modified since that could introduce duplicate keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_array::KVPair;
    ///
    /// let mut pair = KVPair::new(1, 1);
    /// *pair.value_mut() += 2;
    /// assert_eq!(pair.value(), &3);
    /// ```
    #[inline]
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Returns the key along with a mutable reference to the value.
    #[inline]
    pub(crate) fn split_mut(&mut self) -> (&K, &mut V) {
        (&self.key, &mut self.value)
    }

    /// Replaces the value, returning the old one.
    #[inline]
    pub(crate) fn replace_value(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }

    /// Consumes the [`KVPair`], returning the key and the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_array::KVPair;
    ///
    /// let pair = KVPair::new('k', 11);
    /// assert_eq!(pair.into_inner(), ('k', 11));
    /// ```
    #[inline]
    pub fn into_inner(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for KVPair<K, V> {
    #[inline]
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

impl<K, V> fmt::Display for KVPair<K, V>
where
    K: fmt::Display,
    V: fmt::Display,
{
    /// Renders the pair as `key: value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_array::KVPair;
    ///
    /// assert_eq!(KVPair::new("a", "apple").to_string(), "a: apple");
    /// ```
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}
