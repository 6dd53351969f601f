//! [`AssocArray`] is an associative array backed by a linear sequence of key-value pairs.

use super::{KVPair, KeyNotFoundError, NullKeyError};
use equivalent::Equivalent;
use std::fmt::{self, Debug, Display};
use std::iter::FusedIterator;
use std::{slice, vec};

/// The number of slots in a default [`AssocArray`].
pub const DEFAULT_CAPACITY: usize = 16;

/// Associative array of key-value pairs stored in a linear, dynamically growing sequence.
///
/// [`AssocArray`] keeps its pairs in a flat array of slots and looks keys up by scanning the
/// occupied slots from the start; it never hashes or orders keys, therefore any `K: Eq` can be
/// used as a key.
///
/// ## Slot layout
///
/// * The first [`size`](AssocArray::size) slots are occupied, and the rest are vacant.
/// * The array starts with [`DEFAULT_CAPACITY`] slots, and the number of slots doubles when a
///   [`set`](AssocArray::set) finds every slot occupied.
/// * A new key is placed in the first vacant slot.
/// * [`remove`](AssocArray::remove) moves the pair in the last occupied slot into the slot of the
///   removed pair, therefore insertion order is not preserved after a removal.
///
/// ## Absent keys
///
/// Keys are passed as anything convertible into an [`Option`]. An absent key is rejected by
/// [`set`](AssocArray::set), and is never found by the other methods.
pub struct AssocArray<K, V> {
    /// Key-value pair slots; the length of the vector is the capacity.
    slots: Vec<Option<KVPair<K, V>>>,

    /// The number of occupied slots at the front of `slots`.
    size: usize,
}

/// An iterator over the entries of an [`AssocArray`].
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    slots: slice::Iter<'a, Option<KVPair<K, V>>>,
}

/// A mutable iterator over the entries of an [`AssocArray`].
#[derive(Debug)]
pub struct IterMut<'a, K, V> {
    slots: slice::IterMut<'a, Option<KVPair<K, V>>>,
}

/// An iterator that moves out of an [`AssocArray`].
#[derive(Debug)]
pub struct IntoIter<K, V> {
    slots: vec::IntoIter<Option<KVPair<K, V>>>,
}

impl<K, V> AssocArray<K, V> {
    /// Creates an empty [`AssocArray`] with [`DEFAULT_CAPACITY`] slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_array::{AssocArray, DEFAULT_CAPACITY};
    ///
    /// let array: AssocArray<u64, u32> = AssocArray::new();
    ///
    /// assert_eq!(array.size(), 0);
    /// assert_eq!(array.capacity(), DEFAULT_CAPACITY);
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty [`AssocArray`] with the specified number of slots.
    ///
    /// An [`AssocArray`] always has at least one slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_array::AssocArray;
    ///
    /// let array: AssocArray<u64, u32> = AssocArray::with_capacity(3);
    /// assert_eq!(array.capacity(), 3);
    ///
    /// let array: AssocArray<u64, u32> = AssocArray::with_capacity(0);
    /// assert_eq!(array.capacity(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: (0..capacity.max(1)).map(|_| None).collect(),
            size: 0,
        }
    }

    /// Returns the number of key-value pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_array::AssocArray;
    ///
    /// let mut array: AssocArray<u64, u32> = AssocArray::new();
    ///
    /// assert!(array.set(1, 0).is_ok());
    /// assert!(array.set(1, 1).is_ok());
    /// assert_eq!(array.size(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the [`AssocArray`] holds no key-value pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_array::AssocArray;
    ///
    /// let mut array: AssocArray<u64, u32> = AssocArray::new();
    ///
    /// assert!(array.is_empty());
    /// assert!(array.set(1, 0).is_ok());
    /// assert!(!array.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_array::AssocArray;
    ///
    /// let mut array: AssocArray<u64, u32> = AssocArray::with_capacity(2);
    ///
    /// assert!(array.set(1, 0).is_ok());
    /// assert!(array.set(2, 0).is_ok());
    /// assert_eq!(array.capacity(), 2);
    ///
    /// assert!(array.set(3, 0).is_ok());
    /// assert_eq!(array.capacity(), 4);
    /// ```
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Removes every key-value pair.
    ///
    /// The number of slots is retained.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_array::AssocArray;
    ///
    /// let mut array: AssocArray<u64, u32> = AssocArray::with_capacity(1);
    ///
    /// assert!(array.set(1, 0).is_ok());
    /// assert!(array.set(2, 0).is_ok());
    /// array.clear();
    /// assert!(array.is_empty());
    /// assert_eq!(array.capacity(), 2);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.slots[..self.size].iter_mut().for_each(|slot| {
            slot.take();
        });
        self.size = 0;
    }

    /// Returns an iterator over the key-value pairs in slot order.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_array::AssocArray;
    ///
    /// let mut array: AssocArray<char, u32> = AssocArray::new();
    ///
    /// assert!(array.set('a', 1).is_ok());
    /// assert!(array.set('b', 2).is_ok());
    /// assert!(array.set('c', 3).is_ok());
    /// array.remove(&'a');
    ///
    /// let keys: Vec<char> = array.iter().map(|(k, _)| *k).collect();
    /// assert_eq!(keys, ['c', 'b']);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            slots: self.slots[..self.size].iter(),
        }
    }

    /// Returns an iterator over the key-value pairs in slot order that allows modifying values.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_array::AssocArray;
    ///
    /// let mut array: AssocArray<u64, u32> = AssocArray::new();
    ///
    /// assert!(array.set(1, 1).is_ok());
    /// assert!(array.set(2, 2).is_ok());
    /// array.iter_mut().for_each(|(_, v)| *v *= 10);
    ///
    /// assert_eq!(array.get(&2), Ok(&20));
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            slots: self.slots[..self.size].iter_mut(),
        }
    }

    /// Grows the slot array if every slot is occupied.
    fn reserve_slot(&mut self) {
        if self.size >= self.capacity() {
            self.expand();
        }
    }

    /// Doubles the number of slots, keeping the occupied slots in place.
    fn expand(&mut self) {
        let capacity = self.capacity() * 2;
        self.slots.resize_with(capacity, || None);
    }
}

impl<K, V> AssocArray<K, V>
where
    K: Eq,
{
    /// Binds the value to the key.
    ///
    /// The value replaces the current one in place if the key already exists, otherwise the new
    /// key-value pair takes the first vacant slot.
    ///
    /// # Errors
    ///
    /// Returns [`NullKeyError`] if the key is absent; the [`AssocArray`] is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_array::{AssocArray, NullKeyError};
    ///
    /// let mut array: AssocArray<&str, &str> = AssocArray::new();
    ///
    /// assert!(array.set("a", "apple").is_ok());
    /// assert!(array.set("a", "avocado").is_ok());
    /// assert_eq!(array.get("a"), Ok(&"avocado"));
    ///
    /// assert_eq!(array.set(None, "nothing"), Err(NullKeyError));
    /// assert_eq!(array.size(), 1);
    /// ```
    #[inline]
    pub fn set(&mut self, key: impl Into<Option<K>>, value: V) -> Result<(), NullKeyError> {
        let key = key.into().ok_or(NullKeyError)?;
        self.upsert(key, value);
        Ok(())
    }

    /// Returns a reference to the value bound to the key.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFoundError`] if the key is absent or not bound to any value.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_array::{AssocArray, KeyNotFoundError};
    ///
    /// let mut array: AssocArray<String, u32> = AssocArray::new();
    ///
    /// assert_eq!(array.get("one"), Err(KeyNotFoundError));
    /// assert!(array.set(String::from("one"), 1).is_ok());
    /// assert_eq!(array.get("one"), Ok(&1));
    /// assert_eq!(array.get(None::<&str>), Err(KeyNotFoundError));
    /// ```
    #[inline]
    pub fn get<'q, Q>(&self, key: impl Into<Option<&'q Q>>) -> Result<&V, KeyNotFoundError>
    where
        Q: Equivalent<K> + ?Sized + 'q,
    {
        let index = key
            .into()
            .and_then(|key| self.find(key))
            .ok_or(KeyNotFoundError)?;
        self.slots[index]
            .as_ref()
            .map(KVPair::value)
            .ok_or(KeyNotFoundError)
    }

    /// Returns a mutable reference to the value bound to the key.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFoundError`] if the key is absent or not bound to any value.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_array::AssocArray;
    ///
    /// let mut array: AssocArray<u64, u32> = AssocArray::new();
    ///
    /// assert!(array.get_mut(&1).is_err());
    /// assert!(array.set(1, 1).is_ok());
    /// if let Ok(v) = array.get_mut(&1) {
    ///     *v += 1;
    /// }
    /// assert_eq!(array.get(&1), Ok(&2));
    /// ```
    #[inline]
    pub fn get_mut<'q, Q>(
        &mut self,
        key: impl Into<Option<&'q Q>>,
    ) -> Result<&mut V, KeyNotFoundError>
    where
        Q: Equivalent<K> + ?Sized + 'q,
    {
        let index = key
            .into()
            .and_then(|key| self.find(key))
            .ok_or(KeyNotFoundError)?;
        self.slots[index]
            .as_mut()
            .map(KVPair::value_mut)
            .ok_or(KeyNotFoundError)
    }

    /// Returns `true` if the key is bound to a value.
    ///
    /// An absent key is never searched for.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_array::AssocArray;
    ///
    /// let mut array: AssocArray<u64, u32> = AssocArray::new();
    ///
    /// assert!(!array.has_key(&1));
    /// assert!(array.set(1, 0).is_ok());
    /// assert!(array.has_key(&1));
    /// assert!(!array.has_key(None::<&u64>));
    /// ```
    #[inline]
    pub fn has_key<'q, Q>(&self, key: impl Into<Option<&'q Q>>) -> bool
    where
        Q: Equivalent<K> + ?Sized + 'q,
    {
        match key.into() {
            Some(key) => self.find(key).is_some(),
            None => false,
        }
    }

    /// Removes the key-value pair if the key exists.
    ///
    /// It does nothing if the key is absent or not bound to any value. The last key-value pair
    /// is moved into the slot of the removed one.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_array::AssocArray;
    ///
    /// let mut array: AssocArray<&str, &str> = AssocArray::new();
    ///
    /// assert!(array.set("a", "apple").is_ok());
    /// assert!(array.set("A", "aardvark").is_ok());
    ///
    /// array.remove("aardvark");
    /// assert_eq!(array.size(), 2);
    ///
    /// array.remove("a");
    /// assert_eq!(array.size(), 1);
    /// assert!(!array.has_key("a"));
    /// ```
    #[inline]
    pub fn remove<'q, Q>(&mut self, key: impl Into<Option<&'q Q>>)
    where
        Q: Equivalent<K> + ?Sized + 'q,
    {
        let _removed = self.remove_entry(key);
    }

    /// Removes the key-value pair if the key exists, and returns it.
    ///
    /// Returns `None` if the key is absent or not bound to any value. The last key-value pair is
    /// moved into the slot of the removed one.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_array::AssocArray;
    ///
    /// let mut array: AssocArray<u64, u32> = AssocArray::new();
    ///
    /// assert!(array.remove_entry(&1).is_none());
    /// assert!(array.set(1, 0).is_ok());
    /// assert_eq!(array.remove_entry(&1), Some((1, 0)));
    /// ```
    #[inline]
    pub fn remove_entry<'q, Q>(&mut self, key: impl Into<Option<&'q Q>>) -> Option<(K, V)>
    where
        Q: Equivalent<K> + ?Sized + 'q,
    {
        let index = self.find(key.into()?)?;
        let last = self.size - 1;
        self.slots.swap(index, last);
        self.size = last;
        self.slots[last].take().map(KVPair::into_inner)
    }

    /// Replaces the value of an existing key, or appends a new key-value pair.
    ///
    /// The slot array grows before the key is searched for.
    pub(crate) fn upsert(&mut self, key: K, value: V) {
        self.reserve_slot();
        match self.find(&key).and_then(|index| self.slots[index].as_mut()) {
            Some(pair) => {
                pair.replace_value(value);
            }
            None => {
                self.slots[self.size] = Some(KVPair::new(key, value));
                self.size += 1;
            }
        }
    }

    /// Returns the index of the first occupied slot holding the key.
    ///
    /// A vacant slot below `size` ends the scan.
    fn find<Q>(&self, key: &Q) -> Option<usize>
    where
        Q: Equivalent<K> + ?Sized,
    {
        for (index, slot) in self.slots[..self.size].iter().enumerate() {
            let Some(pair) = slot else {
                return None;
            };
            if key.equivalent(pair.key()) {
                return Some(index);
            }
        }
        None
    }
}

impl<K, V> Clone for AssocArray<K, V>
where
    K: Clone,
    V: Clone,
{
    /// Copies every key-value pair into a new [`AssocArray`] with [`DEFAULT_CAPACITY`] slots,
    /// growing it as needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_array::AssocArray;
    ///
    /// let mut array: AssocArray<u64, u32> = AssocArray::new();
    /// assert!(array.set(1, 0).is_ok());
    ///
    /// let copy = array.clone();
    /// assert!(array.set(1, 1).is_ok());
    /// assert_eq!(copy.get(&1), Ok(&0));
    /// ```
    #[inline]
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        for pair in self.slots[..self.size].iter().flatten() {
            copy.reserve_slot();
            copy.slots[copy.size] = Some(pair.clone());
            copy.size += 1;
        }
        copy
    }
}

impl<K, V> Debug for AssocArray<K, V>
where
    K: Debug,
    V: Debug,
{
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Default for AssocArray<K, V> {
    /// Creates an empty [`AssocArray`] with [`DEFAULT_CAPACITY`] slots.
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Display for AssocArray<K, V>
where
    K: Display,
    V: Display,
{
    /// Renders the key-value pairs in slot order.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_array::AssocArray;
    ///
    /// let mut array: AssocArray<&str, &str> = AssocArray::new();
    /// assert_eq!(array.to_string(), "{}");
    ///
    /// assert!(array.set("a", "apple").is_ok());
    /// assert!(array.set("A", "aardvark").is_ok());
    /// assert_eq!(array.to_string(), "{ a: apple, A: aardvark }");
    /// ```
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("{}");
        }
        f.write_str("{ ")?;
        for (index, pair) in self.slots[..self.size].iter().flatten().enumerate() {
            if index != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{pair}")?;
        }
        f.write_str(" }")
    }
}

impl<K, V> Eq for AssocArray<K, V>
where
    K: Eq,
    V: Eq,
{
}

impl<K, V> Extend<(K, V)> for AssocArray<K, V>
where
    K: Eq,
{
    #[inline]
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        iter.into_iter().for_each(|(k, v)| self.upsert(k, v));
    }
}

impl<K, V> FromIterator<(K, V)> for AssocArray<K, V>
where
    K: Eq,
{
    #[inline]
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<K, V> IntoIterator for AssocArray<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    #[inline]
    fn into_iter(mut self) -> Self::IntoIter {
        self.slots.truncate(self.size);
        IntoIter {
            slots: self.slots.into_iter(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a AssocArray<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut AssocArray<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K, V> PartialEq for AssocArray<K, V>
where
    K: Eq,
    V: PartialEq,
{
    /// Compares two [`AssocArray`] instances regardless of slot order and capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_array::AssocArray;
    ///
    /// let a: AssocArray<u64, u32> = [(1, 1), (2, 2)].into_iter().collect();
    /// let b: AssocArray<u64, u32> = [(2, 2), (1, 1)].into_iter().collect();
    /// assert_eq!(a, b);
    /// ```
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
            && self
                .iter()
                .all(|(k, v)| other.get(k).map_or(false, |ov| v == ov))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.slots
            .find_map(|slot| slot.as_ref().map(|pair| (pair.key(), pair.value())))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}

impl<K, V> FusedIterator for IterMut<'_, K, V> {}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.slots
            .find_map(|slot| slot.as_mut().map(KVPair::split_mut))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.slots.find_map(|slot| slot.map(KVPair::into_inner))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn find_stops_at_vacant_slot() {
        let mut array: AssocArray<u32, u32> = (0..4).map(|i| (i, i)).collect();
        assert_eq!(array.find(&3), Some(3));

        // Not reachable through the public interface.
        array.slots[1] = None;
        assert_eq!(array.find(&0), Some(0));
        assert_eq!(array.find(&3), None);
        assert!(!array.has_key(&2));
        assert!(array.get(&3).is_err());
    }
}
