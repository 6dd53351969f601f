use super::{AssocArray, DEFAULT_CAPACITY};

use serde::de::{Deserialize, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserializer;

use std::fmt;
use std::marker::PhantomData;

/// Upper bound on the number of slots allocated from a length claimed by the input.
const MAX_PREALLOCATED_SLOTS: usize = 4096;

struct AssocArrayVisitor<K, V> {
    #[allow(clippy::type_complexity)]
    marker: PhantomData<fn() -> AssocArray<K, V>>,
}

impl<K, V> AssocArrayVisitor<K, V> {
    fn new() -> Self {
        AssocArrayVisitor {
            marker: PhantomData,
        }
    }
}

impl<'de, K, V> Visitor<'de> for AssocArrayVisitor<K, V>
where
    K: Deserialize<'de> + Eq,
    V: Deserialize<'de>,
{
    type Value = AssocArray<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an AssocArray")
    }

    fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let capacity = access
            .size_hint()
            .unwrap_or(0)
            .clamp(DEFAULT_CAPACITY, MAX_PREALLOCATED_SLOTS);
        let mut array = AssocArray::with_capacity(capacity);

        while let Some((key, value)) = access.next_entry::<K, V>()? {
            array.upsert(key, value);
        }

        Ok(array)
    }
}

impl<'de, K, V> Deserialize<'de> for AssocArray<K, V>
where
    K: Deserialize<'de> + Eq,
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(AssocArrayVisitor::<K, V>::new())
    }
}

impl<K, V> Serialize for AssocArray<K, V>
where
    K: Serialize,
    V: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.size()))?;
        for (k, v) in self {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
