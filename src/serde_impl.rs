//! Maps are (de)serialized as maps, with entries in ascending order of keys. The comparator is not serialized: deserialization builds it with `Default`.

use core::{
    fmt::{self, Formatter},
    marker::PhantomData,
};
use serde::{
    de::{self, Deserialize, Deserializer, MapAccess},
    ser::{Serialize, Serializer},
};
use crate::{avl_tree::AvlMap, comparator::Comparator};

impl<K, V, C> Serialize for AvlMap<K, V, C>
where
    K: Serialize,
    V: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de, K, V, C> Deserialize<'de> for AvlMap<K, V, C>
where
    K: Deserialize<'de> + Clone,
    V: Deserialize<'de> + Clone,
    C: Comparator<K> + Clone + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(MapVisitor(PhantomData))
    }
}

struct MapVisitor<K, V, C>(PhantomData<fn() -> AvlMap<K, V, C>>);
impl<'de, K, V, C> de::Visitor<'de> for MapVisitor<K, V, C>
where
    K: Deserialize<'de> + Clone,
    V: Deserialize<'de> + Clone,
    C: Comparator<K> + Clone + Default,
{
    type Value = AvlMap<K, V, C>;

    fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("a map")
    }
    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        // Later duplicates replace earlier ones, like they would with repeated `add` calls.
        let mut map = AvlMap::default();
        while let Some((key, value)) = access.next_entry()? {
            map = map.add(key, value);
        }
        Ok(map)
    }
}
