/// Serde support for the container types.
///
/// Strings serialize as strings, arrays as sequences and maps as string
/// maps, so the JSON shape matches what a plain `String`, `Vec<String>`
/// and `HashMap<String, String>` would produce. Wide containers go
/// through lossy UTF conversion both ways.
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use std::fmt;
use std::marker::PhantomData;

use crate::array::StrArray;
use crate::string::Str;
use crate::trie::StrMap;
use crate::unit::Unit;

impl<U: Unit> Serialize for Str<U> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string_lossy())
    }
}

impl<'de, U: Unit> Deserialize<'de> for Str<U> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Str::from(s.as_str()))
    }
}

impl<U: Unit> Serialize for StrArray<U> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.elements())
    }
}

impl<'de, U: Unit> Deserialize<'de> for StrArray<U> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ArrVisitor<U>(PhantomData<U>);

        impl<'de, U: Unit> Visitor<'de> for ArrVisitor<U> {
            type Value = StrArray<U>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a sequence of strings")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut arr = StrArray::new();
                while let Some(e) = seq.next_element::<Str<U>>()? {
                    arr.push(&e);
                }
                Ok(arr)
            }
        }

        deserializer.deserialize_seq(ArrVisitor(PhantomData))
    }
}

impl<U: Unit> Serialize for StrMap<U> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut pairs: Vec<(String, String)> = Vec::with_capacity(self.count());
        self.for_each(|k, v| {
            pairs.push((k.to_string_lossy(), v.to_string_lossy()));
        });
        serializer.collect_map(pairs)
    }
}

impl<'de, U: Unit> Deserialize<'de> for StrMap<U> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MapVisitor<U>(PhantomData<U>);

        impl<'de, U: Unit> Visitor<'de> for MapVisitor<U> {
            type Value = StrMap<U>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = StrMap::new();
                while let Some((k, v)) = access.next_entry::<String, Str<U>>()? {
                    map.set(&U::units_from_str(&k), &v);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(MapVisitor(PhantomData))
    }
}
