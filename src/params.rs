use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An ordered string map for route parameters and query pairs.
///
/// Keys are kept sorted, so two maps with the same contents always
/// serialize to the same JSON object regardless of insertion order.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ParamMap {
    keys: Vec<Box<str>>,
    values: Vec<Box<str>>,
}

impl ParamMap {
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        match self.find_index(name) {
            Ok(i) => Some(&self.values[i]),
            Err(_) => None,
        }
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    /// Inserts a pair, replacing the value of an existing key.
    pub fn insert(&mut self, key: &str, value: impl Into<Box<str>>) {
        match self.find_index(key) {
            Ok(i) => self.values[i] = value.into(),
            Err(i) => {
                self.keys.insert(i, key.into());
                self.values.insert(i, value.into());
            }
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<Box<str>> {
        match self.find_index(key) {
            Ok(i) => {
                self.keys.remove(i);
                Some(self.values.remove(i))
            }
            Err(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.keys
            .iter()
            .zip(self.values.iter())
            .map(|(k, v)| (&**k, &**v))
    }

    fn find_index(&self, key: &str) -> Result<usize, usize> {
        let keys: &[Box<str>] = &self.keys;

        let mut l: usize = 0;
        let mut r: usize = keys.len();

        while l < r {
            let mid = l + (r - l) / 2;
            match (*keys[mid]).cmp(key) {
                Ordering::Less => l = mid + 1,
                Ordering::Equal => return Ok(mid),
                Ordering::Greater => r = mid,
            }
        }
        Err(l)
    }
}

impl<K, V> FromIterator<(K, V)> for ParamMap
where
    K: AsRef<str>,
    V: Into<Box<str>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k.as_ref(), v);
        }
        map
    }
}

impl fmt::Debug for ParamMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl Serialize for ParamMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ParamMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ParamMapVisitor;

        impl<'de> Visitor<'de> for ParamMapVisitor {
            type Value = ParamMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = ParamMap::new();
                while let Some((k, v)) = access.next_entry::<String, String>()? {
                    map.insert(&k, v);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(ParamMapVisitor)
    }
}

#[test]
fn param_map_basic() {
    let mut params = ParamMap::new();
    params.insert("user_id", "asd");
    params.insert("post_id", "123");
    params.insert("user_id", "qwe");

    assert_eq!(params.len(), 2);
    assert_eq!(params.get("user_id"), Some("qwe"));
    assert_eq!(params.parse::<u32>("post_id"), Some(Ok(123)));
    assert_eq!(params.get("missing"), None);
}

#[test]
fn param_map_deterministic_json() {
    let a: ParamMap = [("b", "2"), ("a", "1")].into_iter().collect();
    let b: ParamMap = [("a", "1"), ("b", "2")].into_iter().collect();

    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
    assert_eq!(serde_json::to_string(&a).unwrap(), r#"{"a":"1","b":"2"}"#);
}
