//! Ordered set of included items, used for `exclude` patterns and lint paths

use indexmap::IndexSet;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// An ordered, duplicate-free list of included items.
///
/// Configuration files may describe the list either as an array of names
/// (every entry included) or as a map of name to flag, in which case only
/// entries whose value is exactly `true` are kept.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct InclusionList {
    items: IndexSet<String>,
}

impl InclusionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(item, included)` pairs, keeping only the included ones.
    pub fn from_flags<I, S>(flags: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        let mut list = Self::new();
        for (item, included) in flags {
            let item = item.into();
            if included {
                list.include(item);
            } else {
                list.exclude(&item);
            }
        }
        list
    }

    /// Add an item; an item that is already present keeps its position.
    pub fn include(&mut self, item: impl Into<String>) -> &mut Self {
        self.items.insert(item.into());
        self
    }

    /// Remove an item if present.
    pub fn exclude(&mut self, item: &str) -> &mut Self {
        self.items.shift_remove(item);
        self
    }

    pub fn extend<I, S>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for item in items {
            self.include(item);
        }
        self
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.contains(item)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Two lists are equal when they hold the same items in the same order.
impl PartialEq for InclusionList {
    fn eq(&self, other: &Self) -> bool {
        self.items.iter().eq(other.items.iter())
    }
}

impl Eq for InclusionList {}

impl<S: Into<String>> FromIterator<S> for InclusionList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<S: Into<String>> From<Vec<S>> for InclusionList {
    fn from(items: Vec<S>) -> Self {
        items.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a InclusionList {
    type Item = &'a String;
    type IntoIter = indexmap::set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

struct InclusionListVisitor;

impl<'de> Visitor<'de> for InclusionListVisitor {
    type Value = InclusionList;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string, a list of strings or a map of strings to booleans")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        let mut list = InclusionList::new();
        if !value.is_empty() {
            list.include(value);
        }
        Ok(list)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(InclusionList::new())
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut list = InclusionList::new();
        while let Some(item) = seq.next_element::<String>()? {
            list.include(item);
        }
        Ok(list)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut list = InclusionList::new();
        while let Some((item, flag)) = map.next_entry::<String, serde_json::Value>()? {
            // Only a literal `true` counts; null, false and anything else drop the item.
            if flag == serde_json::Value::Bool(true) {
                list.include(item);
            } else {
                list.exclude(&item);
            }
        }
        Ok(list)
    }
}

impl<'de> Deserialize<'de> for InclusionList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(InclusionListVisitor)
    }
}
