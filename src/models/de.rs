// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Lenient deserializers for fields the API does not type consistently.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(u64),
    Str(String),
}

/// Accept `123`, `"123"` or `null` (as 0).
pub fn u64_from_int_or_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IntOrString>::deserialize(deserializer)? {
        None => Ok(0),
        Some(IntOrString::Int(n)) => Ok(n),
        Some(IntOrString::Str(s)) if s.is_empty() => Ok(0),
        Some(IntOrString::Str(s)) => s.parse().map_err(serde::de::Error::custom),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BoolOrInt {
    Bool(bool),
    Int(i64),
}

/// Accept `true`/`false`, `0`/`1` or `null` (as false).
pub fn bool_from_int_or_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<BoolOrInt>::deserialize(deserializer)? {
        None => false,
        Some(BoolOrInt::Bool(b)) => b,
        Some(BoolOrInt::Int(n)) => n != 0,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MapOrList<V> {
    Map(BTreeMap<String, V>),
    List(Vec<serde_json::Value>),
}

/// Accept an object keyed by epoch seconds, or an empty list standing in
/// for an empty object.
///
/// Keys are read as strings and parsed afterwards: untagged buffering does
/// not convert string keys into integers.
pub fn epoch_map_or_empty_list<'de, D, V>(deserializer: D) -> Result<BTreeMap<i64, V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    match Option::<MapOrList<V>>::deserialize(deserializer)? {
        None => Ok(BTreeMap::new()),
        Some(MapOrList::Map(map)) => map
            .into_iter()
            .map(|(k, v)| {
                k.parse::<i64>()
                    .map(|k| (k, v))
                    .map_err(serde::de::Error::custom)
            })
            .collect(),
        Some(MapOrList::List(list)) if list.is_empty() => Ok(BTreeMap::new()),
        Some(MapOrList::List(_)) => Err(serde::de::Error::custom(
            "expected an object or an empty list",
        )),
    }
}
