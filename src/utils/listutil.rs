//! Helpers for laying out lists and building links in rendered pages.

use std::sync::OnceLock;

use itertools::Itertools;
use regex::Regex;
use url::form_urlencoded;

/// Break a list into `n` contiguous pieces.
///
/// Every piece but the last holds `len / n` items; the last one takes the
/// remainder, so it may be larger than the rest. `n == 0` returns the whole
/// list as a single piece.
///
/// ```
/// use dbxref::utils::listutil::partition;
///
/// let parts = partition(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9], 3);
/// assert_eq!(parts, vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7, 8, 9]]);
/// ```
#[must_use]
pub fn partition<T: Clone>(list: &[T], n: usize) -> Vec<Vec<T>> {
    if n == 0 {
        return vec![list.to_vec()];
    }
    let per = list.len() / n;
    let mut parts: Vec<Vec<T>> = (0..n - 1)
        .map(|i| list[per * i..per * (i + 1)].to_vec())
        .collect();
    parts.push(list[per * (n - 1)..].to_vec());
    parts
}

/// Break a list into `n` pieces by dealing items out round-robin.
///
/// `partition_horizontal(&[1..=10], 3)` gives `[[1, 4, 7, 10], [2, 5, 8], [3, 6, 9]]`.
#[must_use]
pub fn partition_horizontal<T: Clone>(list: &[T], n: usize) -> Vec<Vec<T>> {
    if n == 0 {
        return vec![list.to_vec()];
    }
    let mut parts: Vec<Vec<T>> = vec![Vec::new(); n];
    for (i, item) in list.iter().enumerate() {
        parts[i % n].push(item.clone());
    }
    parts
}

fn half(len: usize) -> usize {
    len.div_ceil(2)
}

/// The first `ceil(len / 2)` items
#[must_use]
pub fn first_half<T>(list: &[T]) -> &[T] {
    &list[..half(list.len())]
}

/// Everything after [`first_half`]
#[must_use]
pub fn last_half<T>(list: &[T]) -> &[T] {
    &list[half(list.len())..]
}

/// A run of consecutive items sharing a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<K, T> {
    pub grouper: K,
    pub list: Vec<T>,
}

/// Group consecutive items by a key computed at call time.
///
/// Only adjacent items are merged, so the input should already be sorted by
/// the key if one group per key is wanted.
pub fn dynamic_regroup<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> Vec<Group<K, T>>
where
    K: PartialEq,
    F: FnMut(&T) -> K,
{
    let chunks = items.into_iter().chunk_by(key);
    let groups = chunks
        .into_iter()
        .map(|(grouper, list)| Group {
            grouper,
            list: list.collect(),
        })
        .collect();
    groups
}

/// Build a query string from `args` with `new_key` replaced by `new_value`.
///
/// Keys may repeat. Empty values are dropped and everything is form-encoded.
#[must_use]
pub fn make_query(args: &[(&str, Vec<&str>)], new_key: &str, new_value: &str) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut replaced = false;
    for (key, values) in args {
        if *key == new_key {
            if !replaced && !new_value.is_empty() {
                serializer.append_pair(key, new_value);
            }
            replaced = true;
            continue;
        }
        for value in values.iter().filter(|v| !v.is_empty()) {
            serializer.append_pair(key, value);
        }
    }
    if !replaced && !new_value.is_empty() {
        serializer.append_pair(new_key, new_value);
    }
    serializer.finish()
}

/// Look up `name` on a JSON value: an object key, or else a numeric array index
#[must_use]
pub fn get_attribute<'a>(value: &'a serde_json::Value, name: &str) -> Option<&'a serde_json::Value> {
    match value {
        serde_json::Value::Object(map) => map.get(name),
        serde_json::Value::Array(items) => name.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

/// A character followed by a capitalised word: `eLocus`
fn word_start() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(.)([A-Z][a-z]+)").expect("valid regex"))
}

/// A lowercase letter or digit followed by a capital: `sT`, `2N`
fn lower_upper() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid regex"))
}

fn split_camel_case(value: &str, sep: char) -> String {
    let replacement = format!("${{1}}{sep}${{2}}");
    let words = word_start().replace_all(value, replacement.as_str());
    lower_upper()
        .replace_all(&words, replacement.as_str())
        .into_owned()
}

/// `"GeneLocusTag"` becomes `"Gene Locus Tag"`
#[must_use]
pub fn camel_case_to_spaces(value: &str) -> String {
    split_camel_case(value, ' ')
}

/// `"GeneLocusTag"` becomes `"Gene_Locus_Tag"`
#[must_use]
pub fn camel_case_to_underscores(value: &str) -> String {
    split_camel_case(value, '_')
}
