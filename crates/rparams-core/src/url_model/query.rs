//! Query parameter sets: decoding a query string into an ordered key/value
//! mapping and encoding it back.
//!
//! Decoding follows the web-platform convention for bracketed names:
//! `a[]=1&a[]=2` becomes one key `a` holding a list, `a[x][y]=1` a nested
//! map. Encoding emits those structures with explicit indices
//! (`a%5B0%5D=1&a%5B1%5D=2`), so decode(encode(set)) == set.

use url::form_urlencoded;

/// Deepest bracket nesting accepted in a parameter name; deeper names are
/// dropped whole.
const MAX_NESTING_DEPTH: usize = 64;

/// A parameter value: either a plain string or a structured (bracketed) one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Scalar(String),
    Nested(QuerySet),
}

impl QueryValue {
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            QueryValue::Scalar(s) => Some(s),
            QueryValue::Nested(_) => None,
        }
    }

    pub fn as_nested(&self) -> Option<&QuerySet> {
        match self {
            QueryValue::Scalar(_) => None,
            QueryValue::Nested(set) => Some(set),
        }
    }

    fn nested_mut(&mut self) -> &mut QuerySet {
        if let QueryValue::Scalar(_) = self {
            *self = QueryValue::Nested(QuerySet::default());
        }
        let QueryValue::Nested(set) = self else {
            unreachable!("scalar slot was replaced with a nested set above")
        };
        set
    }
}

/// Ordered mapping of unique parameter names to values.
///
/// Re-assigning an existing key replaces its value but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuerySet {
    entries: Vec<(String, QueryValue)>,
}

impl QuerySet {
    /// Decodes a raw query string (without the leading `?`).
    ///
    /// Pairs with an empty name are skipped. Spaces and dots in the
    /// top-level name become underscores.
    pub fn parse(query: &str) -> Self {
        let mut set = QuerySet::default();
        for (raw_name, value) in form_urlencoded::parse(query.as_bytes()) {
            let Some((name, path)) = split_name(&raw_name) else {
                continue;
            };
            if path.len() > MAX_NESTING_DEPTH {
                tracing::trace!(name = %name, depth = path.len(), "query parameter nested too deep, dropped");
                continue;
            }
            set.assign(name, &path, value.into_owned());
        }
        set
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Sets `key` to `value`, replacing in place if the key exists.
    pub fn insert(&mut self, key: impl Into<String>, value: QueryValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Appends every entry of `other` whose key is not already present,
    /// keeping `other`'s order. Existing values are never touched.
    ///
    /// Returns how many entries were added.
    pub fn extend_missing(&mut self, other: QuerySet) -> usize {
        let mut added = 0;
        for (key, value) in other.entries {
            if !self.contains_key(&key) {
                self.entries.push((key, value));
                added += 1;
            }
        }
        added
    }

    /// Encodes the set as `application/x-www-form-urlencoded`.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.entries {
            append_encoded(&mut serializer, key, value);
        }
        serializer.finish()
    }

    fn assign(&mut self, key: String, path: &[String], value: String) {
        let Some((first, rest)) = path.split_first() else {
            self.insert(key, QueryValue::Scalar(value));
            return;
        };
        let child = self.slot_mut(key).nested_mut();
        let child_key = if first.is_empty() {
            match child.next_index() {
                Some(index) => index.to_string(),
                None => {
                    tracing::trace!("list index space exhausted, append dropped");
                    return;
                }
            }
        } else {
            first.clone()
        };
        child.assign(child_key, rest, value);
    }

    fn slot_mut(&mut self, key: String) -> &mut QueryValue {
        let index = match self.entries.iter().position(|(k, _)| *k == key) {
            Some(i) => i,
            None => {
                self.entries.push((key, QueryValue::Nested(QuerySet::default())));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index].1
    }

    /// Next free list index: one past the largest integer key, or 0.
    /// `None` once the largest key is `usize::MAX`.
    fn next_index(&self) -> Option<usize> {
        match self.entries.iter().filter_map(|(k, _)| canonical_index(k)).max() {
            Some(max) => max.checked_add(1),
            None => Some(0),
        }
    }
}

fn append_encoded(
    serializer: &mut form_urlencoded::Serializer<'_, String>,
    name: &str,
    value: &QueryValue,
) {
    match value {
        QueryValue::Scalar(s) => {
            serializer.append_pair(name, s);
        }
        QueryValue::Nested(set) => {
            for (key, child) in &set.entries {
                append_encoded(serializer, &format!("{name}[{key}]"), child);
            }
        }
    }
}

/// `"0"`, `"17"` are list indices; `"01"`, `"-1"`, `"x"` are not.
fn canonical_index(key: &str) -> Option<usize> {
    if key.is_empty() || (key.len() > 1 && key.starts_with('0')) {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse().ok()
}

/// Splits a decoded parameter name into its top-level key and bracket path.
///
/// `a[b][]` → (`a`, [`b`, ``]). Text after the last well-formed bracket
/// group is ignored. A `[` with no matching `]` is kept literally as `_`.
fn split_name(raw: &str) -> Option<(String, Vec<String>)> {
    let raw = raw.trim_start_matches(' ');

    let Some(open) = raw.find('[') else {
        return non_empty(normalize_top_level(raw), Vec::new());
    };

    if !raw[open..].contains(']') {
        let flat = format!("{}_{}", &raw[..open], &raw[open + 1..]);
        return non_empty(normalize_top_level(&flat), Vec::new());
    }

    let mut path = Vec::new();
    let mut rest = &raw[open..];
    while let Some(inner) = rest.strip_prefix('[') {
        let Some(close) = inner.find(']') else {
            break;
        };
        path.push(inner[..close].to_string());
        rest = &inner[close + 1..];
    }

    non_empty(normalize_top_level(&raw[..open]), path)
}

fn normalize_top_level(name: &str) -> String {
    name.replace([' ', '.'], "_")
}

fn non_empty(name: String, path: Vec<String>) -> Option<(String, Vec<String>)> {
    if name.is_empty() {
        None
    } else {
        Some((name, path))
    }
}
