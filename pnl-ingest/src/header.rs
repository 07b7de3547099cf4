//! Header row handling: canonical header names and case-insensitive lookup.

use std::collections::HashMap;

/// Strip one leading and one trailing `"` from a trimmed value.
pub(crate) fn strip_outer_quote(value: &str) -> &str {
    let value = value.strip_prefix('"').unwrap_or(value);
    value.strip_suffix('"').unwrap_or(value)
}

/// Canonical form of a raw header cell: trimmed, unquoted, whitespace runs
/// collapsed to a single space. Casing is preserved.
pub fn canonical_header(raw: &str) -> String {
    let unquoted = strip_outer_quote(raw.trim());
    let mut out = String::with_capacity(unquoted.len());
    let mut in_space = false;
    for ch in unquoted.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    out
}

fn lookup_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Ordered canonical headers plus a normalized-name -> canonical-name map.
///
/// Two headers that normalize to the same key collapse to the later one.
#[derive(Debug, Clone, Default)]
pub struct HeaderIndex {
    headers: Vec<String>,
    by_key: HashMap<String, String>,
}

impl HeaderIndex {
    pub fn new(headers: Vec<String>) -> Self {
        let by_key = headers
            .iter()
            .map(|h| (lookup_key(h), h.clone()))
            .collect();
        Self { headers, by_key }
    }

    /// Build from a tokenized header line.
    pub fn from_raw<S: AsRef<str>>(raw: &[S]) -> Self {
        Self::new(raw.iter().map(|h| canonical_header(h.as_ref())).collect())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Case-insensitive presence check.
    pub fn contains(&self, name: &str) -> bool {
        self.by_key.contains_key(&lookup_key(name))
    }

    /// Canonical header name for `name`, ignoring case and outer whitespace.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.by_key.get(&lookup_key(name)).map(String::as_str)
    }

    /// First header (in file order) whose lowercase form contains `needle`.
    pub fn first_containing(&self, needle: &str) -> Option<&str> {
        let needle = needle.to_lowercase();
        self.headers
            .iter()
            .find(|h| h.to_lowercase().contains(&needle))
            .map(String::as_str)
    }
}
