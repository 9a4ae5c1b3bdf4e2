use indexmap::{IndexMap, IndexSet};

use crate::adapter::GraphError;

/// Case-insensitive multimap of request headers.
///
/// Names are stored lowercased; values keep their insertion order and are deduplicated.
///
/// # Example
///
/// ```rust
/// use graph_core::RequestHeaders;
///
/// let mut headers = RequestHeaders::new();
/// headers.add("Prefer", "outlook.timezone=\"Pacific Standard Time\"");
/// headers.add("prefer", "odata.maxpagesize=50");
///
/// assert!(headers.try_add("Accept", "application/json"));
/// assert!(!headers.try_add("ACCEPT", "text/plain"));
/// assert_eq!(headers.get("PREFER").map(|values| values.len()), Some(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestHeaders {
    headers: IndexMap<String, IndexSet<String>>,
}

impl RequestHeaders {
    /// Creates an empty set of headers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value to the header, keeping the values already present.
    pub fn add(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.headers
            .entry(normalize(name.as_ref()))
            .or_default()
            .insert(value.into());
    }

    /// Adds the header only when no value exists for that name yet.
    ///
    /// Returns `true` when the value was added.
    pub fn try_add(&mut self, name: impl AsRef<str>, value: impl Into<String>) -> bool {
        let name = normalize(name.as_ref());
        if self.headers.contains_key(&name) {
            return false;
        }
        self.headers.insert(name, IndexSet::from([value.into()]));
        true
    }

    /// Merges every header of `other` into this one.
    pub fn add_all(&mut self, other: &Self) {
        for (name, values) in &other.headers {
            self.headers
                .entry(name.clone())
                .or_default()
                .extend(values.iter().cloned());
        }
    }

    /// Returns the values of a header.
    pub fn get(&self, name: &str) -> Option<&IndexSet<String>> {
        self.headers.get(&normalize(name))
    }

    /// Returns `true` when the header has at least one value.
    pub fn contains(&self, name: &str) -> bool {
        self.headers.contains_key(&normalize(name))
    }

    /// Removes a header, returning its values.
    pub fn remove(&mut self, name: &str) -> Option<IndexSet<String>> {
        self.headers.shift_remove(&normalize(name))
    }

    /// Returns the number of distinct header names.
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// Checks if no header is set.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Iterates over header names and their values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexSet<String>)> {
        self.headers
            .iter()
            .map(|(name, values)| (name.as_str(), values))
    }

    /// Converts the headers for the HTTP client, multiple values become multiple entries.
    ///
    /// Credentials are marked sensitive, so they never appear in `Debug` output.
    pub(crate) fn to_header_map(&self) -> Result<http::HeaderMap, GraphError> {
        let mut result = http::HeaderMap::with_capacity(self.headers.len());
        for (name, values) in &self.headers {
            let name = http::HeaderName::from_bytes(name.as_bytes())?;
            let sensitive = name == http::header::AUTHORIZATION || name == http::header::PROXY_AUTHORIZATION;
            for value in values {
                let mut value = http::HeaderValue::from_str(value)?;
                value.set_sensitive(sensitive);
                result.append(name.clone(), value);
            }
        }
        Ok(result)
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}
