//! Listing results returned by a single delimiter-scoped store query.

use chrono::{DateTime, Utc};

/// Path separator used to group keys into pseudo-directories.
pub const DELIMITER: char = '/';

/// A single object (leaf key) under the listed prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectEntry {
    /// Full object key within the bucket.
    pub key: String,

    /// Size in bytes as reported by the store.
    pub size: u64,

    /// Timestamp when the object was last modified.
    pub last_modified: DateTime<Utc>,
}

impl ObjectEntry {
    /// Last path segment of the key.
    pub fn name(&self) -> &str {
        last_segment(&self.key)
    }
}

/// One directory level of the bucket: pseudo-directories plus leaf objects,
/// both in the order the store returned them.
#[derive(Clone, Debug, Default)]
pub struct Listing {
    /// Prefix the query was scoped to (empty for the bucket root).
    pub prefix: String,

    /// Common prefixes, each ending with the delimiter.
    pub directories: Vec<String>,

    pub objects: Vec<ObjectEntry>,
}

/// Last segment of a key, ignoring a trailing delimiter.
pub fn last_segment(key: &str) -> &str {
    let trimmed = key.strip_suffix(DELIMITER).unwrap_or(key);
    trimmed.rsplit(DELIMITER).next().unwrap_or(trimmed)
}

/// Everything up to and including the last delimiter; empty at the root.
pub fn series_prefix(key: &str) -> &str {
    match key.rfind(DELIMITER) {
        Some(pos) => &key[..=pos],
        None => "",
    }
}

/// Percent-encode each segment of `key`, keeping the delimiters.
pub fn encode_key(key: &str) -> String {
    key.split(DELIMITER)
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
