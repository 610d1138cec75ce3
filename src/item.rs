//! Listing record produced by the extractor

use serde::{Deserialize, Serialize};

/// Normalized snapshot of one listing page.
///
/// Owns all of its data, so it can outlive the parsed document and cross
/// thread or FFI boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    pub price: String,
    pub basic_info: BasicInfo,
    pub category: String,
    pub description: String,
    pub seller: Option<Seller>,
    pub comments: Vec<Comment>,
    pub url: String,
    pub exported_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    /// Empty when the profile link was found but no name element matched
    pub name: String,
    pub rating: Option<String>,
    pub review_count: Option<String>,
    pub verified: bool,
    pub badges: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub name: String,
    pub content: String,
    /// Absolute `YYYY/MM/DD HH:MM`
    pub time: String,
}

/// Label/value rows in document order.
///
/// Re-inserting a label replaces its value but keeps its first position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<(String, String)>", into = "Vec<(String, String)>")]
pub struct BasicInfo(Vec<(String, String)>);

impl BasicInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) {
        let label = label.into();
        let value = value.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == label) {
            Some(entry) => entry.1 = value,
            None => self.0.push((label, value)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(existing, _)| existing == label)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for BasicInfo {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut info = BasicInfo::new();
        for (label, value) in iter {
            info.insert(label, value);
        }
        info
    }
}

impl From<Vec<(String, String)>> for BasicInfo {
    fn from(rows: Vec<(String, String)>) -> Self {
        rows.into_iter().collect()
    }
}

impl From<BasicInfo> for Vec<(String, String)> {
    fn from(info: BasicInfo) -> Self {
        info.0
    }
}
