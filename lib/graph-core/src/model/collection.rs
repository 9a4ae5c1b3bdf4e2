use serde::{Deserialize, Serialize};

/// A page of a collection.
///
/// Large collections are split in pages: `next_link` addresses the next page and is absent
/// on the last one. Use a [`PageIterator`](crate::PageIterator) to walk every page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct CollectionResponse<T> {
    /// Items of the page.
    #[serde(default)]
    pub value: Vec<T>,

    /// Total number of items, when `$count=true` was requested.
    #[serde(rename = "@odata.count", default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,

    /// URL of the next page.
    #[serde(rename = "@odata.nextLink", default, skip_serializing_if = "Option::is_none")]
    pub next_link: Option<String>,

    /// URL to track changes, returned with the last page of a delta query.
    #[serde(rename = "@odata.deltaLink", default, skip_serializing_if = "Option::is_none")]
    pub delta_link: Option<String>,
}

impl<T> Default for CollectionResponse<T> {
    fn default() -> Self {
        Self {
            value: Vec::new(),
            count: None,
            next_link: None,
            delta_link: None,
        }
    }
}

impl<T> CollectionResponse<T> {
    /// Checks if another page is available.
    pub fn has_next_page(&self) -> bool {
        self.next_link.is_some()
    }
}

impl<T> IntoIterator for CollectionResponse<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.value.into_iter()
    }
}
