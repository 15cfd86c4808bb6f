//! Pagination and sort primitives for list operations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A request for a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRequest {
    /// The page number (0-indexed).
    pub page: usize,
    /// The number of items per page.
    pub size: usize,
}

impl PageRequest {
    /// The default page size.
    pub const DEFAULT_SIZE: usize = 20;

    /// Creates a new page request.
    #[must_use]
    pub const fn new(page: usize, size: usize) -> Self {
        Self { page, size }
    }

    /// Creates a page request for the first page with default size.
    #[must_use]
    pub const fn first() -> Self {
        Self::new(0, Self::DEFAULT_SIZE)
    }

    /// Returns the offset of the first item on this page.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.page.saturating_mul(self.size)
    }

    /// Returns the maximum number of items on this page.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// Parses `asc`/`desc` case-insensitively; anything else is `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_ascending(self) -> bool {
        matches!(self, Self::Asc)
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => f.write_str("asc"),
            Self::Desc => f.write_str("desc"),
        }
    }
}

/// Information about a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// The current page number (0-indexed).
    pub page: usize,
    /// The number of items per page.
    pub size: usize,
    /// The total number of items across all pages.
    pub total_elements: u64,
    /// The total number of pages.
    pub total_pages: u64,
    /// The number of items on this page.
    pub number_of_elements: usize,
}

impl PageInfo {
    /// Creates a new page info.
    #[must_use]
    pub fn new(page: usize, size: usize, total_elements: u64, number_of_elements: usize) -> Self {
        let total_pages = if size > 0 {
            total_elements.div_ceil(size as u64)
        } else {
            0
        };

        Self {
            page,
            size,
            total_elements,
            total_pages,
            number_of_elements,
        }
    }
}

/// A page of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page.
    pub content: Vec<T>,
    /// Information about this page.
    #[serde(flatten)]
    pub info: PageInfo,
}

impl<T> Page<T> {
    /// Creates a new page.
    #[must_use]
    pub fn new(content: Vec<T>, page: usize, size: usize, total_elements: u64) -> Self {
        let number_of_elements = content.len();
        Self {
            content,
            info: PageInfo::new(page, size, total_elements, number_of_elements),
        }
    }

    /// Cuts one page out of a fully materialised, already ordered list.
    ///
    /// An offset at or past the end yields an empty page that still reports
    /// the full total.
    #[must_use]
    pub fn from_vec(mut items: Vec<T>, request: PageRequest) -> Self {
        let total = items.len();
        let start = request.offset();
        if start >= total {
            return Self::new(Vec::new(), request.page, request.size, total as u64);
        }
        let end = start.saturating_add(request.limit()).min(total);
        items.truncate(end);
        let content = items.split_off(start);
        Self::new(content, request.page, request.size, total as u64)
    }

    /// Creates an empty page.
    #[must_use]
    pub fn empty(page: usize, size: usize) -> Self {
        Self::new(Vec::new(), page, size, 0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns the total number of elements across all pages.
    #[must_use]
    pub const fn total_elements(&self) -> u64 {
        self.info.total_elements
    }

    /// Returns the total number of pages.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        self.info.total_pages
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty(0, PageRequest::DEFAULT_SIZE)
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.into_iter()
    }
}
