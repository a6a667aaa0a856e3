//! Paging types
//!
//! Pages are 0-based inside the services. The boundary converts from the
//! 1-based page numbers callers send.

use serde::{Deserialize, Serialize};

use crate::errors::{FolioError, Result};

/// Requested slice of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// 0-based page index
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Result<Self> {
        if size == 0 {
            return Err(FolioError::InvalidArgument("page size must be at least 1".into()));
        }
        Ok(Self { page, size })
    }

    /// Build from a 1-based page number.
    pub fn from_one_based(page: u32, size: u32) -> Result<Self> {
        if page == 0 {
            return Err(FolioError::InvalidArgument("page must be at least 1".into()));
        }
        Self::new(page - 1, size)
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

/// One page of results plus the total matched by the query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        Self { content, page: request.page, size: request.size, total_elements }
    }

    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            return 0;
        }
        self.total_elements.div_ceil(u64::from(self.size))
    }

    pub fn page_info(&self) -> PageInfo {
        PageInfo {
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages(),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
        }
    }
}

/// Paging metadata returned alongside listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}

/// Listing wrapper carrying `(content, totalElements, totalPages)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseList<T> {
    pub content: Vec<T>,
    pub page_info: PageInfo,
}

impl<T> From<Page<T>> for ResponseList<T> {
    fn from(page: Page<T>) -> Self {
        let page_info = page.page_info();
        Self { content: page.content, page_info }
    }
}
