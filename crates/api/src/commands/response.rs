//! Boundary envelopes: paging parameters, paged responses and errors

use folio_domain::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use folio_domain::{FolioError, Page, PageInfo, PageRequest, ResponseList, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::logging::error_label;

/// 1-based paging parameters as callers send them
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl PageParams {
    pub const fn new(page: u32, size: u32) -> Self {
        Self { page: Some(page), size: Some(size) }
    }

    /// 0-based request, defaulting to page 1 of 15.
    pub fn to_request(self) -> Result<PageRequest> {
        PageRequest::from_one_based(
            self.page.unwrap_or(DEFAULT_PAGE),
            self.size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}

/// Paged listing with the 1-based page number echoed back
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub current_page: u32,
    pub data: Vec<T>,
    pub page_info: PageInfo,
}

impl<T> From<ResponseList<T>> for PageResponse<T> {
    fn from(list: ResponseList<T>) -> Self {
        Self { current_page: list.page_info.page + 1, data: list.content, page_info: list.page_info }
    }
}

impl<T> From<Page<T>> for PageResponse<T> {
    fn from(page: Page<T>) -> Self {
        ResponseList::from(page).into()
    }
}

/// Error returned by boundary commands
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{status} {code}: {message}")]
pub struct ApiError {
    /// HTTP-style status code
    pub status: u16,
    /// Stable machine-readable label
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub const fn status_for(error: &FolioError) -> u16 {
        match error {
            FolioError::InvalidArgument(_) | FolioError::SearchConditionMismatch(_) => 400,
            FolioError::NoPermission(_) | FolioError::InvalidUserStatus => 403,
            FolioError::UserNotFound(_)
            | FolioError::PortfolioNotFound(_)
            | FolioError::CommentNotFound(_)
            | FolioError::PortfolioNotSearched => 404,
            FolioError::Database(_)
            | FolioError::Storage(_)
            | FolioError::Config(_)
            | FolioError::Internal(_) => 500,
        }
    }
}

impl From<FolioError> for ApiError {
    fn from(error: FolioError) -> Self {
        let status = Self::status_for(&error);
        // Infrastructure details stay in the logs.
        let message = if error.is_infrastructure() {
            "internal server error".to_string()
        } else {
            error.to_string()
        };
        Self { status, code: error_label(&error).to_string(), message }
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
