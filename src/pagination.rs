//! Offset pagination primitives shared by repositories and services.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a page request is rejected before any query runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageRequestError {
    #[error("offset must not be negative, got {0}")]
    NegativeOffset(i64),
    #[error("limit must be greater than zero, got {0}")]
    NonPositiveLimit(i64),
    #[error("page {page} of size {per_page} is out of range")]
    OffsetOverflow { page: usize, per_page: usize },
}

/// Attribute a page can be ordered by.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    MemberId,
    Username,
    Age,
    TeamName,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SortOrder {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortOrder {
    pub const fn asc(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Asc,
        }
    }

    pub const fn desc(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Desc,
        }
    }
}

/// Validated window into a result set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    offset: usize,
    limit: usize,
    sort: Vec<SortOrder>,
}

impl PageRequest {
    /// Creates a request, rejecting a negative offset or a non-positive limit.
    pub fn new(offset: i64, limit: i64) -> Result<Self, PageRequestError> {
        if offset < 0 {
            return Err(PageRequestError::NegativeOffset(offset));
        }
        if limit <= 0 {
            return Err(PageRequestError::NonPositiveLimit(limit));
        }
        Ok(Self {
            offset: offset as usize,
            limit: limit as usize,
            sort: Vec::new(),
        })
    }

    /// Creates a request from a 1-based page number; page `0` is treated as `1`.
    ///
    /// The resulting offset and limit must fit in an SQL `BIGINT`.
    pub fn from_page(page: usize, per_page: usize) -> Result<Self, PageRequestError> {
        if per_page == 0 {
            return Err(PageRequestError::NonPositiveLimit(0));
        }
        let page = page.max(1);
        let offset = (page - 1)
            .checked_mul(per_page)
            .filter(|offset| i64::try_from(*offset).is_ok())
            .ok_or(PageRequestError::OffsetOverflow { page, per_page })?;
        if i64::try_from(per_page).is_err() {
            return Err(PageRequestError::OffsetOverflow { page, per_page });
        }
        Ok(Self {
            offset,
            limit: per_page,
            sort: Vec::new(),
        })
    }

    /// Appends a sort order; earlier orders take precedence.
    pub fn sort_by(mut self, order: SortOrder) -> Self {
        self.sort.push(order);
        self
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn sort(&self) -> &[SortOrder] {
        &self.sort
    }

    /// 1-based number of the page this request starts on.
    pub fn page_number(&self) -> usize {
        self.offset / self.limit + 1
    }
}

/// One page of results with the total number of matching rows.
#[derive(Debug, Serialize, PartialEq)]
pub struct PageResult<T> {
    pub content: Vec<T>,
    pub total: usize,
    pub offset: usize,
    pub limit: usize,
}

impl<T> PageResult<T> {
    pub fn new(content: Vec<T>, total: usize, page: &PageRequest) -> Self {
        Self {
            content,
            total,
            offset: page.offset(),
            limit: page.limit(),
        }
    }

    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.limit)
    }

    pub fn page_number(&self) -> usize {
        self.offset / self.limit + 1
    }

    pub fn has_next(&self) -> bool {
        self.offset + self.content.len() < self.total
    }

    /// Page numbers to render in a navigation bar; `None` marks a gap.
    pub fn pages(&self) -> Vec<Option<usize>> {
        get_pages(self.total_pages(), self.page_number(), 2, 2, 4, 2)
    }
}

fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}
