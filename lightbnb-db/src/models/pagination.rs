//! Page-based windows over list queries

use serde::Deserialize;

/// Maximum rows per page
pub const MAX_PER_PAGE: u32 = 100;

/// Default rows per page
pub const DEFAULT_PER_PAGE: u32 = 20;

/// Page window rendered as `LIMIT`/`OFFSET`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    per_page: u32,
}

impl Pagination {
    /// Create pagination, clamping page to >= 1 and per-page to 1..=100.
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, MAX_PER_PAGE),
        }
    }

    /// Page number (1-indexed)
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Rows per page (max 100)
    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// SQL OFFSET value.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.per_page)
    }

    /// SQL LIMIT value.
    pub fn limit(&self) -> u32 {
        self.per_page
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Query-string form of [`Pagination`]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        Self::new(
            params.page.unwrap_or(1),
            params.per_page.unwrap_or(DEFAULT_PER_PAGE),
        )
    }
}
