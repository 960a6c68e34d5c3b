//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};

/// Pagination query parameters (reusable across all list endpoints)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Page number, starting at 1
    #[serde(default = "default_page")]
    #[validate(range(
        min = 1,
        max = 92233720368547758u64,
        message = "page must be between 1 and 92233720368547758"
    ))]
    #[param(minimum = 1)]
    pub page: u64,
    /// Items per page
    #[serde(default = "default_size")]
    #[validate(range(min = 1, max = 100, message = "size must be between 1 and 100"))]
    #[param(minimum = 1, maximum = 100)]
    pub size: u64,
}

/// Largest page whose row offset still fits a signed 64-bit SQL OFFSET at the
/// largest page size.
pub const MAX_PAGE_NUMBER: u64 = 92233720368547758;

fn default_page() -> u64 {
    DEFAULT_PAGE_NUMBER
}

fn default_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl PaginationParams {
    pub fn new(page: u64, size: u64) -> Self {
        Self { page, size }
    }

    /// Zero-based page index for the database paginator
    pub fn page_index(&self) -> u64 {
        self.page.saturating_sub(1)
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Page of items plus the counters needed to walk the rest.
#[derive(Debug, Serialize, ToSchema)]
#[aliases(
    TrainingCenterPage = Paginated<domain::TrainingCenter>,
    CategoryPage = Paginated<domain::CategoryDetails>,
    StudentPage = Paginated<domain::StudentDetails>
)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// Total number of matching records
    pub total: u64,
    /// Current page (1-indexed)
    pub page: u64,
    /// Requested page size
    pub size: u64,
    /// Total number of pages
    pub pages: u64,
}

impl<T> Paginated<T> {
    /// Create new paginated response
    pub fn new(items: Vec<T>, params: PaginationParams, total: u64) -> Self {
        let pages = if params.size > 0 {
            total.div_ceil(params.size)
        } else {
            0
        };

        Self {
            items,
            total,
            page: params.page,
            size: params.size,
            pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_first_page_of_fifty() {
        let params = PaginationParams::default();
        assert_eq!(params.page, 1);
        assert_eq!(params.size, 50);
        assert_eq!(params.page_index(), 0);
    }

    #[test]
    fn page_index_is_zero_based() {
        assert_eq!(PaginationParams::new(3, 10).page_index(), 2);
        assert_eq!(PaginationParams::new(1, 10).page_index(), 0);
    }

    #[test]
    fn out_of_range_params_fail_validation() {
        assert!(PaginationParams::new(0, 10).validate().is_err());
        assert!(PaginationParams::new(1, 0).validate().is_err());
        assert!(PaginationParams::new(1, 101).validate().is_err());
        assert!(PaginationParams::new(1, 100).validate().is_ok());
        assert!(PaginationParams::new(MAX_PAGE_NUMBER, 100).validate().is_ok());
        assert!(PaginationParams::new(MAX_PAGE_NUMBER + 1, 1).validate().is_err());
        assert!(PaginationParams::new(u64::MAX, 50).validate().is_err());
    }

    #[test]
    fn largest_page_offset_fits_sql() {
        let offset = PaginationParams::new(MAX_PAGE_NUMBER, 100)
            .page_index()
            .checked_mul(100)
            .unwrap();
        assert!(offset <= i64::MAX as u64);
    }

    #[test]
    fn pages_round_up() {
        let page = Paginated::new(vec![1, 2], PaginationParams::new(3, 2), 5);
        assert_eq!(page.pages, 3);
        assert_eq!(page.total, 5);

        let empty: Paginated<i32> = Paginated::new(vec![], PaginationParams::default(), 0);
        assert_eq!(empty.pages, 0);
    }
}
