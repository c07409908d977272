/**
 * Pagination Helper
 *
 * Page/size query parameters with clamped defaults, shared by the list
 * endpoints. Pages are 1-based; out-of-range values are clamped rather than
 * rejected.
 */

use serde::{Deserialize, Serialize};

const DEFAULT_SIZE: u32 = 10;
const MAX_SIZE: u32 = 100;

/// Page/size pair deserialized from query parameters
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct Pagination {
    /// 1-based page number
    #[serde(default)]
    pub page: u32,
    /// Items per page
    #[serde(default)]
    pub size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, size: DEFAULT_SIZE }
    }
}

impl Pagination {
    /// SQL LIMIT: size clamped into 1..=100, defaulting to 10 when unset.
    pub fn limit(&self) -> i64 {
        let size = if self.size == 0 { DEFAULT_SIZE } else { self.size };
        i64::from(size.min(MAX_SIZE))
    }

    /// SQL OFFSET for the clamped page.
    pub fn offset(&self) -> i64 {
        let page = self.page.max(1);
        i64::from(page - 1) * self.limit()
    }
}

/// A page of results plus the unpaged total
#[derive(Debug, Serialize)]
pub struct Paged<T> {
    pub list: Vec<T>,
    pub total: i64,
    pub page: u32,
    pub size: u32,
}

impl<T> Paged<T> {
    pub fn new(list: Vec<T>, total: i64, pagination: Pagination) -> Self {
        Self {
            list,
            total,
            page: pagination.page.max(1),
            size: pagination.limit() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let p = Pagination { page: 0, size: 0 };
        assert_eq!(p.limit(), 10);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn test_offset_is_zero_based() {
        let p = Pagination { page: 3, size: 20 };
        assert_eq!(p.limit(), 20);
        assert_eq!(p.offset(), 40);
    }

    #[test]
    fn test_size_clamped() {
        let p = Pagination { page: 1, size: 5000 };
        assert_eq!(p.limit(), 100);
    }

    #[test]
    fn test_paged_normalizes_page() {
        let paged = Paged::new(vec![1, 2, 3], 3, Pagination { page: 0, size: 0 });
        assert_eq!(paged.page, 1);
        assert_eq!(paged.size, 10);
        assert_eq!(paged.total, 3);
    }
}
