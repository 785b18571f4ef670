//! Pagination types
//!
//! The feed and per-author listings page with skip/limit query params.

use serde::Deserialize;

/// Maximum items per page
const MAX_LIMIT: i64 = 100;

/// Default items per page
const DEFAULT_LIMIT: i64 = 20;

/// Normalized pagination window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Rows to skip (SQL OFFSET)
    pub skip: i64,
    /// Rows to return (SQL LIMIT, max 100)
    pub limit: i64,
}

impl Page {
    /// Create a page window with clamping.
    ///
    /// - Negative skip becomes 0
    /// - Limit is clamped to 1..=100
    pub fn new(skip: i64, limit: i64) -> Self {
        Self {
            skip: skip.max(0),
            limit: limit.clamp(1, MAX_LIMIT),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Raw skip/limit query parameters
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl From<PageParams> for Page {
    fn from(params: PageParams) -> Self {
        Self::new(
            params.skip.unwrap_or(0),
            params.limit.unwrap_or(DEFAULT_LIMIT),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_skip() {
        let p = Page::new(-5, 20);
        assert_eq!(p.skip, 0);

        let p = Page::new(40, 20);
        assert_eq!(p.skip, 40);
    }

    #[test]
    fn clamps_limit() {
        let p = Page::new(0, 0);
        assert_eq!(p.limit, 1);

        let p = Page::new(0, 999);
        assert_eq!(p.limit, 100);
    }

    #[test]
    fn defaults() {
        let p = Page::from(PageParams::default());
        assert_eq!(p.skip, 0);
        assert_eq!(p.limit, 20);
    }

    #[test]
    fn params_pass_through() {
        let p = Page::from(PageParams {
            skip: Some(10),
            limit: Some(5),
        });
        assert_eq!(p.skip, 10);
        assert_eq!(p.limit, 5);
    }
}
