/// Pagination window for contact listing: 1-based `page`, bounded `per_page`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pagination {
    pub page: i64,
    pub per_page: i64,
}

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PER_PAGE: i64 = 30;
pub const MAX_PER_PAGE: i64 = 100;

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl Pagination {
    /// Clamp into the valid window. The HTTP layer rejects out-of-range
    /// values with a 400; this keeps the store safe for any other caller.
    pub fn clamped(self) -> Self {
        Self {
            page: self.page.max(1),
            per_page: self.per_page.clamp(1, MAX_PER_PAGE),
        }
    }

    pub fn limit(&self) -> i64 {
        self.per_page
    }

    /// `per_page * (page - 1)`, saturating: a page number past the end of the
    /// key space selects an empty page instead of overflowing.
    pub fn offset(&self) -> i64 {
        self.per_page.saturating_mul(self.page.saturating_sub(1))
    }
}
