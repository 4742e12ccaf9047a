use serde::Deserialize;

pub const DEFAULT_OFFSET: i64 = 0;
pub const DEFAULT_LIMIT: i64 = 12;

/// Offset/limit query parameters shared by every paginated listing.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub offset: i64,
    pub limit: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// Negative values would invert LIMIT/OFFSET semantics in SQL.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            offset: self.offset.max(0),
            limit: self.limit.max(0),
        }
    }
}
