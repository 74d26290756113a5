use serde::Deserialize;

pub const DEFAULT_PAGE_SIZE: i64 = 20;
pub const MAX_PAGE_SIZE: i64 = 100;

/// Raw `limit`/`offset` as supplied by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PageRequest {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Normalized bounds, safe to bind into `LIMIT`/`OFFSET`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingPolicy {
    default_limit: i64,
    max_limit: Option<i64>,
}

impl PagingPolicy {
    /// `max_limit` of `None` leaves page sizes uncapped.
    pub fn new(default_limit: i64, max_limit: Option<i64>) -> Self {
        let max_limit = max_limit.map(|max| max.max(0));
        let default_limit = match max_limit {
            Some(max) => default_limit.clamp(0, max),
            None => default_limit.max(0),
        };
        Self {
            default_limit,
            max_limit,
        }
    }

    pub fn normalize(&self, request: PageRequest) -> PageWindow {
        let limit = request.limit.unwrap_or(self.default_limit).max(0);
        let limit = match self.max_limit {
            Some(max) => limit.min(max),
            None => limit,
        };
        PageWindow {
            limit,
            offset: request.offset.unwrap_or(0).max(0),
        }
    }
}

impl Default for PagingPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, Some(MAX_PAGE_SIZE))
    }
}
