//! Pagination types shared by every list endpoint.
//!
//! A list response carries the total count of rows matching the filters
//! (ignoring offset/limit) and, when more rows remain, the URL of the next
//! page. The next-page computation is pure: same inputs, same string.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Default page size when `limit` is not given.
pub const DEFAULT_LIMIT: u64 = 1000;

/// Largest accepted `limit`.
pub const MAX_LIMIT: u64 = 2000;

/// Offset/limit query parameters common to all list endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageParams {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

/// Page parameter validation failure.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PageError {
    #[error("limit must be at most {max}, got {limit}")]
    LimitTooLarge { limit: u64, max: u64 },
}

impl PageParams {
    pub fn offset(&self) -> u64 {
        self.offset.unwrap_or(0)
    }

    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    /// Reject out-of-range page parameters.
    ///
    /// `offset` is unsigned so only the upper bound on `limit` needs a
    /// check; a negative value on the wire already fails deserialization.
    pub fn validate(&self) -> Result<(), PageError> {
        if let Some(limit) = self.limit {
            if limit > MAX_LIMIT {
                return Err(PageError::LimitTooLarge {
                    limit,
                    max: MAX_LIMIT,
                });
            }
        }
        Ok(())
    }
}

/// Envelope for all list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub total_count: u64,
    pub next_url: Option<String>,
    pub results: Vec<T>,
}

/// Compute the next-page URL for a list response.
///
/// Returns `None` when the page is empty or the current page exhausts the
/// matching rows. Otherwise the original request URL is truncated to start
/// at `path_prefix` and its `offset` parameter is replaced by
/// `offset + limit` (appended when absent); every other query parameter is
/// preserved in its original order.
pub fn next_page_url(
    request_url: &str,
    offset: u64,
    limit: u64,
    current_len: usize,
    total_count: u64,
    path_prefix: &str,
) -> Option<String> {
    if total_count == 0 {
        return None;
    }
    if offset + current_len as u64 >= total_count {
        return None;
    }

    let tail = match request_url.find(path_prefix) {
        Some(ix) => &request_url[ix..],
        None => request_url,
    };
    let (path, query) = match tail.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (tail, None),
    };

    let next_offset = (offset + limit).to_string();
    let mut replaced = false;
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    if let Some(query) = query {
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            if key == "offset" {
                serializer.append_pair("offset", &next_offset);
                replaced = true;
            } else {
                serializer.append_pair(&key, &value);
            }
        }
    }
    if !replaced {
        serializer.append_pair("offset", &next_offset);
    }

    Some(format!("{}?{}", path, serializer.finish()))
}
