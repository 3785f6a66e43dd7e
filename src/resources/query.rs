//! Query strings and path segments for resource paths.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::BuildError;

/// Page number and page size for list endpoints.
///
/// Both values are passed to the server as-is; the client does no cursor
/// bookkeeping of its own.
///
/// ```
/// use swervpay::PageQuery;
///
/// assert_eq!(PageQuery::new(2, 25).apply("customers"), "customers?page=2&limit=25");
/// assert_eq!(
///     PageQuery::default().apply("cards?status=active"),
///     "cards?status=active&page=1&limit=10"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    /// 1-based page number
    pub page: u32,
    /// Items per page
    pub limit: u32,
}

impl PageQuery {
    /// Creates a query for `page` with `limit` items.
    #[must_use]
    pub const fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    /// Returns the query as name/value pairs, in wire order.
    #[must_use]
    pub fn pairs(&self) -> [(&'static str, String); 2] {
        [
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }

    /// Appends the query to `path`, extending an existing query string.
    #[must_use]
    pub fn apply(&self, path: &str) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs())
            .finish();
        let separator = if path.contains('?') { '&' } else { '?' };
        format!("{path}{separator}{query}")
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new(1, 10)
    }
}

/// Percent-encodes `id` so it stays a single path segment.
///
/// Ids that URL resolution would treat as a dot segment or drop entirely
/// are rejected. `%2e` still counts as a dot.
pub(crate) fn segment(id: &str) -> Result<String, BuildError> {
    if matches!(id, "" | "." | "..") {
        return Err(BuildError::InvalidId { id: id.to_string() });
    }
    // byte_serialize writes spaces as '+' and a literal '+' as %2B.
    Ok(form_urlencoded::byte_serialize(id.as_bytes())
        .collect::<String>()
        .replace('+', "%20"))
}
