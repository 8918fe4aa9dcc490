//! Pagination utilities for inventory listings
//!
//! Inventory pages hold 12 listings. Requested page numbers arrive as raw
//! query-string text and are never rejected: anything unparseable selects the
//! first page, anything out of range is clamped to the nearest valid page.

use serde::Serialize;

/// Page size constant for inventory pagination
pub const PAGE_SIZE: usize = 12;

/// Pagination metadata calculated from total results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// Current page number (1-indexed)
    pub page: usize,
    /// Total number of pages (an empty result still has one page)
    pub total_pages: usize,
    /// Index of the first item on the page
    pub offset: usize,
    pub page_size: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl Pagination {
    /// Half-open index range of the current page within the full result
    pub fn range(&self, total_results: usize) -> std::ops::Range<usize> {
        let start = self.offset.min(total_results);
        let end = (self.offset + self.page_size).min(total_results);
        start..end
    }
}

/// Parse an optionally signed run of digits, saturating at the `i64` limits
///
/// `None` for empty or non-numeric text only; "99999999999999999999" is
/// `i64::MAX`, not absent.
pub fn parse_saturating_int(raw: &str) -> Option<i64> {
    let value = raw.trim();
    let (negative, digits) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match value.parse::<i64>() {
        Ok(n) => Some(n),
        Err(_) if negative => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

/// Parse a raw `page` parameter; malformed input selects page 1
pub fn parse_page_number(raw: Option<&str>) -> i64 {
    raw.and_then(parse_saturating_int).unwrap_or(1)
}

/// Calculate pagination metadata from total results and requested page
///
/// Ensures page is within valid bounds [1, total_pages]
///
/// # Arguments
/// * `total_results` - Total number of items in result set
/// * `requested_page` - Page number requested by user (may be out of bounds)
///
/// # Returns
/// Pagination metadata with sanitized page number and calculated offset
///
/// # Examples
/// ```
/// use todde_common::pagination::calculate_pagination;
///
/// // 30 total results = 3 pages (12 + 12 + 6)
/// let p = calculate_pagination(30, 2);
/// assert_eq!(p.page, 2);
/// assert_eq!(p.total_pages, 3);
/// assert_eq!(p.offset, 12);
///
/// // Requesting out-of-bounds page gets clamped
/// let p = calculate_pagination(30, 99);
/// assert_eq!(p.page, 3);  // Clamped to last page
/// assert_eq!(p.offset, 24);
/// ```
pub fn calculate_pagination(total_results: usize, requested_page: i64) -> Pagination {
    let total_pages = total_results.div_ceil(PAGE_SIZE).max(1);
    let page = usize::try_from(requested_page.max(1))
        .unwrap_or(usize::MAX)
        .min(total_pages);
    let offset = (page - 1) * PAGE_SIZE;

    Pagination {
        page,
        total_pages,
        offset,
        page_size: PAGE_SIZE,
        has_previous: page > 1,
        has_next: page < total_pages,
    }
}
