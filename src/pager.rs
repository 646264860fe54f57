//! Cursor pagination over a merged result set
//!
//! The cursor is opaque to callers but is internally a decimal offset into
//! the result set produced by re-running the same query. There is no
//! snapshot isolation: if the backend shifts between calls the offset may
//! land on different items, or past the end (which fails the bounds check).

use thiserror::Error;

use crate::types::Pagination;

/// Fixed page size for all list/search responses
pub const PAGE_SIZE: usize = 20;

/// A cursor that is malformed or points past the end of the result set
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid cursor \"{0}\": use the cursor returned by the previous call")]
pub struct InvalidCursor(pub String);

/// One page sliced out of a merged result set
#[derive(Debug)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub offset: usize,
    pub total: usize,
}

impl<'a, T> Page<'a, T> {
    pub fn returned(&self) -> usize {
        self.items.len()
    }

    /// Cursor for the following page, or None at the end of results
    pub fn next_cursor(&self) -> Option<String> {
        let consumed = self.offset + self.items.len();
        if consumed < self.total {
            Some(consumed.to_string())
        } else {
            None
        }
    }

    pub fn pagination(&self) -> Pagination {
        Pagination {
            page_size: PAGE_SIZE,
            total: self.total,
            offset: self.offset,
            returned: self.returned(),
            next_cursor: self.next_cursor(),
        }
    }
}

/// Slice one fixed-size page out of `items` at the cursor's offset
///
/// An absent cursor means offset 0. A present cursor must round-trip a value
/// returned by a previous call: it has to parse as a non-negative integer
/// and, when there are any items at all, fall inside them. Against an empty
/// set any parseable offset yields the degenerate empty page.
pub fn paginate<'a, T>(items: &'a [T], cursor: Option<&str>) -> Result<Page<'a, T>, InvalidCursor> {
    let offset = parse_cursor(cursor)?;

    if !items.is_empty() && offset >= items.len() {
        return Err(InvalidCursor(cursor.unwrap_or_default().to_string()));
    }

    let end = offset.saturating_add(PAGE_SIZE).min(items.len());
    let slice = if offset < items.len() {
        &items[offset..end]
    } else {
        &[]
    };

    Ok(Page {
        items: slice,
        offset,
        total: items.len(),
    })
}

fn parse_cursor(cursor: Option<&str>) -> Result<usize, InvalidCursor> {
    let Some(value) = cursor else {
        return Ok(0);
    };
    value
        .parse::<usize>()
        .map_err(|_| InvalidCursor(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn test_first_page_without_cursor() {
        let set = items(45);
        let page = paginate(&set, None).unwrap();
        assert_eq!(page.offset, 0);
        assert_eq!(page.total, 45);
        assert_eq!(page.returned(), 20);
        assert_eq!(page.items, &set[..20]);
        assert_eq!(page.next_cursor().as_deref(), Some("20"));
    }

    #[test]
    fn test_walking_cursors_visits_every_item_once() {
        let set = items(45);
        let mut seen = Vec::new();
        let mut cursor: Option<String> = None;
        let mut sizes = Vec::new();

        loop {
            let page = paginate(&set, cursor.as_deref()).unwrap();
            sizes.push(page.returned());
            seen.extend_from_slice(page.items);
            match page.next_cursor() {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        assert_eq!(sizes, vec![20, 20, 5]);
        assert_eq!(seen, set);
    }

    #[test]
    fn test_last_page_has_no_cursor() {
        let set = items(45);
        let page = paginate(&set, Some("40")).unwrap();
        assert_eq!(page.returned(), 5);
        assert_eq!(page.next_cursor(), None);
    }

    #[test]
    fn test_exact_multiple_ends_without_cursor() {
        let set = items(40);
        let page = paginate(&set, Some("20")).unwrap();
        assert_eq!(page.returned(), 20);
        assert_eq!(page.next_cursor(), None);
    }

    #[test]
    fn test_rejects_malformed_cursors() {
        let set = items(10);
        assert!(paginate(&set, Some("abc")).is_err());
        assert!(paginate(&set, Some("-1")).is_err());
        assert!(paginate(&set, Some("1.5")).is_err());
        assert!(paginate(&set, Some("")).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_cursor() {
        let set = items(10);
        assert!(paginate(&set, Some("10")).is_err());
        assert!(paginate(&set, Some("1000")).is_err());
    }

    #[test]
    fn test_empty_set_is_lenient_about_offsets() {
        let empty: Vec<usize> = Vec::new();
        let page = paginate(&empty, None).unwrap();
        assert_eq!(page.total, 0);
        assert_eq!(page.returned(), 0);
        assert_eq!(page.next_cursor(), None);

        // Numeric cursors are tolerated against zero results
        let page = paginate(&empty, Some("5")).unwrap();
        assert_eq!(page.returned(), 0);

        // Even ones near usize::MAX, where offset + page size would overflow
        let huge = usize::MAX.to_string();
        let page = paginate(&empty, Some(&huge)).unwrap();
        assert_eq!(page.returned(), 0);
        assert_eq!(page.next_cursor(), None);

        // Malformed ones are still rejected
        assert!(paginate(&empty, Some("abc")).is_err());
    }

    #[test]
    fn test_error_message_names_the_remediation() {
        let set = items(10);
        let err = paginate(&set, Some("abc")).unwrap_err();
        assert!(err
            .to_string()
            .contains("use the cursor returned by the previous call"));
    }

    #[test]
    fn test_pagination_metadata() {
        let set = items(45);
        let meta = paginate(&set, Some("20")).unwrap().pagination();
        assert_eq!(meta.page_size, PAGE_SIZE);
        assert_eq!(meta.total, 45);
        assert_eq!(meta.offset, 20);
        assert_eq!(meta.returned, 20);
        assert_eq!(meta.next_cursor.as_deref(), Some("40"));
    }
}
