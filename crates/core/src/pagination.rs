//! Pagination window calculation
//!
//! Pure functions that turn an item count and a 1-based page number into the
//! bounds a caller needs to slice an item list and to render a bounded set of
//! page-selector buttons. Nothing here performs I/O; callers re-run the
//! calculation every time the item count or the current page changes.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Error type for pagination operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    #[error("Invalid argument: {0} must be greater than zero")]
    InvalidArgument(&'static str),

    #[error("Pagination overflow: page {page} with {items_per_page} items per page")]
    Overflow {
        page: usize,
        items_per_page: usize,
    },
}

/// The four integers a pagination window is derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct PaginationRequest {
    pub total_items: usize,
    /// 1-based page number
    pub current_page: usize,
    pub items_per_page: usize,
    pub buttons_per_page: usize,
}

impl PaginationRequest {
    pub fn new(
        total_items: usize,
        current_page: usize,
        items_per_page: usize,
        buttons_per_page: usize,
    ) -> Self {
        Self {
            total_items,
            current_page,
            items_per_page,
            buttons_per_page,
        }
    }

    /// Reject the inputs the window arithmetic is not defined for.
    pub fn validate(&self) -> Result<(), PaginationError> {
        if self.items_per_page == 0 {
            return Err(PaginationError::InvalidArgument("items_per_page"));
        }
        if self.buttons_per_page == 0 {
            return Err(PaginationError::InvalidArgument("buttons_per_page"));
        }
        if self.current_page == 0 {
            return Err(PaginationError::InvalidArgument("current_page"));
        }
        Ok(())
    }

    pub fn calculate(&self) -> Result<PaginationWindow, PaginationError> {
        self.validate()?;

        let total_pages = self.total_items.div_ceil(self.items_per_page);
        let current_set = self.current_page.div_ceil(self.buttons_per_page);
        // current_set >= 1, and (current_set - 1) * buttons_per_page < current_page
        let start_page = (current_set - 1) * self.buttons_per_page + 1;
        let end_page = start_page
            .saturating_add(self.buttons_per_page - 1)
            .min(total_pages);

        let overflow = || PaginationError::Overflow {
            page: self.current_page,
            items_per_page: self.items_per_page,
        };
        let end_index = self
            .current_page
            .checked_mul(self.items_per_page)
            .ok_or_else(overflow)?;
        let start_index = end_index - self.items_per_page;

        Ok(PaginationWindow {
            total_pages,
            current_set,
            start_page,
            end_page,
            start_index,
            end_index,
            current_page: self.current_page,
            items_per_page: self.items_per_page,
            buttons_per_page: self.buttons_per_page,
        })
    }
}

/// Everything a caller needs to render one page of a list.
///
/// `start_index..end_index` is the item slice of the current page and
/// `start_page..=end_page` the block of page buttons (the "button set")
/// that contains it. The remaining fields echo the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct PaginationWindow {
    pub total_pages: usize,
    pub current_set: usize,
    pub start_page: usize,
    pub end_page: usize,
    pub start_index: usize,
    pub end_index: usize,
    pub current_page: usize,
    pub items_per_page: usize,
    pub buttons_per_page: usize,
}

impl PaginationWindow {
    /// Page numbers to render as buttons. Empty when `end_page < start_page`,
    /// which happens when there are no items or the page is past the end.
    pub fn button_range(&self) -> RangeInclusive<usize> {
        self.start_page..=self.end_page
    }

    pub fn has_buttons(&self) -> bool {
        self.end_page >= self.start_page
    }

    /// Number of button sets needed to cover every page.
    pub fn total_sets(&self) -> usize {
        self.total_pages.div_ceil(self.buttons_per_page)
    }

    pub fn has_prev_set(&self) -> bool {
        self.current_set > 1
    }

    /// Target page of the "previous set" control: the last page of the
    /// preceding button set.
    pub fn prev_set_page(&self) -> Option<usize> {
        self.has_prev_set().then(|| self.start_page - 1)
    }

    pub fn has_next_set(&self) -> bool {
        self.end_page < self.total_pages
    }

    /// Target page of the "next set" control: the first page of the
    /// following button set.
    pub fn next_set_page(&self) -> Option<usize> {
        self.has_next_set().then(|| self.end_page + 1)
    }

    /// Whether the current page holds any item.
    pub fn is_page_in_range(&self) -> bool {
        self.current_page <= self.total_pages
    }

    /// Clamp the item slice to a list of `len` items.
    pub fn slice_bounds(&self, len: usize) -> (usize, usize) {
        (self.start_index.min(len), self.end_index.min(len))
    }
}

/// Calculate the pagination window for the given page.
///
/// # Arguments
/// * `total_items` - Number of items in the full list
/// * `current_page` - 1-based page number
/// * `items_per_page` - Items shown on one page
/// * `buttons_per_page` - Page buttons shown at once
///
/// # Returns
/// The window on success, `PaginationError::InvalidArgument` when any of the
/// last three arguments is zero.
pub fn calculate_pagination(
    total_items: usize,
    current_page: usize,
    items_per_page: usize,
    buttons_per_page: usize,
) -> Result<PaginationWindow, PaginationError> {
    PaginationRequest::new(total_items, current_page, items_per_page, buttons_per_page).calculate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_first_page_of_short_list() {
        let window = calculate_pagination(12, 1, 5, 5).unwrap();

        assert_eq!(
            window,
            PaginationWindow {
                total_pages: 3,
                current_set: 1,
                start_page: 1,
                end_page: 3,
                start_index: 0,
                end_index: 5,
                current_page: 1,
                items_per_page: 5,
                buttons_per_page: 5,
            }
        );
    }

    #[test]
    fn test_last_page_slice_clamps() {
        let window = calculate_pagination(12, 3, 5, 5).unwrap();

        assert_eq!(window.start_index, 10);
        assert_eq!(window.end_index, 15);
        assert_eq!(window.slice_bounds(12), (10, 12));
    }

    #[test]
    fn test_empty_list() {
        let window = calculate_pagination(0, 1, 5, 5).unwrap();

        assert_eq!(window.total_pages, 0);
        assert_eq!(window.start_page, 1);
        assert_eq!(window.end_page, 0);
        assert!(!window.has_buttons());
        assert_eq!(window.button_range().count(), 0);
        assert!(!window.has_prev_set());
        assert!(!window.has_next_set());
        assert_eq!(window.slice_bounds(0), (0, 0));
    }

    #[test]
    fn test_hundred_posts_second_set() {
        // 100 posts, 5 per page: 20 pages in 4 sets of 5 buttons
        let window = calculate_pagination(100, 7, 5, 5).unwrap();

        assert_eq!(window.total_pages, 20);
        assert_eq!(window.current_set, 2);
        assert_eq!(window.start_page, 6);
        assert_eq!(window.end_page, 10);
        assert_eq!(window.start_index, 30);
        assert_eq!(window.end_index, 35);
        assert_eq!(window.total_sets(), 4);
        assert_eq!(window.prev_set_page(), Some(5));
        assert_eq!(window.next_set_page(), Some(11));
    }

    #[test]
    fn test_last_set_is_truncated() {
        let window = calculate_pagination(62, 13, 5, 5).unwrap();

        assert_eq!(window.total_pages, 13);
        assert_eq!(window.start_page, 11);
        assert_eq!(window.end_page, 13);
        assert_eq!(window.button_range().collect::<Vec<_>>(), vec![11, 12, 13]);
        assert_eq!(window.next_set_page(), None);
        assert_eq!(window.prev_set_page(), Some(10));
    }

    #[test]
    fn test_page_past_the_end() {
        let window = calculate_pagination(12, 9, 5, 5).unwrap();

        assert!(!window.is_page_in_range());
        assert_eq!(window.start_page, 6);
        assert_eq!(window.end_page, 3);
        assert!(!window.has_buttons());
        assert_eq!(window.slice_bounds(12), (12, 12));
    }

    #[test]
    fn test_single_button_per_set() {
        let window = calculate_pagination(30, 4, 10, 1).unwrap();

        assert_eq!(window.current_set, 4);
        assert_eq!(window.start_page, 4);
        assert_eq!(window.end_page, 3);
        assert_eq!(window.total_pages, 3);
    }

    #[test]
    fn test_zero_items_per_page_is_rejected() {
        let err = calculate_pagination(12, 1, 0, 5).unwrap_err();
        assert_eq!(err, PaginationError::InvalidArgument("items_per_page"));
        assert!(err.to_string().contains("items_per_page"));
    }

    #[test]
    fn test_zero_buttons_per_page_is_rejected() {
        let err = calculate_pagination(12, 1, 5, 0).unwrap_err();
        assert_eq!(err, PaginationError::InvalidArgument("buttons_per_page"));
    }

    #[test]
    fn test_zero_page_is_rejected() {
        let err = calculate_pagination(12, 0, 5, 5).unwrap_err();
        assert_eq!(err, PaginationError::InvalidArgument("current_page"));
    }

    #[test]
    fn test_index_overflow_is_rejected() {
        let err = calculate_pagination(10, usize::MAX, 2, 5).unwrap_err();
        assert!(matches!(err, PaginationError::Overflow { .. }));
    }

    #[test]
    fn test_huge_button_set_does_not_overflow() {
        let window = calculate_pagination(10, 1, 5, usize::MAX).unwrap();
        assert_eq!(window.start_page, 1);
        assert_eq!(window.end_page, 2);
    }

    #[test]
    fn test_window_invariants_hold() {
        for total_items in [0, 1, 4, 5, 6, 12, 99, 100, 101] {
            for items_per_page in 1..=7 {
                for buttons_per_page in 1..=6 {
                    for current_page in 1..=25 {
                        let window = calculate_pagination(
                            total_items,
                            current_page,
                            items_per_page,
                            buttons_per_page,
                        )
                        .unwrap();

                        let remainder = usize::from(total_items % items_per_page != 0);
                        assert_eq!(window.total_pages, total_items / items_per_page + remainder);
                        assert!(window.start_page >= 1);
                        assert_eq!((window.start_page - 1) % buttons_per_page, 0);
                        assert!(
                            window.button_range().contains(&current_page)
                                || !window.is_page_in_range()
                        );
                        assert!(window.end_page <= window.total_pages);
                        if window.total_pages >= window.start_page {
                            assert!(window.end_page >= window.start_page);
                        }
                        assert!(window.end_index >= window.start_index);
                        assert_eq!(window.end_index - window.start_index, items_per_page);
                        if window.is_page_in_range() {
                            assert_eq!(
                                window.has_next_set(),
                                window.current_set < window.total_sets()
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_request_round_trips_through_json() {
        let request = PaginationRequest::new(12, 2, 5, 5);
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"total_items\":12"));

        let window = request.calculate().unwrap();
        let value = serde_json::to_value(window).unwrap();
        assert_eq!(value["start_index"], 5);
        assert_eq!(value["end_index"], 10);
    }
}
