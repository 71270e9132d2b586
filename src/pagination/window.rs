//! Page-number window
//!
//! Computes which page buttons a pagination bar shows:
//!
//! ```text
//! [1] … [5] [6] [7] [8] [9] … [20]
//! ```
//!
//! Page 1 and the last page are always shown. Between them sits a window of at
//! most [`MAX_VISIBLE_PAGES`] numbered entries that stays centered on the current
//! page and slides back near the end so it keeps its full width. Gaps between the
//! window and the first/last page are marked with an ellipsis.

use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use super::PageState;

/// Number of numbered entries in the middle window (first/last page excluded)
pub const MAX_VISIBLE_PAGES: u32 = 5;

/// A single entry of the pagination bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PageEntry {
    /// Selectable page number
    Page { number: u32 },
    /// Placeholder for skipped page numbers
    Ellipsis,
}

impl PageEntry {
    /// Page number of this entry, `None` for an ellipsis
    pub fn page_number(&self) -> Option<u32> {
        match self {
            PageEntry::Page { number } => Some(*number),
            PageEntry::Ellipsis => None,
        }
    }

    /// Check if this entry is an ellipsis
    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageEntry::Ellipsis)
    }
}

/// Bounded window of page numbers around the current page
///
/// The window is computed once; [`entries`](Self::entries) produces the display
/// sequence lazily and can be called any number of times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    total_pages: u32,
    /// Inclusive middle range, `None` when there are fewer than 3 pages
    range: Option<(u32, u32)>,
}

impl PageWindow {
    /// Compute the window for the given state
    pub fn new(state: &PageState) -> Self {
        Self::compute(state.current_page(), state.total_pages())
    }

    /// Compute the window for a raw page position
    pub fn compute(current_page: u32, total_pages: u32) -> Self {
        // The middle window only exists strictly between page 1 and the last page
        let range = (total_pages > 2).then(|| middle_range(current_page, total_pages));
        Self { total_pages, range }
    }

    /// Total number of pages the window was computed for
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Check if no controls should be rendered at all
    pub fn is_empty(&self) -> bool {
        self.total_pages <= 1
    }

    /// First page of the middle window
    pub fn start_page(&self) -> Option<u32> {
        self.range.map(|(start, _)| start)
    }

    /// Last page of the middle window
    pub fn end_page(&self) -> Option<u32> {
        self.range.map(|(_, end)| end)
    }

    /// Check if an ellipsis follows page 1
    pub fn has_leading_gap(&self) -> bool {
        self.range.is_some_and(|(start, _)| start > 2)
    }

    /// Check if an ellipsis precedes the last page
    pub fn has_trailing_gap(&self) -> bool {
        self.range
            .is_some_and(|(_, end)| end < self.total_pages.saturating_sub(1))
    }

    /// Display entries in left-to-right order
    pub fn entries(&self) -> Entries {
        Entries {
            window: *self,
            cursor: if self.is_empty() { Cursor::Done } else { Cursor::First },
        }
    }
}

impl IntoIterator for &PageWindow {
    type Item = PageEntry;
    type IntoIter = Entries;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

/// Center a window of `MAX_VISIBLE_PAGES` on `current_page`, inside `[2, total_pages - 1]`
///
/// Requires `total_pages > 2`.
fn middle_range(current_page: u32, total_pages: u32) -> (u32, u32) {
    let half = MAX_VISIBLE_PAGES / 2;
    let last_inner = total_pages - 1;

    let mut start = current_page.saturating_sub(half).max(2);
    let end = start.saturating_add(MAX_VISIBLE_PAGES - 1).min(last_inner);

    // Near the end the clamp shrinks the window; slide it back to full width
    if end < start || end - start + 1 < MAX_VISIBLE_PAGES {
        start = end.saturating_sub(MAX_VISIBLE_PAGES - 1).max(2);
    }

    (start, end)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    First,
    LeadingGap,
    Window(u32),
    TrailingGap,
    Last,
    Done,
}

/// Lazy iterator over the entries of a [`PageWindow`]
#[derive(Debug, Clone)]
pub struct Entries {
    window: PageWindow,
    cursor: Cursor,
}

impl Iterator for Entries {
    type Item = PageEntry;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.cursor {
                Cursor::First => {
                    self.cursor = Cursor::LeadingGap;
                    return Some(PageEntry::Page { number: 1 });
                }
                Cursor::LeadingGap => {
                    self.cursor = match self.window.range {
                        Some((start, _)) => Cursor::Window(start),
                        None => Cursor::TrailingGap,
                    };
                    if self.window.has_leading_gap() {
                        return Some(PageEntry::Ellipsis);
                    }
                }
                Cursor::Window(page) => match self.window.range {
                    Some((_, end)) if page <= end => {
                        self.cursor = Cursor::Window(page + 1);
                        return Some(PageEntry::Page { number: page });
                    }
                    _ => self.cursor = Cursor::TrailingGap,
                },
                Cursor::TrailingGap => {
                    self.cursor = Cursor::Last;
                    if self.window.has_trailing_gap() {
                        return Some(PageEntry::Ellipsis);
                    }
                }
                Cursor::Last => {
                    self.cursor = Cursor::Done;
                    return Some(PageEntry::Page {
                        number: self.window.total_pages,
                    });
                }
                Cursor::Done => return None,
            }
        }
    }
}

impl FusedIterator for Entries {}


/// Property-based tests for the page window
#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn rendered(current_page: u32, page_size: u32, total_items: i64) -> (u32, Vec<PageEntry>) {
        let state = PageState::new(current_page, page_size, total_items).unwrap();
        (state.total_pages(), state.window().entries().collect())
    }

    fn numbers(entries: &[PageEntry]) -> Vec<u32> {
        entries.iter().filter_map(PageEntry::page_number).collect()
    }

    /// Positions on a list with at least two pages
    fn multi_page_strategy() -> impl Strategy<Value = (u32, u32, i64)> {
        (1u32..50, 2u64..400).prop_flat_map(|(page_size, total_pages)| {
            let min_items = (total_pages - 1) * u64::from(page_size) + 1;
            let max_items = total_pages * u64::from(page_size);
            (
                1..=total_pages as u32,
                Just(page_size),
                (min_items as i64)..=(max_items as i64),
            )
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        /// A list that fits on one page gets no controls
        #[test]
        fn no_controls_for_single_page(
            page_size in 1u32..1000,
            current_page in 0u32..10,
            fill in 0u32..=1000,
        ) {
            let total_items = i64::from(fill.min(page_size));
            let (_, entries) = rendered(current_page, page_size, total_items);
            prop_assert!(entries.is_empty());
        }

        /// First and last entries are always page 1 and the last page
        #[test]
        fn first_and_last_always_present((current, size, total) in multi_page_strategy()) {
            let (total_pages, entries) = rendered(current, size, total);
            prop_assert_eq!(entries.first(), Some(&PageEntry::Page { number: 1 }));
            prop_assert_eq!(entries.last(), Some(&PageEntry::Page { number: total_pages }));
        }

        /// At most MAX_VISIBLE_PAGES numbered entries sit between the first and last
        #[test]
        fn window_width_is_bounded((current, size, total) in multi_page_strategy()) {
            let (_, entries) = rendered(current, size, total);
            let inner = numbers(&entries).len().saturating_sub(2);
            prop_assert!(inner <= MAX_VISIBLE_PAGES as usize);
        }

        /// Every number is in range, shown once, in ascending order
        #[test]
        fn numbers_are_unique_and_in_range(
            current in 0u32..600,
            size in 1u32..50,
            total in 0i64..10_000,
        ) {
            let (total_pages, entries) = rendered(current, size, total);
            let numbers = numbers(&entries);
            let unique: HashSet<_> = numbers.iter().collect();
            prop_assert_eq!(unique.len(), numbers.len());
            prop_assert!(numbers.iter().all(|n| (1..=total_pages).contains(n)));
            prop_assert!(numbers.windows(2).all(|w| w[0] < w[1]));
        }

        /// An ellipsis marks exactly the places where numbers are skipped
        #[test]
        fn ellipsis_marks_gaps((current, size, total) in multi_page_strategy()) {
            let (_, entries) = rendered(current, size, total);
            for pair in entries.windows(2) {
                if let (Some(a), Some(b)) = (pair[0].page_number(), pair[1].page_number()) {
                    prop_assert_eq!(b, a + 1, "gap without ellipsis between {} and {}", a, b);
                }
            }
            for (i, entry) in entries.iter().enumerate() {
                if entry.is_ellipsis() {
                    let before = entries[i - 1].page_number().unwrap();
                    let after = entries[i + 1].page_number().unwrap();
                    prop_assert!(after > before + 1, "ellipsis between {} and {}", before, after);
                }
            }
        }

        /// The window keeps full width whenever there are enough pages
        #[test]
        fn window_keeps_full_width((current, size, total) in multi_page_strategy()) {
            let (total_pages, entries) = rendered(current, size, total);
            let inner = numbers(&entries).len() - 2;
            let available = total_pages.saturating_sub(2).min(MAX_VISIBLE_PAGES) as usize;
            prop_assert_eq!(inner, available);
        }

        /// The current page is always visible when it is in range
        #[test]
        fn current_page_is_visible((current, size, total) in multi_page_strategy()) {
            let (_, entries) = rendered(current, size, total);
            prop_assert!(numbers(&entries).contains(&current));
        }
    }
}
