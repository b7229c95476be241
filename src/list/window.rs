//! # List Window
//!
//! A fixed item collection viewed through a window of `size` rows, with an
//! active item and an optional search filter.
//!
//! All navigation works on the *effective* item set: every item when no
//! search is active, otherwise the items the searcher accepted, in their
//! original order. Positions handed out by [`ListWindow::index`] and
//! [`ListWindow::visible_indices`] are always indices into the original
//! collection.

use crate::error::{PromptError, Result};

/// Decides whether the item at `index` matches the search `term`.
pub type Searcher = Box<dyn Fn(&str, usize) -> bool>;

pub struct ListWindow<T> {
    items: Vec<T>,
    size: usize,
    /// Active position within the effective set.
    cursor: usize,
    /// First visible position within the effective set.
    start: usize,
    /// Original indices of the effective set while a search is active.
    scope: Option<Vec<usize>>,
    term: Option<String>,
    searcher: Option<Searcher>,
}

impl<T> ListWindow<T> {
    /// Creates a window showing `size` items at a time.
    pub fn new(items: Vec<T>, size: usize) -> Result<Self> {
        if size < 1 {
            return Err(PromptError::Config(format!(
                "list size {size} must be greater than 0"
            )));
        }

        Ok(Self {
            items,
            size,
            cursor: 0,
            start: 0,
            scope: None,
            term: None,
            searcher: None,
        })
    }

    pub fn with_searcher(mut self, searcher: impl Fn(&str, usize) -> bool + 'static) -> Self {
        self.searcher = Some(Box::new(searcher));
        self
    }

    pub fn set_searcher(&mut self, searcher: Option<Searcher>) {
        self.searcher = searcher;
    }

    pub fn can_search(&self) -> bool {
        self.searcher.is_some()
    }

    /// Number of items in the whole collection.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items in the effective set.
    pub fn effective_len(&self) -> usize {
        match &self.scope {
            Some(scope) => scope.len(),
            None => self.items.len(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn filter_term(&self) -> Option<&str> {
        self.term.as_deref()
    }

    fn original(&self, position: usize) -> usize {
        match &self.scope {
            Some(scope) => scope[position],
            None => position,
        }
    }

    fn max_start(&self) -> usize {
        self.effective_len().saturating_sub(self.size)
    }

    /// Original index of the active item, or `None` when nothing matches.
    pub fn index(&self) -> Option<usize> {
        (self.cursor < self.effective_len()).then(|| self.original(self.cursor))
    }

    /// Moves to the next item, sliding the window by one when the active
    /// item would leave it. No-op on the last item.
    pub fn next(&mut self) {
        if self.cursor + 1 < self.effective_len() {
            self.cursor += 1;
        }

        if self.start + self.size <= self.cursor {
            self.start = self.cursor + 1 - self.size;
        }
    }

    /// Moves to the previous item. No-op on the first item.
    pub fn prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);

        if self.start > self.cursor {
            self.start = self.cursor;
        }
    }

    /// Slides the window back a full page; the first visible item becomes
    /// active.
    pub fn page_up(&mut self) {
        self.start = self.start.saturating_sub(self.size);

        if self.start < self.cursor {
            self.cursor = self.start;
        }
    }

    /// Slides the window forward a full page, never past the final page.
    ///
    /// The first visible item becomes active unless the active item is
    /// already further down inside the new window. When the window was
    /// already on the final page the last item becomes active.
    pub fn page_down(&mut self) {
        let count = self.effective_len();
        if count == 0 {
            return;
        }

        let start = (self.start + self.size).min(self.max_start());
        let moved = start != self.start;
        self.start = start;

        if !moved {
            self.cursor = count - 1;
        } else if self.start > self.cursor {
            self.cursor = self.start;
        }
    }

    pub fn can_page_up(&self) -> bool {
        self.start > 0
    }

    pub fn can_page_down(&self) -> bool {
        self.start + self.size < self.effective_len()
    }

    /// Filters the effective set down to items accepted by the searcher and
    /// activates the first match. Does nothing without a searcher.
    pub fn search(&mut self, term: &str) {
        let Some(searcher) = &self.searcher else {
            return;
        };

        let scope: Vec<usize> = (0..self.items.len())
            .filter(|i| searcher(term, *i))
            .collect();

        tracing::trace!(term, matches = scope.len(), "list search");

        self.scope = Some(scope);
        self.term = Some(term.to_string());
        self.cursor = 0;
        self.start = 0;
    }

    /// Drops the filter and activates the first item.
    pub fn cancel_search(&mut self) {
        self.scope = None;
        self.term = None;
        self.cursor = 0;
        self.start = 0;
    }

    /// Activates the item at `position` of the effective set (clamped),
    /// scrolling the window just enough to show it.
    pub fn set_cursor(&mut self, position: usize) {
        self.cursor = position.min(self.effective_len().saturating_sub(1));

        if self.start > self.cursor {
            self.start = self.cursor;
        } else if self.start + self.size <= self.cursor {
            self.start = self.cursor + 1 - self.size;
        }
    }

    /// Scrolls the window to `start` (clamped), keeping the active item in
    /// view.
    pub fn set_start(&mut self, start: usize) {
        let lowest = (self.cursor + 1).saturating_sub(self.size);
        self.start = start.min(self.max_start()).clamp(lowest, self.cursor.max(lowest));
    }

    /// The visible slice of the effective set and the offset of the active
    /// item within it.
    pub fn visible_items(&self) -> (Vec<&T>, Option<usize>) {
        let items = self
            .visible_indices()
            .into_iter()
            .map(|i| &self.items[i])
            .collect();
        (items, self.active_offset())
    }

    /// Original indices of the visible items, top to bottom.
    pub fn visible_indices(&self) -> Vec<usize> {
        let end = (self.start + self.size).min(self.effective_len());
        (self.start..end).map(|p| self.original(p)).collect()
    }

    /// Offset of the active item within the visible slice.
    pub fn active_offset(&self) -> Option<usize> {
        self.index().map(|_| self.cursor - self.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(size: usize) -> ListWindow<char> {
        ListWindow::new(('a'..='j').collect(), size).expect("valid list")
    }

    fn visible(list: &ListWindow<char>) -> (String, Option<char>) {
        let (items, active) = list.visible_items();
        let shown: String = items.iter().copied().collect();
        (shown, active.map(|i| *items[i]))
    }

    #[test]
    fn test_rejects_zero_size() {
        assert!(matches!(
            ListWindow::new(vec![1, 2, 3], 0),
            Err(PromptError::Config(_))
        ));
    }

    #[test]
    fn test_movement() {
        let mut list = letters(4);

        let steps: &[(&str, char, &str)] = &[
            ("next", 'b', "abcd"),
            ("prev", 'a', "abcd"),
            ("prev", 'a', "abcd"),
            ("next", 'b', "abcd"),
            ("next", 'c', "abcd"),
            ("next", 'd', "abcd"),
            ("next", 'e', "bcde"),
            ("prev", 'd', "bcde"),
            ("up", 'a', "abcd"),
            ("up", 'a', "abcd"),
            ("down", 'e', "efgh"),
            ("down", 'g', "ghij"),
            ("down", 'j', "ghij"),
        ];

        for (i, (step, selected, window)) in steps.iter().enumerate() {
            match *step {
                "next" => list.next(),
                "prev" => list.prev(),
                "up" => list.page_up(),
                "down" => list.page_down(),
                other => panic!("unknown step {other}"),
            }
            let (shown, active) = visible(&list);
            assert_eq!(shown, *window, "window after step {i} ({step})");
            assert_eq!(active, Some(*selected), "selection after step {i} ({step})");
        }
    }

    #[test]
    fn test_next_to_the_end_then_noop() {
        let mut list = letters(3);
        for _ in 0..9 {
            list.next();
        }
        assert_eq!(list.index(), Some(9));
        list.next();
        list.next();
        assert_eq!(list.index(), Some(9));
        assert_eq!(list.start(), 7);
    }

    #[test]
    fn test_page_down_fewer_items_than_window() {
        let mut list = ListWindow::new(vec!['a', 'b'], 4).expect("valid list");
        list.page_down();
        assert_eq!(visible(&list), ("ab".to_string(), Some('b')));
        assert_eq!(list.start(), 0);
    }

    #[test]
    fn test_page_down_on_final_page_selects_last() {
        let mut list = letters(4);
        list.set_cursor(7);
        list.set_start(6);
        assert_eq!(list.start(), 6);

        list.page_down();
        assert_eq!(list.start(), 6, "window must not move past the final page");
        assert_eq!(list.index(), Some(9));
    }

    #[test]
    fn test_page_down_keeps_cursor_further_down() {
        let mut list = letters(4);
        list.set_cursor(3);
        list.page_down();
        // window e..h, cursor d is behind it and jumps to e
        assert_eq!(list.index(), Some(4));

        let mut list = letters(4);
        list.set_cursor(3);
        list.set_start(2);
        list.page_down();
        // window g..j, cursor d jumps to g
        assert_eq!(list.start(), 6);
        assert_eq!(list.index(), Some(6));

        let mut list = letters(4);
        list.set_cursor(7);
        list.set_start(5);
        list.page_down();
        // window g..j already holds h
        assert_eq!(list.start(), 6);
        assert_eq!(list.index(), Some(7));
    }

    #[test]
    fn test_page_round_trip() {
        let mut list = letters(3);
        list.page_down();
        let start = list.start();
        list.page_down();
        list.page_up();
        assert_eq!(list.start(), start);
    }

    #[test]
    fn test_small_list_never_scrolls() {
        let mut list = ListWindow::new(vec![1, 2, 3], 5).expect("valid list");
        list.next();
        list.next();
        list.next();
        list.page_down();
        list.page_up();
        assert_eq!(list.start(), 0);
        assert!(!list.can_page_down());
        assert!(!list.can_page_up());
    }

    #[test]
    fn test_search_filters_in_order() {
        let words = vec!["apple", "banana", "avocado", "cherry", "apricot"];
        let lookup = words.clone();
        let mut list = ListWindow::new(words, 2)
            .expect("valid list")
            .with_searcher(move |term, i| lookup[i].starts_with(term));

        list.search("a");
        assert_eq!(list.effective_len(), 3);
        assert_eq!(list.visible_indices(), vec![0, 2]);
        list.next();
        list.next();
        assert_eq!(list.index(), Some(4));
        assert_eq!(list.visible_indices(), vec![2, 4]);
        assert_eq!(list.filter_term(), Some("a"));
    }

    #[test]
    fn test_search_without_matches_is_not_found() {
        let mut list = letters(4).with_searcher(|term, _| term.is_empty());
        list.search("zzz");
        assert_eq!(list.index(), None);
        let (items, active) = list.visible_items();
        assert!(items.is_empty());
        assert_eq!(active, None);

        list.next();
        list.prev();
        list.page_down();
        list.page_up();
        assert_eq!(list.index(), None);
    }

    #[test]
    fn test_cancel_search_restores_order() {
        let mut list = letters(4).with_searcher(|_, i| i % 2 == 1);
        list.search("x");
        list.next();
        assert_eq!(list.index(), Some(3));

        list.cancel_search();
        assert_eq!(list.index(), Some(0));
        assert_eq!(list.effective_len(), 10);
        assert_eq!(visible(&list), ("abcd".to_string(), Some('a')));
        assert_eq!(list.filter_term(), None);
    }

    #[test]
    fn test_search_without_searcher_is_noop() {
        let mut list = letters(4);
        list.next();
        list.search("a");
        assert_eq!(list.index(), Some(1));
        assert!(!list.can_search());
    }

    #[test]
    fn test_set_cursor_scrolls_into_view() {
        let mut list = letters(4);
        list.set_cursor(8);
        assert_eq!(list.start(), 5);
        assert_eq!(list.index(), Some(8));

        list.set_cursor(100);
        assert_eq!(list.index(), Some(9));
        assert_eq!(list.start(), 6);

        list.set_cursor(1);
        assert_eq!(list.start(), 1);
    }

    #[test]
    fn test_set_start_keeps_cursor_visible() {
        let mut list = letters(4);
        list.set_cursor(5);
        list.set_start(0);
        assert_eq!(list.start(), 2);
        list.set_start(9);
        assert_eq!(list.start(), 5);
    }

    #[test]
    fn test_empty_list() {
        let mut list: ListWindow<u8> = ListWindow::new(Vec::new(), 3).expect("valid list");
        list.next();
        list.page_down();
        assert_eq!(list.index(), None);
        assert!(list.visible_items().0.is_empty());
    }
}
