//! Property tests for the text cursor and the list window
//!
//! Random operation sequences checked against the invariants the sessions
//! rely on when drawing frames.

use proptest::prelude::*;
use termprompt::{Cursor, Key, ListWindow};

#[derive(Debug, Clone)]
enum EditOp {
    Key(Key),
    Insert(String),
    MoveBy(isize),
    MoveTo(usize),
}

fn edit_op() -> impl Strategy<Value = EditOp> {
    prop_oneof![
        prop::sample::select(vec![
            Key::Backspace,
            Key::Delete,
            Key::Left,
            Key::Right,
            Key::Home,
            Key::End,
        ])
        .prop_map(EditOp::Key),
        any::<char>().prop_map(|c| EditOp::Key(Key::Char(c))),
        "[a-zé日]{0,4}".prop_map(EditOp::Insert),
        (-6isize..6).prop_map(EditOp::MoveBy),
        (0usize..12).prop_map(EditOp::MoveTo),
    ]
}

#[derive(Debug, Clone)]
enum ListOp {
    Next,
    Prev,
    PageUp,
    PageDown,
    SetCursor(usize),
    SetStart(usize),
    Search(String),
    CancelSearch,
}

fn list_op() -> impl Strategy<Value = ListOp> {
    prop_oneof![
        4 => Just(ListOp::Next),
        4 => Just(ListOp::Prev),
        2 => Just(ListOp::PageUp),
        2 => Just(ListOp::PageDown),
        1 => (0usize..50).prop_map(ListOp::SetCursor),
        1 => (0usize..50).prop_map(ListOp::SetStart),
        1 => "[0-9]{0,2}".prop_map(ListOp::Search),
        1 => Just(ListOp::CancelSearch),
    ]
}

fn numbered(count: usize, size: usize) -> ListWindow<String> {
    let items: Vec<String> = (0..count).map(|i| i.to_string()).collect();
    let labels = items.clone();
    ListWindow::new(items, size)
        .expect("size is positive")
        .with_searcher(move |term, index| labels[index].contains(term))
}

fn apply(list: &mut ListWindow<String>, op: &ListOp) {
    match op {
        ListOp::Next => list.next(),
        ListOp::Prev => list.prev(),
        ListOp::PageUp => list.page_up(),
        ListOp::PageDown => list.page_down(),
        ListOp::SetCursor(p) => list.set_cursor(*p),
        ListOp::SetStart(s) => list.set_start(*s),
        ListOp::Search(term) => list.search(term),
        ListOp::CancelSearch => list.cancel_search(),
    }
}

proptest! {
    /// The insertion point never leaves the text
    #[test]
    fn prop_cursor_position_within_text(
        seed in "[a-z]{0,6}",
        ops in prop::collection::vec(edit_op(), 0..40),
    ) {
        let mut cursor = Cursor::new(&seed);
        for op in &ops {
            match op {
                EditOp::Key(key) => {
                    cursor.edit(*key);
                }
                EditOp::Insert(text) => cursor.insert(text),
                EditOp::MoveBy(delta) => cursor.move_by(*delta),
                EditOp::MoveTo(position) => cursor.move_to(*position),
            }
            prop_assert!(cursor.position() <= cursor.len());
            prop_assert_eq!(cursor.len(), cursor.get().chars().count());
        }
    }

    /// Typing at the end of the text appends exactly the typed runes
    #[test]
    fn prop_typing_appends(seed in "[a-z]{0,6}", typed in "[a-zA-Z0-9 ]{0,10}") {
        let mut cursor = Cursor::new(&seed);
        for c in typed.chars() {
            cursor.edit(Key::Char(c));
        }
        prop_assert_eq!(cursor.get(), format!("{seed}{typed}"));
        prop_assert_eq!(cursor.position(), cursor.len());
    }

    /// The active item stays inside the window and the effective set
    #[test]
    fn prop_list_window_invariants(
        count in 1usize..30,
        size in 1usize..8,
        ops in prop::collection::vec(list_op(), 0..60),
    ) {
        let mut list = numbered(count, size);
        for op in &ops {
            apply(&mut list, op);

            let visible = list.visible_indices();
            prop_assert!(visible.len() <= size);

            match list.index() {
                Some(index) => {
                    prop_assert!(index < count);
                    prop_assert!(list.effective_len() > 0);
                    let offset = list.active_offset().expect("active item");
                    prop_assert!(offset < size);
                    prop_assert_eq!(visible[offset], index);
                }
                None => {
                    prop_assert_eq!(list.effective_len(), 0);
                    prop_assert!(visible.is_empty());
                }
            }

            if let Some(term) = list.filter_term() {
                for index in &visible {
                    prop_assert!(index.to_string().contains(term));
                }
            }
        }
    }

    /// Stepping forward from the top reaches the last item
    #[test]
    fn prop_next_reaches_last(count in 1usize..40, size in 1usize..8) {
        let mut list = numbered(count, size);
        for _ in 1..count {
            list.next();
        }
        prop_assert_eq!(list.index(), Some(count - 1));
        prop_assert_eq!(list.start(), count.saturating_sub(size));

        list.next();
        prop_assert_eq!(list.index(), Some(count - 1));
    }

    /// A page down followed by a page up returns to the same window
    #[test]
    fn prop_page_round_trip(
        (count, size, start) in (1usize..6)
            .prop_flat_map(|size| (2 * size..40, Just(size)))
            .prop_flat_map(|(count, size)| (Just(count), Just(size), 0..=count - 2 * size)),
    ) {
        let mut list = numbered(count, size);
        list.set_cursor(start);
        list.set_start(start);
        prop_assert_eq!(list.start(), start);

        list.page_down();
        prop_assert_eq!(list.start(), start + size);
        prop_assert_eq!(list.index(), Some(start + size));

        list.page_up();
        prop_assert_eq!(list.start(), start);
        prop_assert_eq!(list.index(), Some(start));
    }
}
