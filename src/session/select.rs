//! # Select
//!
//! Choosing one item from a list, optionally filtered by a search term.
//!
//! The browsing machinery ([`KeyBindings`], the list frame, search entry)
//! is shared with [`MultiSelect`](super::MultiSelect).

use super::prompt::Prompt;
use super::{drive, resolve_styles, Interaction, Step};
use crate::error::{PromptError, Result};
use crate::input::{Cursor, CrosstermTerminal, Key, KeySource, Pointer};
use crate::list::ListWindow;
use crate::ui::{Item, Renderer, Styles, TemplateKind, Templates};
use std::rc::Rc;

/// A key and how it is spelled in help output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub key: Key,
    pub display: String,
}

impl KeyBinding {
    pub fn new(key: Key, display: impl Into<String>) -> Self {
        Self {
            key,
            display: display.into(),
        }
    }
}

/// Keys driving list navigation.
///
/// While not searching, `j`/`k` and `h`/`l` also move and page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub next: KeyBinding,
    pub prev: KeyBinding,
    pub page_up: KeyBinding,
    pub page_down: KeyBinding,
    pub search: KeyBinding,
    /// Flips the active item in a multi-select.
    pub toggle: KeyBinding,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            next: KeyBinding::new(Key::Down, "\u{2193}"),
            prev: KeyBinding::new(Key::Up, "\u{2191}"),
            page_up: KeyBinding::new(Key::Left, "\u{2190}"),
            page_down: KeyBinding::new(Key::Right, "\u{2192}"),
            search: KeyBinding::new(Key::Char('/'), "/"),
            toggle: KeyBinding::new(Key::Char(' '), "SPACE"),
        }
    }
}

pub(crate) type SharedSearcher = Rc<dyn Fn(&str, usize) -> bool>;

/// Settings common to every list session.
#[derive(Clone)]
pub(crate) struct ListOptions {
    pub(crate) label: String,
    pub(crate) size: usize,
    pub(crate) hide_help: bool,
    pub(crate) start_in_search_mode: bool,
    pub(crate) searcher: Option<SharedSearcher>,
    pub(crate) keys: KeyBindings,
    pub(crate) templates: Templates,
    /// `None` picks styles from the terminal's color support.
    pub(crate) styles: Option<Styles>,
    pub(crate) pointer: Pointer,
}

impl ListOptions {
    pub(crate) fn new(label: String) -> Self {
        Self {
            label,
            size: 5,
            hide_help: false,
            start_in_search_mode: false,
            searcher: None,
            keys: KeyBindings::default(),
            templates: Templates::new(),
            styles: None,
            pointer: Pointer::Pipe,
        }
    }
}

/// Builder methods writing through to a `ListOptions` field named `options`.
macro_rules! list_builders {
    () => {
        /// Number of items visible at once.
        pub fn size(mut self, size: usize) -> Self {
            self.options.size = size;
            self
        }

        pub fn hide_help(mut self, hide: bool) -> Self {
            self.options.hide_help = hide;
            self
        }

        pub fn start_in_search_mode(mut self, start: bool) -> Self {
            self.options.start_in_search_mode = start;
            self
        }

        /// Enables search. The searcher decides whether the item at an
        /// index matches the typed term.
        pub fn searcher(mut self, searcher: impl Fn(&str, usize) -> bool + 'static) -> Self {
            self.options.searcher = Some(std::rc::Rc::new(searcher));
            self
        }

        pub fn keys(mut self, keys: $crate::session::KeyBindings) -> Self {
            self.options.keys = keys;
            self
        }

        pub fn templates(mut self, templates: $crate::ui::Templates) -> Self {
            self.options.templates = templates;
            self
        }

        pub fn styles(mut self, styles: $crate::ui::Styles) -> Self {
            self.options.styles = Some(styles);
            self
        }

        /// Marker drawn in the search input.
        pub fn pointer(mut self, pointer: $crate::input::Pointer) -> Self {
            self.options.pointer = pointer;
            self
        }
    };
}
pub(crate) use list_builders;

pub(crate) enum Action {
    Accept,
    Handled,
    Ignored,
}

/// Values for the help template.
struct HelpKeys<'a> {
    keys: &'a KeyBindings,
    search: bool,
}

impl Item for HelpKeys<'_> {
    fn label(&self) -> String {
        String::new()
    }

    fn field(&self, name: &str) -> Option<String> {
        let binding = match name {
            "NextKey" => &self.keys.next,
            "PrevKey" => &self.keys.prev,
            "PageUpKey" => &self.keys.page_up,
            "PageDownKey" => &self.keys.page_down,
            "SearchKey" => &self.keys.search,
            "ToggleKey" => &self.keys.toggle,
            "Search" => return Some(self.search.to_string()),
            _ => return None,
        };
        Some(binding.display.clone())
    }
}

/// The `Browsing`/`Searching` states of a list session.
pub(crate) struct Browser<'a, T> {
    pub(crate) window: ListWindow<&'a T>,
    options: &'a ListOptions,
    searching: bool,
    query: Cursor,
    /// Page marker of the first row when there is nothing above it.
    top: char,
}

impl<'a, T: Item> Browser<'a, T> {
    pub(crate) fn new(
        items: &'a [T],
        options: &'a ListOptions,
        cursor: usize,
        scroll: usize,
        top: char,
    ) -> Result<Self> {
        if items.is_empty() {
            return Err(PromptError::Config("no items to choose from".to_string()));
        }

        let mut window = ListWindow::new(items.iter().collect(), options.size)?;
        if let Some(searcher) = &options.searcher {
            let searcher = Rc::clone(searcher);
            window.set_searcher(Some(Box::new(move |term: &str, index: usize| {
                searcher(term, index)
            })));
        }
        window.set_cursor(cursor);
        window.set_start(scroll);

        let searching = options.start_in_search_mode && window.can_search();
        Ok(Self {
            window,
            options,
            searching,
            query: Cursor::new("").with_pointer(options.pointer),
            top,
        })
    }

    pub(crate) fn searching(&self) -> bool {
        self.searching
    }

    pub(crate) fn keys(&self) -> &'a KeyBindings {
        &self.options.keys
    }

    pub(crate) fn label(&self) -> &'a String {
        &self.options.label
    }

    pub(crate) fn handle(&mut self, key: Key) -> Action {
        let keys = &self.options.keys;
        let searching = self.searching;
        let vi = |c: char| !searching && key == Key::Char(c);

        if key == Key::Enter {
            return Action::Accept;
        } else if key == keys.next.key || vi('j') {
            self.window.next();
        } else if key == keys.prev.key || vi('k') {
            self.window.prev();
        } else if key == keys.search.key {
            if !self.window.can_search() {
                return Action::Ignored;
            }
            if self.searching {
                self.searching = false;
                self.query.replace("");
                self.window.cancel_search();
            } else {
                self.searching = true;
            }
        } else if key == Key::Backspace {
            if !self.searching {
                return Action::Ignored;
            }
            self.query.backspace();
            if self.query.is_empty() {
                self.window.cancel_search();
            } else {
                self.window.search(&self.query.get());
            }
        } else if key == keys.page_up.key || vi('h') {
            self.window.page_up();
        } else if key == keys.page_down.key || vi('l') {
            self.window.page_down();
        } else if self.searching && self.query.edit(key) {
            self.window.search(&self.query.get());
        } else {
            return Action::Ignored;
        }
        Action::Handled
    }

    /// Builds the frame: search input or help, label, visible rows, then
    /// details of the active item or a "No results" notice.
    ///
    /// `body` renders one row given the item, its original index and
    /// whether it is active.
    pub(crate) fn frame(
        &self,
        renderer: &Renderer,
        mut body: impl FnMut(&T, usize, bool) -> String,
    ) -> Vec<String> {
        let mut lines = Vec::new();

        if self.searching {
            lines.push(format!(
                "{}{}",
                renderer.styles().search_prompt,
                self.query.render(None)
            ));
        } else if !self.options.hide_help {
            let help = HelpKeys {
                keys: &self.options.keys,
                search: self.window.can_search(),
            };
            lines.push(renderer.render(TemplateKind::Help, &help));
        }

        lines.push(renderer.render(TemplateKind::Label, &self.options.label));

        let visible = self.window.visible_indices();
        let active = self.window.active_offset();
        let last = visible.len().saturating_sub(1);

        for (row, &index) in visible.iter().enumerate() {
            let page = if row == 0 {
                if self.window.can_page_up() {
                    '\u{2191}'
                } else {
                    self.top
                }
            } else if row == last && self.window.can_page_down() {
                '\u{2193}'
            } else {
                ' '
            };
            let item = self.window.items()[index];
            lines.push(format!("{page} {}", body(item, index, Some(row) == active)));
        }

        match self.window.index() {
            Some(index) => {
                let item = self.window.items()[index];
                lines.extend(renderer.render_optional(TemplateKind::Details, item));
            }
            None => {
                lines.push(String::new());
                lines.push("No results".to_string());
            }
        }

        lines
    }
}

const KINDS: &[TemplateKind] = &[
    TemplateKind::Label,
    TemplateKind::Active,
    TemplateKind::Inactive,
    TemplateKind::Selected,
    TemplateKind::Details,
    TemplateKind::Help,
];

fn default_template(kind: TemplateKind, styles: &Styles) -> Option<String> {
    let source = match kind {
        TemplateKind::Label => format!("{} {{{{ . }}}}: ", styles.icon_initial),
        TemplateKind::Active => format!("{} {{{{ . | underline }}}}", styles.icon_select),
        TemplateKind::Inactive => "  {{ . }}".to_string(),
        TemplateKind::Selected => format!("{} {{{{ . | faint }}}}", styles.icon_good),
        TemplateKind::Help => concat!(
            r#"{{ "Use the arrow keys to navigate:" | faint }} {{ .NextKey | faint }} "#,
            r#"{{ .PrevKey | faint }} {{ .PageDownKey | faint }} {{ .PageUpKey | faint }}"#,
            r#"{{ if .Search }} {{ "and" | faint }} {{ .SearchKey | faint }} "#,
            r#"{{ "toggles search" | faint }}{{ end }}"#,
        )
        .to_string(),
        _ => return None,
    };
    Some(source)
}

/// Runs a single-choice list over `items`. Returns the chosen original
/// index and the final window start.
fn choose<T: Item>(
    options: &ListOptions,
    items: &[T],
    cursor: usize,
    scroll: usize,
    top: char,
    summary: Summary,
    term: &mut impl KeySource,
) -> Result<(usize, usize)> {
    let renderer = Renderer::compile(
        KINDS,
        &options.templates,
        default_template,
        resolve_styles(options.styles.as_ref(), &*term),
    )?;
    let mut session = Choosing {
        browser: Browser::new(items, options, cursor, scroll, top)?,
        renderer,
        summary,
    };

    let index = drive(&mut session, term)?;
    Ok((index, session.browser.window.start()))
}

/// What stays on screen once an item is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Summary {
    /// The `Selected` line for the chosen item.
    Show,
    /// Nothing.
    Hide,
    /// The `Selected` line, unless the chosen index is this one.
    HideAt(usize),
}

impl Summary {
    fn shows(self, index: usize) -> bool {
        match self {
            Summary::Show => true,
            Summary::Hide => false,
            Summary::HideAt(hidden) => hidden != index,
        }
    }
}

struct Choosing<'a, T> {
    browser: Browser<'a, T>,
    renderer: Renderer,
    summary: Summary,
}

impl<T: Item> Interaction for Choosing<'_, T> {
    type Output = usize;

    fn view(&self) -> Vec<String> {
        self.browser.frame(&self.renderer, |item, _, active| {
            let kind = if active {
                TemplateKind::Active
            } else {
                TemplateKind::Inactive
            };
            self.renderer.render(kind, item)
        })
    }

    fn step(&mut self, key: Key) -> Step<usize> {
        match self.browser.handle(key) {
            Action::Accept => match self.browser.window.index() {
                Some(index) => Step::Done(Ok(index)),
                None => Step::Continue,
            },
            Action::Handled | Action::Ignored => Step::Continue,
        }
    }

    fn finish(&self, outcome: &Result<usize>) -> Option<Vec<String>> {
        match outcome {
            Ok(index) if self.summary.shows(*index) => {
                let item = self.browser.window.items()[*index];
                Some(vec![self.renderer.render(TemplateKind::Selected, item)])
            }
            _ => Some(Vec::new()),
        }
    }
}

/// A single-choice list.
///
/// ```no_run
/// use termprompt::Select;
///
/// let mut select = Select::new("Day", vec!["Mon", "Tue", "Wed"]).size(2);
/// let (index, day) = select.run()?;
/// # Ok::<(), termprompt::PromptError>(())
/// ```
pub struct Select<T> {
    options: ListOptions,
    items: Vec<T>,
    cursor_pos: usize,
    scroll: usize,
    hide_selected: bool,
    scroll_position: usize,
}

impl<T: Item> Select<T> {
    pub fn new(label: impl Into<String>, items: Vec<T>) -> Self {
        Self {
            options: ListOptions::new(label.into()),
            items,
            cursor_pos: 0,
            scroll: 0,
            hide_selected: false,
            scroll_position: 0,
        }
    }

    list_builders!();

    /// Item active when the list opens.
    pub fn cursor_pos(mut self, position: usize) -> Self {
        self.cursor_pos = position;
        self
    }

    /// Window start when the list opens.
    pub fn scroll(mut self, start: usize) -> Self {
        self.scroll = start;
        self
    }

    /// Clears the list without printing the chosen item.
    pub fn hide_selected(mut self, hide: bool) -> Self {
        self.hide_selected = hide;
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Window start at the end of the last run, for reopening the list
    /// where it was left.
    pub fn scroll_position(&self) -> usize {
        self.scroll_position
    }
}

impl<T: Item + Clone> Select<T> {
    pub fn run(&mut self) -> Result<(usize, T)> {
        self.run_cursor_at(self.cursor_pos, self.scroll)
    }

    pub fn run_with(&mut self, term: &mut impl KeySource) -> Result<(usize, T)> {
        self.run_cursor_at_with(self.cursor_pos, self.scroll, term)
    }

    pub fn run_cursor_at(&mut self, cursor: usize, scroll: usize) -> Result<(usize, T)> {
        self.run_cursor_at_with(cursor, scroll, &mut CrosstermTerminal::new())
    }

    pub fn run_cursor_at_with(
        &mut self,
        cursor: usize,
        scroll: usize,
        term: &mut impl KeySource,
    ) -> Result<(usize, T)> {
        let (index, start) = choose(
            &self.options,
            &self.items,
            cursor,
            scroll,
            ' ',
            if self.hide_selected {
                Summary::Hide
            } else {
                Summary::Show
            },
            term,
        )?;
        self.scroll_position = start;
        Ok((index, self.items[index].clone()))
    }
}

/// Result of a [`SelectWithAdd`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    /// An item from the list and its index.
    Existing(usize, T),
    /// A value typed in after choosing the add entry.
    Added(String),
}

enum Entry<'a, T> {
    Add(&'a str),
    Existing(&'a T),
}

impl<T: Item> Item for Entry<'_, T> {
    fn label(&self) -> String {
        match self {
            Entry::Add(label) => (*label).to_string(),
            Entry::Existing(item) => item.label(),
        }
    }

    fn field(&self, name: &str) -> Option<String> {
        match self {
            Entry::Add(_) => None,
            Entry::Existing(item) => item.field(name),
        }
    }
}

/// A list whose first entry offers to enter a new value instead.
///
/// With no items the value prompt opens straight away.
pub struct SelectWithAdd<T> {
    options: ListOptions,
    items: Vec<T>,
    add_label: String,
    validate: Option<Rc<dyn Fn(&str) -> anyhow::Result<()>>>,
}

impl<T: Item> SelectWithAdd<T> {
    pub fn new(label: impl Into<String>, items: Vec<T>, add_label: impl Into<String>) -> Self {
        Self {
            options: ListOptions::new(label.into()),
            items,
            add_label: add_label.into(),
            validate: None,
        }
    }

    pub fn size(mut self, size: usize) -> Self {
        self.options.size = size;
        self
    }

    pub fn hide_help(mut self, hide: bool) -> Self {
        self.options.hide_help = hide;
        self
    }

    pub fn keys(mut self, keys: KeyBindings) -> Self {
        self.options.keys = keys;
        self
    }

    pub fn templates(mut self, templates: Templates) -> Self {
        self.options.templates = templates;
        self
    }

    pub fn styles(mut self, styles: Styles) -> Self {
        self.options.styles = Some(styles);
        self
    }

    /// Validates a newly entered value.
    pub fn validate(mut self, validator: impl Fn(&str) -> anyhow::Result<()> + 'static) -> Self {
        self.validate = Some(Rc::new(validator));
        self
    }
}

impl<T: Item + Clone> SelectWithAdd<T> {
    pub fn run(&self) -> Result<Selection<T>> {
        self.run_with(&mut CrosstermTerminal::new())
    }

    pub fn run_with(&self, term: &mut impl KeySource) -> Result<Selection<T>> {
        if !self.items.is_empty() {
            let entries: Vec<Entry<'_, T>> = std::iter::once(Entry::Add(&self.add_label))
                .chain(self.items.iter().map(Entry::Existing))
                .collect();

            // The value prompt takes the list's place when the add entry is chosen.
            let summary = Summary::HideAt(0);
            let (index, _) = choose(&self.options, &entries, 1, 0, '+', summary, term)?;
            if index > 0 {
                return Ok(Selection::Existing(index - 1, self.items[index - 1].clone()));
            }
        }

        let styles = resolve_styles(self.options.styles.as_ref(), &*term);
        let mut prompt = Prompt::new(self.add_label.clone()).styles(styles);
        if let Some(validate) = &self.validate {
            let validate = Rc::clone(validate);
            prompt = prompt.validate(move |input| validate(input));
        }
        prompt.run_with(term).map(Selection::Added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ScriptedTerminal;

    const DAYS: [&str; 3] = ["Mon", "Tue", "Wed"];

    fn frame(options: &ListOptions, items: &[&'static str], keys: &[Key]) -> Vec<String> {
        let renderer = Renderer::compile(KINDS, &options.templates, default_template, Styles::plain())
            .expect("compile");
        let mut session = Choosing {
            browser: Browser::new(items, options, 0, 0, ' ').expect("browser"),
            renderer,
            summary: Summary::Show,
        };
        for key in keys {
            session.step(*key);
        }
        session.view()
    }

    #[test]
    fn test_initial_frame() {
        let mut options = ListOptions::new("Day".to_string());
        options.size = 2;
        let view = frame(&options, &DAYS, &[]);
        assert_eq!(
            view,
            vec![
                "Use the arrow keys to navigate: \u{2193} \u{2191} \u{2192} \u{2190}",
                "? Day: ",
                "  \u{25b8} Mon",
                "\u{2193}   Tue",
            ]
        );
    }

    #[test]
    fn test_page_markers_follow_window() {
        let mut options = ListOptions::new("Day".to_string());
        options.size = 2;
        options.hide_help = true;
        let view = frame(&options, &DAYS, &[Key::Down, Key::Down]);
        assert_eq!(view, vec!["? Day: ", "\u{2191}   Tue", "  \u{25b8} Wed"]);
    }

    #[test]
    fn test_search_mode_frame() {
        let mut options = ListOptions::new("Day".to_string());
        options.searcher = Some(Rc::new(|term: &str, index: usize| {
            DAYS[index].to_lowercase().contains(term)
        }));
        let view = frame(&options, &DAYS, &[Key::Char('/'), Key::Char('w')]);
        assert_eq!(view, vec!["Search: w|", "? Day: ", "  \u{25b8} Wed"]);

        let view = frame(&options, &DAYS, &[Key::Char('/'), Key::Char('x')]);
        assert_eq!(view, vec!["Search: x|", "? Day: ", "", "No results"]);
    }

    #[test]
    fn test_vi_keys_only_outside_search() {
        let mut options = ListOptions::new("Day".to_string());
        options.hide_help = true;
        options.searcher = Some(Rc::new(|term: &str, index: usize| DAYS[index].contains(term)));

        let view = frame(&options, &DAYS, &[Key::Char('j')]);
        assert_eq!(view[2], "  \u{25b8} Tue");

        let view = frame(&options, &DAYS, &[Key::Char('/'), Key::Char('j')]);
        assert_eq!(view, vec!["Search: j|", "? Day: ", "", "No results"]);
    }

    #[test]
    fn test_details_follow_active_item() {
        let mut options = ListOptions::new("Day".to_string());
        options.hide_help = true;
        options.templates = Templates::new().details("--------\nday: {{ . }}");
        let view = frame(&options, &DAYS, &[Key::Down]);
        assert_eq!(view.last().map(String::as_str), Some("--------\nday: Tue"));
    }

    #[test]
    fn test_select_runs_to_choice() {
        let mut select = Select::new("Day", DAYS.to_vec()).size(2);
        let mut term = ScriptedTerminal::new([Key::Down, Key::Down, Key::Enter]);
        assert_eq!(select.run_with(&mut term).expect("accepted"), (2, "Wed"));
        assert_eq!(select.scroll_position(), 1);
        assert!(term.output_lossy().contains("\u{2714} Wed\n"));
    }

    #[test]
    fn test_select_run_cursor_at() {
        let mut select = Select::new("Day", DAYS.to_vec()).size(2);
        let mut term = ScriptedTerminal::new([Key::Enter]);
        let (index, _) = select
            .run_cursor_at_with(2, 1, &mut term)
            .expect("accepted");
        assert_eq!(index, 2);
    }

    #[test]
    fn test_enter_without_results_keeps_browsing() {
        let mut select = Select::new("Day", DAYS.to_vec())
            .searcher(|term, index| DAYS[index].contains(term));
        let mut term = ScriptedTerminal::new([
            Key::Char('/'),
            Key::Char('x'),
            Key::Enter,
            Key::Backspace,
            Key::Enter,
        ]);
        assert_eq!(select.run_with(&mut term).expect("accepted"), (0, "Mon"));
    }

    #[test]
    fn test_empty_list_is_config_error() {
        let mut select = Select::<&str>::new("Day", Vec::new());
        let mut term = ScriptedTerminal::new([Key::Enter]);
        assert!(matches!(
            select.run_with(&mut term),
            Err(PromptError::Config(_))
        ));
        assert!(term.output.is_empty());
    }

    #[test]
    fn test_cancel_clears_list() {
        let mut select = Select::new("Day", DAYS.to_vec()).hide_help(true);
        let mut term = ScriptedTerminal::new([Key::Down]);
        assert!(matches!(
            select.run_with(&mut term),
            Err(PromptError::EndOfInput)
        ));
        let out = term.output_lossy();
        let erase = "\x1b[1A\x1b[2K\r".repeat(4);
        assert!(out.ends_with(&format!("{erase}\r\x1b[?25h")), "{out:?}");
    }

    #[test]
    fn test_select_with_add_existing() {
        let select = SelectWithAdd::new("Fruit", vec!["apple", "pear"], "Other");
        let mut term = ScriptedTerminal::new([Key::Down, Key::Enter]);
        assert_eq!(
            select.run_with(&mut term).expect("accepted"),
            Selection::Existing(1, "pear")
        );
    }

    #[test]
    fn test_select_with_add_new_value() {
        let select = SelectWithAdd::new("Fruit", vec!["apple"], "Other").validate(|s| {
            anyhow::ensure!(!s.is_empty(), "empty");
            Ok(())
        });
        let mut keys = vec![Key::Up, Key::Enter, Key::Enter];
        keys.extend("fig".chars().map(Key::Char));
        keys.push(Key::Enter);
        let mut term = ScriptedTerminal::new(keys);

        assert_eq!(
            select.run_with(&mut term).expect("accepted"),
            Selection::Added("fig".to_string())
        );
    }

    #[test]
    fn test_select_with_add_clears_list_for_new_value() {
        let select = SelectWithAdd::new("Fruit", vec!["apple"], "Other");
        let mut keys = vec![Key::Up, Key::Enter];
        keys.extend("fig".chars().map(Key::Char));
        keys.push(Key::Enter);
        let mut term = ScriptedTerminal::new(keys);
        select.run_with(&mut term).expect("accepted");

        let out = term.output_lossy();
        assert!(!out.contains("\u{2714} Other\n"), "{out:?}");
        assert!(out.contains("\u{2714} Other: fig"), "{out:?}");
    }

    #[test]
    fn test_summary_hides_only_its_index() {
        assert!(Summary::Show.shows(0));
        assert!(!Summary::Hide.shows(2));
        assert!(!Summary::HideAt(0).shows(0));
        assert!(Summary::HideAt(0).shows(1));
    }

    #[test]
    fn test_select_with_add_without_items_prompts() {
        let select = SelectWithAdd::<&str>::new("Fruit", Vec::new(), "New fruit");
        let mut term = ScriptedTerminal::typing("kiwi");
        assert_eq!(
            select.run_with(&mut term).expect("accepted"),
            Selection::Added("kiwi".to_string())
        );
    }
}
