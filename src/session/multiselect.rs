//! # MultiSelect
//!
//! Choosing any number of items from a list. The toggle key (space by
//! default) flips the active item; Enter accepts the marked set.

use super::select::{list_builders, Action, Browser, ListOptions};
use super::{drive, resolve_styles, Interaction, Step};
use crate::error::Result;
use crate::input::{CrosstermTerminal, Key, KeySource};
use crate::ui::{Item, Renderer, Styles, TemplateKind};
use std::collections::BTreeSet;

const KINDS: &[TemplateKind] = &[
    TemplateKind::Label,
    TemplateKind::Active,
    TemplateKind::Inactive,
    TemplateKind::Selected,
    TemplateKind::Unselected,
    TemplateKind::Details,
    TemplateKind::Help,
];

fn default_template(kind: TemplateKind, styles: &Styles) -> Option<String> {
    let source = match kind {
        TemplateKind::Label => format!("{} {{{{ . }}}}: ", styles.icon_initial),
        TemplateKind::Active => format!("{}{{{{ . }}}}", styles.icon_select),
        TemplateKind::Inactive => " {{ . }}".to_string(),
        TemplateKind::Selected => format!(" {} {{{{ . }}}}", styles.icon_good),
        TemplateKind::Unselected => format!(" {} {{{{ . }}}}", styles.icon_bad),
        TemplateKind::Help => concat!(
            r#"{{ "Navigate with arrow keys:" | faint }} {{ .NextKey | faint }} "#,
            r#"{{ .PrevKey | faint }} {{ .PageDownKey | faint }} {{ .PageUpKey | faint }}"#,
            r#"{{ " (" | faint }}{{ .ToggleKey | faint }} {{ "to select)" | faint }}"#,
        )
        .to_string(),
        _ => return None,
    };
    Some(source)
}

/// A list where several items can be chosen.
///
/// Accepting returns the original indices of the marked items in ascending
/// order.
pub struct MultiSelect<T> {
    options: ListOptions,
    items: Vec<T>,
    selected: BTreeSet<usize>,
    cursor_pos: usize,
    scroll_position: usize,
}

impl<T: Item> MultiSelect<T> {
    pub fn new(label: impl Into<String>, items: Vec<T>) -> Self {
        Self {
            options: ListOptions::new(label.into()),
            items,
            selected: BTreeSet::new(),
            cursor_pos: 0,
            scroll_position: 0,
        }
    }

    list_builders!();

    /// Items marked when the list opens. Out-of-range indices are ignored.
    pub fn selected(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.selected = indices.into_iter().collect();
        self
    }

    pub fn cursor_pos(mut self, position: usize) -> Self {
        self.cursor_pos = position;
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn scroll_position(&self) -> usize {
        self.scroll_position
    }

    pub fn run(&mut self) -> Result<Vec<usize>> {
        self.run_cursor_at(self.cursor_pos, 0)
    }

    pub fn run_with(&mut self, term: &mut impl KeySource) -> Result<Vec<usize>> {
        self.run_cursor_at_with(self.cursor_pos, 0, term)
    }

    pub fn run_cursor_at(&mut self, cursor: usize, scroll: usize) -> Result<Vec<usize>> {
        self.run_cursor_at_with(cursor, scroll, &mut CrosstermTerminal::new())
    }

    pub fn run_cursor_at_with(
        &mut self,
        cursor: usize,
        scroll: usize,
        term: &mut impl KeySource,
    ) -> Result<Vec<usize>> {
        let renderer = Renderer::compile(
            KINDS,
            &self.options.templates,
            default_template,
            resolve_styles(self.options.styles.as_ref(), &*term),
        )?;
        let count = self.items.len();
        let mut session = Marking {
            browser: Browser::new(&self.items, &self.options, cursor, scroll, ' ')?,
            renderer,
            chosen: self.selected.iter().copied().filter(|i| *i < count).collect(),
        };

        let chosen = drive(&mut session, term)?;
        let start = session.browser.window.start();
        self.selected = chosen.iter().copied().collect();
        self.scroll_position = start;
        Ok(chosen)
    }
}

struct Marking<'a, T> {
    browser: Browser<'a, T>,
    renderer: Renderer,
    chosen: BTreeSet<usize>,
}

impl<T: Item> Marking<'_, T> {
    fn toggle(&mut self) {
        let Some(index) = self.browser.window.index() else {
            return;
        };
        if !self.chosen.remove(&index) {
            self.chosen.insert(index);
        }
    }
}

impl<T: Item> Interaction for Marking<'_, T> {
    type Output = Vec<usize>;

    fn view(&self) -> Vec<String> {
        self.browser.frame(&self.renderer, |item, index, active| {
            let mark = if self.chosen.contains(&index) {
                TemplateKind::Selected
            } else {
                TemplateKind::Unselected
            };
            let marked = self.renderer.render(mark, item);

            let row = if active {
                TemplateKind::Active
            } else {
                TemplateKind::Inactive
            };
            self.renderer.render(row, &marked)
        })
    }

    fn step(&mut self, key: Key) -> Step<Vec<usize>> {
        if key == self.browser.keys().toggle.key && !self.browser.searching() {
            self.toggle();
            return Step::Continue;
        }

        match self.browser.handle(key) {
            Action::Accept if self.browser.window.index().is_some() => {
                Step::Done(Ok(self.chosen.iter().copied().collect()))
            }
            _ => Step::Continue,
        }
    }

    fn finish(&self, outcome: &Result<Vec<usize>>) -> Option<Vec<String>> {
        let Ok(chosen) = outcome else {
            return Some(Vec::new());
        };

        let items = self.browser.window.items();
        let names: Vec<String> = chosen.iter().map(|i| items[*i].label()).collect();
        let label = self.renderer.render(TemplateKind::Label, self.browser.label());
        Some(vec![label + &names.join(", ")])
    }
}
