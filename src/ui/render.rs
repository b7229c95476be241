//! # Renderer
//!
//! Maps a value and a named template slot to display text.
//!
//! Each session declares which slots it uses and supplies a default template
//! for them. Callers may override any slot through [`Templates`]. All
//! templates are parsed up front by [`Renderer::compile`], so a malformed
//! template is reported before the session touches the terminal.

use crate::error::{PromptError, Result};
use crate::ui::style::Styles;
use crate::ui::template::{Item, Template};
use std::collections::HashMap;
use std::fmt;

/// The named template slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// Initial prompt line, before any input.
    Prompt,
    /// Prompt line of a yes/no question.
    Confirm,
    Label,
    Active,
    Inactive,
    Selected,
    Unselected,
    /// Multi-line description of the active list item.
    Details,
    Help,
    Valid,
    Invalid,
    Success,
    ValidationError,
}

impl TemplateKind {
    pub fn name(self) -> &'static str {
        match self {
            TemplateKind::Prompt => "prompt",
            TemplateKind::Confirm => "confirm",
            TemplateKind::Label => "label",
            TemplateKind::Active => "active",
            TemplateKind::Inactive => "inactive",
            TemplateKind::Selected => "selected",
            TemplateKind::Unselected => "unselected",
            TemplateKind::Details => "details",
            TemplateKind::Help => "help",
            TemplateKind::Valid => "valid",
            TemplateKind::Invalid => "invalid",
            TemplateKind::Success => "success",
            TemplateKind::ValidationError => "validation-error",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Caller-supplied template overrides, keyed by slot.
#[derive(Debug, Clone, Default)]
pub struct Templates {
    sources: HashMap<TemplateKind, String>,
}

impl Templates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, kind: TemplateKind, source: impl Into<String>) -> Self {
        self.sources.insert(kind, source.into());
        self
    }

    pub fn get(&self, kind: TemplateKind) -> Option<&str> {
        self.sources.get(&kind).map(String::as_str)
    }

    pub fn label(self, source: impl Into<String>) -> Self {
        self.set(TemplateKind::Label, source)
    }

    pub fn active(self, source: impl Into<String>) -> Self {
        self.set(TemplateKind::Active, source)
    }

    pub fn inactive(self, source: impl Into<String>) -> Self {
        self.set(TemplateKind::Inactive, source)
    }

    pub fn selected(self, source: impl Into<String>) -> Self {
        self.set(TemplateKind::Selected, source)
    }

    pub fn details(self, source: impl Into<String>) -> Self {
        self.set(TemplateKind::Details, source)
    }

    pub fn help(self, source: impl Into<String>) -> Self {
        self.set(TemplateKind::Help, source)
    }
}

/// Compiled templates for one session.
#[derive(Debug, Clone)]
pub struct Renderer {
    compiled: HashMap<TemplateKind, Template>,
    styles: Styles,
}

impl Renderer {
    /// Compiles the templates for `kinds`, preferring caller overrides and
    /// falling back to `defaults`. Slots with neither stay empty and render
    /// the value's plain label.
    pub fn compile(
        kinds: &[TemplateKind],
        custom: &Templates,
        defaults: impl Fn(TemplateKind, &Styles) -> Option<String>,
        styles: Styles,
    ) -> Result<Self> {
        let mut compiled = HashMap::new();

        for kind in kinds {
            let source = match custom.get(*kind) {
                Some(source) => source.to_string(),
                None => match defaults(*kind, &styles) {
                    Some(source) => source,
                    None => continue,
                },
            };
            let template = Template::parse(&source)
                .map_err(|e| PromptError::Config(format!("{kind} template: {e}")))?;
            compiled.insert(*kind, template);
        }

        Ok(Self { compiled, styles })
    }

    pub fn has(&self, kind: TemplateKind) -> bool {
        self.compiled.contains_key(&kind)
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    /// Renders `value` with the template in slot `kind`. Falls back to the
    /// value's label when the slot is empty or the template fails.
    pub fn render(&self, kind: TemplateKind, value: &dyn Item) -> String {
        let Some(template) = self.compiled.get(&kind) else {
            return value.label();
        };

        template.execute(value, &self.styles).unwrap_or_else(|err| {
            tracing::debug!(template = %kind, %err, "template failed, using plain label");
            value.label()
        })
    }

    /// Like [`Renderer::render`] but returns `None` for an empty slot.
    pub fn render_optional(&self, kind: TemplateKind, value: &dyn Item) -> Option<String> {
        self.has(kind).then(|| self.render(kind, value))
    }
}
