//! # Prompt
//!
//! Single-line text input with live validation, plus the yes/no [`Confirm`]
//! variant built on the same editing session.

use super::{drive, resolve_styles, Interaction, Step};
use crate::error::{PromptError, Result};
use crate::input::{Cursor, CrosstermTerminal, Key, KeySource, Pointer, BLANK_MASK};
use crate::ui::{Renderer, Styles, TemplateKind, Templates};
use std::rc::Rc;

/// Checks free-text input. The error's message is shown under the input.
pub type Validator = Box<dyn Fn(&str) -> anyhow::Result<()>>;

const KINDS: &[TemplateKind] = &[
    TemplateKind::Prompt,
    TemplateKind::Confirm,
    TemplateKind::Valid,
    TemplateKind::Invalid,
    TemplateKind::Success,
    TemplateKind::ValidationError,
];

fn default_template(kind: TemplateKind, styles: &Styles, default_yes: bool) -> Option<String> {
    let (icon, tail) = match kind {
        TemplateKind::Prompt => (&styles.icon_initial, r#" {{ . | bold }}{{ ":" | bold }} "#),
        TemplateKind::Valid => (&styles.icon_good, r#" {{ . | bold }}{{ ":" | bold }} "#),
        TemplateKind::Invalid => (&styles.icon_bad, r#" {{ . | bold }}{{ ":" | bold }} "#),
        TemplateKind::Confirm if default_yes => {
            (&styles.icon_initial, r#" {{ . | bold }}? {{ "[Y/n]" | faint }} "#)
        }
        TemplateKind::Confirm => (&styles.icon_initial, r#" {{ . | bold }}? {{ "[y/N]" | faint }} "#),
        TemplateKind::Success => return Some("{{ . | faint }}".to_string()),
        TemplateKind::ValidationError => return Some(r#"{{ ">>" | red }} {{ . | red }}"#.to_string()),
        _ => return None,
    };
    Some([icon.as_str(), tail].concat())
}

/// A single-line text prompt.
///
/// ```no_run
/// use termprompt::Prompt;
///
/// let age = Prompt::new("Age")
///     .validate(|s| s.parse::<u8>().map(|_| ()).map_err(Into::into))
///     .run()?;
/// # Ok::<(), termprompt::PromptError>(())
/// ```
pub struct Prompt {
    label: String,
    default: String,
    allow_edit: bool,
    mask: Option<char>,
    hide_entered: bool,
    pointer: Pointer,
    validate: Option<Validator>,
    templates: Templates,
    styles: Option<Styles>,
}

impl Prompt {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            default: String::new(),
            allow_edit: false,
            mask: None,
            hide_entered: false,
            pointer: Pointer::default(),
            validate: None,
            templates: Templates::new(),
            styles: None,
        }
    }

    /// Initial input. Unless [`Prompt::allow_edit`] is set, the first
    /// keystroke replaces it.
    pub fn default(mut self, value: impl Into<String>) -> Self {
        self.default = value.into();
        self
    }

    pub fn allow_edit(mut self, allow: bool) -> Self {
        self.allow_edit = allow;
        self
    }

    /// Draws every character as `mask`. [`BLANK_MASK`] hides the input
    /// entirely.
    pub fn mask(mut self, mask: char) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Clears the prompt from the screen once accepted.
    pub fn hide_entered(mut self, hide: bool) -> Self {
        self.hide_entered = hide;
        self
    }

    pub fn pointer(mut self, pointer: Pointer) -> Self {
        self.pointer = pointer;
        self
    }

    pub fn validate(mut self, validator: impl Fn(&str) -> anyhow::Result<()> + 'static) -> Self {
        self.validate = Some(Box::new(validator));
        self
    }

    pub fn templates(mut self, templates: Templates) -> Self {
        self.templates = templates;
        self
    }

    /// Overrides the styles picked from the terminal's color support.
    pub fn styles(mut self, styles: Styles) -> Self {
        self.styles = Some(styles);
        self
    }

    /// Runs the prompt on the controlling terminal.
    pub fn run(&self) -> Result<String> {
        self.run_with(&mut CrosstermTerminal::new())
    }

    pub fn run_with(&self, term: &mut impl KeySource) -> Result<String> {
        let styles = resolve_styles(self.styles.as_ref(), &*term);
        let mut session = Editing::new(self, None, styles)?;
        drive(&mut session, term)
    }
}

/// A yes/no question. Accepts only an answer of `y` (any case); anything
/// else ends in [`PromptError::Aborted`].
///
/// A validator, when set, runs first: a rejected answer is shown in place and
/// the question stays open.
pub struct Confirm {
    label: String,
    default_yes: bool,
    validate: Option<Rc<dyn Fn(&str) -> anyhow::Result<()>>>,
    templates: Templates,
    styles: Option<Styles>,
}

impl Confirm {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            default_yes: false,
            validate: None,
            templates: Templates::new(),
            styles: None,
        }
    }

    /// Makes an empty answer count as yes.
    pub fn default_yes(mut self, yes: bool) -> Self {
        self.default_yes = yes;
        self
    }

    pub fn validate(mut self, validator: impl Fn(&str) -> anyhow::Result<()> + 'static) -> Self {
        self.validate = Some(Rc::new(validator));
        self
    }

    pub fn templates(mut self, templates: Templates) -> Self {
        self.templates = templates;
        self
    }

    /// Overrides the styles picked from the terminal's color support.
    pub fn styles(mut self, styles: Styles) -> Self {
        self.styles = Some(styles);
        self
    }

    pub fn run(&self) -> Result<()> {
        self.run_with(&mut CrosstermTerminal::new())
    }

    pub fn run_with(&self, term: &mut impl KeySource) -> Result<()> {
        let mut prompt = Prompt::new(self.label.clone()).templates(self.templates.clone());
        if let Some(validate) = &self.validate {
            let validate = Rc::clone(validate);
            prompt = prompt.validate(move |input| validate(input));
        }
        let styles = resolve_styles(self.styles.as_ref(), &*term);
        let mut session = Editing::new(&prompt, Some(self.default_yes), styles)?;
        drive(&mut session, term).map(|_| ())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Validity {
    /// No key pressed yet.
    Fresh,
    Valid,
    Invalid,
}

/// The `Editing` state shared by prompts and confirms.
struct Editing<'a> {
    prompt: &'a Prompt,
    renderer: Renderer,
    input: Cursor,
    validity: Validity,
    /// Message from a rejected Enter, shown until the next key.
    error: Option<String>,
    /// `Some(default_yes)` for a confirm question.
    confirm: Option<bool>,
}

impl<'a> Editing<'a> {
    fn new(prompt: &'a Prompt, confirm: Option<bool>, styles: Styles) -> Result<Self> {
        let default_yes = confirm.unwrap_or(false);
        let renderer = Renderer::compile(
            KINDS,
            &prompt.templates,
            |kind, styles| default_template(kind, styles, default_yes),
            styles,
        )?;

        let input = Cursor::new(&prompt.default)
            .with_pointer(prompt.pointer)
            .erase_on_first_key(!prompt.allow_edit);

        Ok(Self {
            prompt,
            renderer,
            input,
            validity: Validity::Fresh,
            error: None,
            confirm,
        })
    }

    fn check(&self, text: &str) -> anyhow::Result<()> {
        match &self.prompt.validate {
            Some(validate) => validate(text),
            None => Ok(()),
        }
    }

    fn submit(&mut self) -> Step<String> {
        let text = self.input.get();

        if let Err(err) = self.check(&text) {
            tracing::debug!(%err, "input rejected");
            self.error = Some(err.to_string());
            self.validity = Validity::Invalid;
            return Step::Continue;
        }

        match self.confirm {
            Some(default_yes)
                if !(text.eq_ignore_ascii_case("y") || (text.is_empty() && default_yes)) =>
            {
                Step::Done(Err(PromptError::Aborted))
            }
            _ => Step::Done(Ok(text)),
        }
    }

    /// The entered text as it may be shown after acceptance.
    fn echo(&self) -> String {
        match self.prompt.mask {
            Some(BLANK_MASK) => String::new(),
            Some(mask) => std::iter::repeat(mask).take(self.input.len()).collect(),
            None => self.input.get(),
        }
    }

    fn label_kind(&self) -> TemplateKind {
        match (self.confirm, self.validity) {
            (Some(_), _) => TemplateKind::Confirm,
            (None, Validity::Fresh) => TemplateKind::Prompt,
            (None, Validity::Valid) => TemplateKind::Valid,
            (None, Validity::Invalid) => TemplateKind::Invalid,
        }
    }
}

impl Interaction for Editing<'_> {
    type Output = String;

    fn view(&self) -> Vec<String> {
        let label = self.renderer.render(self.label_kind(), &self.prompt.label);
        let mut lines = vec![label + &self.input.render(self.prompt.mask)];

        if let Some(err) = &self.error {
            lines.push(self.renderer.render(TemplateKind::ValidationError, err));
        }
        lines
    }

    fn step(&mut self, key: Key) -> Step<String> {
        if key == Key::Enter {
            return self.submit();
        }

        self.error = None;
        if self.input.edit(key) {
            self.validity = match self.check(&self.input.get()) {
                Ok(()) => Validity::Valid,
                Err(_) => Validity::Invalid,
            };
        }
        Step::Continue
    }

    fn finish(&self, outcome: &Result<String>) -> Option<Vec<String>> {
        let kind = match outcome {
            Ok(_) if self.prompt.hide_entered => return Some(Vec::new()),
            Ok(_) => TemplateKind::Valid,
            Err(PromptError::Aborted) => TemplateKind::Invalid,
            Err(_) => return None,
        };

        let label = self.renderer.render(kind, &self.prompt.label);
        let echo = self.renderer.render(TemplateKind::Success, &self.echo());
        Some(vec![label + &echo])
    }
}
