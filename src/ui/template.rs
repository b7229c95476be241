//! # Templates
//!
//! A small template language for turning items into display strings.
//!
//! ```text
//! {{ . }}                   the item's label
//! {{ .Name }}               a named field of the item
//! {{ "text" }}              a string literal
//! {{ .Name | cyan | bold }} piped through style functions
//! {{ if .Search }}…{{ else }}…{{ end }}
//! ```
//!
//! Templates never inspect items directly. Items expose themselves through
//! the [`Item`] capability: a label, plus optional named fields.

use crate::ui::style::{Style, Styles};
use thiserror::Error;

/// Anything that can be shown in a prompt.
pub trait Item {
    /// The plain text form of the item, used for `{{ . }}`.
    fn label(&self) -> String;

    /// Looks up a named field, used for `{{ .Name }}`.
    fn field(&self, _name: &str) -> Option<String> {
        None
    }
}

impl Item for str {
    fn label(&self) -> String {
        self.to_string()
    }
}

impl Item for String {
    fn label(&self) -> String {
        self.clone()
    }
}

impl<T: Item + ?Sized> Item for &T {
    fn label(&self) -> String {
        (**self).label()
    }

    fn field(&self, name: &str) -> Option<String> {
        (**self).field(name)
    }
}

macro_rules! impl_item_for_display {
    ($($t:ty),*) => {
        $(
            impl Item for $t {
                fn label(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_item_for_display!(char, bool, i32, i64, u8, u16, u32, u64, usize, f32, f64);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unclosed action starting at byte {0}")]
    Unclosed(usize),
    #[error("empty action at byte {0}")]
    EmptyAction(usize),
    #[error("unterminated string literal in {0:?}")]
    UnterminatedString(String),
    #[error("unexpected {0:?} in action")]
    UnexpectedToken(String),
    #[error("function {0:?} not defined")]
    UnknownFunction(String),
    #[error("unexpected {{{{ {0} }}}}")]
    Unbalanced(&'static str),
    #[error("missing {{{{ end }}}}")]
    MissingEnd,
    #[error("can't evaluate field {0}")]
    MissingField(String),
}

#[derive(Debug, Clone, PartialEq)]
enum Operand {
    Dot,
    Field(String),
    Literal(String),
}

#[derive(Debug, Clone, PartialEq)]
struct Pipeline {
    operand: Operand,
    styles: Vec<Style>,
}

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Text(String),
    Output(Pipeline),
    If {
        cond: Pipeline,
        then: Vec<Node>,
        otherwise: Vec<Node>,
    },
}

/// A parsed template.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    nodes: Vec<Node>,
}

enum Piece {
    Text(String),
    Action(usize, String),
}

enum Directive {
    Output(Pipeline),
    If(Pipeline),
    Else,
    End,
}

enum Stop {
    Eof,
    Else,
    End,
}

impl Template {
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let pieces = split(source)?;
        let mut pieces = pieces.into_iter();
        let (nodes, stop) = parse_nodes(&mut pieces)?;
        match stop {
            Stop::Eof => Ok(Self { nodes }),
            Stop::Else => Err(TemplateError::Unbalanced("else")),
            Stop::End => Err(TemplateError::Unbalanced("end")),
        }
    }

    /// Renders the template against `value`.
    pub fn execute(&self, value: &dyn Item, styles: &Styles) -> Result<String, TemplateError> {
        let mut out = String::new();
        exec_nodes(&self.nodes, value, styles, &mut out)?;
        Ok(out)
    }
}

fn split(source: &str) -> Result<Vec<Piece>, TemplateError> {
    let mut pieces = Vec::new();
    let mut rest = source;
    let mut offset = 0;

    while let Some(open) = rest.find("{{") {
        if open > 0 {
            pieces.push(Piece::Text(rest[..open].to_string()));
        }
        let body = &rest[open + 2..];
        let close = body
            .find("}}")
            .ok_or(TemplateError::Unclosed(offset + open))?;
        pieces.push(Piece::Action(offset + open, body[..close].trim().to_string()));

        let consumed = open + 2 + close + 2;
        offset += consumed;
        rest = &rest[consumed..];
    }

    if !rest.is_empty() {
        pieces.push(Piece::Text(rest.to_string()));
    }
    Ok(pieces)
}

fn parse_nodes(pieces: &mut impl Iterator<Item = Piece>) -> Result<(Vec<Node>, Stop), TemplateError> {
    let mut nodes = Vec::new();

    while let Some(piece) = pieces.next() {
        let (at, action) = match piece {
            Piece::Text(text) => {
                nodes.push(Node::Text(text));
                continue;
            }
            Piece::Action(at, action) => (at, action),
        };

        match parse_directive(at, &action)? {
            Directive::Output(pipeline) => nodes.push(Node::Output(pipeline)),
            Directive::Else => return Ok((nodes, Stop::Else)),
            Directive::End => return Ok((nodes, Stop::End)),
            Directive::If(cond) => {
                let (then, stop) = parse_nodes(pieces)?;
                let otherwise = match stop {
                    Stop::End => Vec::new(),
                    Stop::Else => match parse_nodes(pieces)? {
                        (otherwise, Stop::End) => otherwise,
                        (_, Stop::Else) => return Err(TemplateError::Unbalanced("else")),
                        (_, Stop::Eof) => return Err(TemplateError::MissingEnd),
                    },
                    Stop::Eof => return Err(TemplateError::MissingEnd),
                };
                nodes.push(Node::If {
                    cond,
                    then,
                    otherwise,
                });
            }
        }
    }

    Ok((nodes, Stop::Eof))
}

fn parse_directive(at: usize, action: &str) -> Result<Directive, TemplateError> {
    match action {
        "" => Err(TemplateError::EmptyAction(at)),
        "else" => Ok(Directive::Else),
        "end" => Ok(Directive::End),
        _ => match action.strip_prefix("if ") {
            Some(cond) => Ok(Directive::If(parse_pipeline(at, cond.trim())?)),
            None => Ok(Directive::Output(parse_pipeline(at, action)?)),
        },
    }
}

#[derive(Debug, PartialEq)]
enum Token {
    Dot,
    Field(String),
    Literal(String),
    Ident(String),
    Pipe,
}

fn tokenize(action: &str) -> Result<Vec<Token>, TemplateError> {
    let mut tokens = Vec::new();
    let mut chars = action.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '|' => {
                chars.next();
                tokens.push(Token::Pipe);
            }
            '"' => {
                chars.next();
                let mut literal = String::new();
                let mut closed = false;
                while let Some(c) = chars.next() {
                    match c {
                        '"' => {
                            closed = true;
                            break;
                        }
                        '\\' => literal.extend(chars.next()),
                        c => literal.push(c),
                    }
                }
                if !closed {
                    return Err(TemplateError::UnterminatedString(action.to_string()));
                }
                tokens.push(Token::Literal(literal));
            }
            '.' => {
                chars.next();
                let mut name = String::new();
                while let Some(&c) = chars.peek() {
                    if c.is_alphanumeric() || c == '_' || c == '.' {
                        name.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(if name.is_empty() {
                    Token::Dot
                } else {
                    Token::Field(name)
                });
            }
            c if c.is_alphabetic() => {
                let mut name = String::new();
                while let Some(&c) = chars.peek() {
                    if c.is_alphanumeric() || c == '_' {
                        name.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token::Ident(name));
            }
            other => return Err(TemplateError::UnexpectedToken(other.to_string())),
        }
    }

    Ok(tokens)
}

fn parse_pipeline(at: usize, action: &str) -> Result<Pipeline, TemplateError> {
    let mut tokens = tokenize(action)?.into_iter();

    let operand = match tokens.next() {
        Some(Token::Dot) => Operand::Dot,
        Some(Token::Field(name)) => Operand::Field(name),
        Some(Token::Literal(text)) => Operand::Literal(text),
        Some(Token::Ident(name)) => return Err(TemplateError::UnknownFunction(name)),
        Some(Token::Pipe) => return Err(TemplateError::UnexpectedToken("|".to_string())),
        None => return Err(TemplateError::EmptyAction(at)),
    };

    let mut styles = Vec::new();
    while let Some(token) = tokens.next() {
        if token != Token::Pipe {
            return Err(TemplateError::UnexpectedToken(format!("{token:?}")));
        }
        match tokens.next() {
            Some(Token::Ident(name)) => {
                let style =
                    Style::from_name(&name).ok_or(TemplateError::UnknownFunction(name))?;
                styles.push(style);
            }
            Some(other) => return Err(TemplateError::UnexpectedToken(format!("{other:?}"))),
            None => return Err(TemplateError::UnexpectedToken("|".to_string())),
        }
    }

    Ok(Pipeline { operand, styles })
}

fn eval(pipeline: &Pipeline, value: &dyn Item, styles: &Styles) -> Result<String, TemplateError> {
    let mut text = match &pipeline.operand {
        Operand::Dot => value.label(),
        Operand::Field(name) => value
            .field(name)
            .ok_or_else(|| TemplateError::MissingField(name.clone()))?,
        Operand::Literal(text) => text.clone(),
    };

    for style in &pipeline.styles {
        text = styles.apply(*style, &text);
    }
    Ok(text)
}

fn truthy(text: &str) -> bool {
    !text.is_empty() && text != "false" && text != "0"
}

fn exec_nodes(
    nodes: &[Node],
    value: &dyn Item,
    styles: &Styles,
    out: &mut String,
) -> Result<(), TemplateError> {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Output(pipeline) => out.push_str(&eval(pipeline, value, styles)?),
            Node::If {
                cond,
                then,
                otherwise,
            } => {
                let branch = if truthy(&eval(cond, value, styles)?) {
                    then
                } else {
                    otherwise
                };
                exec_nodes(branch, value, styles, out)?;
            }
        }
    }
    Ok(())
}
