//! # termprompt CLI
//!
//! Demo binary running each kind of prompt from the command line. The
//! answer is printed to stdout, so the binary also works inside shell
//! scripts:
//!
//! ```bash
//! name=$(termprompt prompt "Your name")
//! termprompt confirm "Deploy to production" && ./deploy.sh
//! day=$(termprompt select "Day" Mon Tue Wed Thu Fri --search)
//! termprompt multi-select "Toppings" cheese ham olives --selected 0
//! ```
//!
//! ## Logging
//!
//! Logs are written only when `--log-file` is given, since stderr shares the
//! terminal with the prompt. The `TERMPROMPT_LOG` variable takes an
//! `EnvFilter` directive (default `debug`).
//!
//! ## Configuration
//!
//! Defaults for color, pointer style, list size and help visibility are read
//! from `~/.config/termprompt/config.json`. Command-line flags win.

use termprompt::ui::{ColorMode, Config};
use termprompt::{Confirm, MultiSelect, Prompt, PromptError, Select, SelectWithAdd, Selection};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use crossterm::{cursor::Show, execute, terminal::disable_raw_mode};
use std::fs::File;
use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// termprompt - interactive prompts for the terminal
#[derive(Parser, Debug)]
#[command(name = "termprompt")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive terminal prompts", long_about = None)]
struct Args {
    /// Write debug logs to this file
    #[arg(long, value_name = "PATH", global = true)]
    log_file: Option<PathBuf>,

    /// When to use colors (overrides the config file)
    #[arg(long, value_enum, global = true)]
    color: Option<ColorChoice>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => ColorMode::Auto,
            ColorChoice::Always => ColorMode::Always,
            ColorChoice::Never => ColorMode::Never,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ask for a line of text
    Prompt {
        label: String,

        /// Initial value
        #[arg(long)]
        default: Option<String>,

        /// Let the initial value be edited instead of replaced
        #[arg(long)]
        allow_edit: bool,

        /// Only accept input that parses as a number
        #[arg(long)]
        number: bool,

        /// Clear the prompt once answered
        #[arg(long)]
        hide_entered: bool,
    },

    /// Ask for a secret; input is masked
    Password {
        #[arg(default_value = "Password")]
        label: String,

        /// Mask character; a space hides the input length too
        #[arg(long, default_value_t = '*')]
        mask: char,
    },

    /// Ask a yes/no question; exits non-zero unless answered yes
    Confirm {
        label: String,

        /// Treat an empty answer as yes
        #[arg(long)]
        default_yes: bool,
    },

    /// Pick one item
    Select {
        label: String,

        #[arg(required = true)]
        items: Vec<String>,

        /// Enable `/` search over the items
        #[arg(long)]
        search: bool,

        /// Number of visible items
        #[arg(long)]
        size: Option<usize>,

        /// Item active when the list opens
        #[arg(long, default_value_t = 0)]
        cursor: usize,
    },

    /// Pick any number of items; prints the chosen indices
    MultiSelect {
        label: String,

        #[arg(required = true)]
        items: Vec<String>,

        /// Indices marked when the list opens
        #[arg(long, value_delimiter = ',')]
        selected: Vec<usize>,

        /// Enable `/` search over the items
        #[arg(long)]
        search: bool,

        /// Number of visible items
        #[arg(long)]
        size: Option<usize>,
    },

    /// Pick an item or type a new one
    SelectAdd {
        label: String,

        items: Vec<String>,

        /// Label of the entry that asks for a new value
        #[arg(long, default_value = "Other")]
        add_label: String,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Restore the terminal if a session panics mid-frame
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), Show);
        original_hook(panic_info);
    }));

    let result = init_logging(args.log_file.as_deref()).and_then(|()| run(args));

    match result {
        Ok(answer) => {
            println!("{answer}");
            ExitCode::SUCCESS
        }
        Err(err) => match err.downcast_ref::<PromptError>() {
            Some(PromptError::Interrupted) => ExitCode::from(130),
            Some(cancel) if cancel.is_cancellation() => ExitCode::from(1),
            _ => {
                eprintln!("Error: {err:#}");
                ExitCode::from(2)
            }
        },
    }
}

fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create log file: {}", path.display()))?;
    let filter =
        EnvFilter::try_from_env("TERMPROMPT_LOG").unwrap_or_else(|_| EnvFilter::new("debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to install logger")?;

    Ok(())
}

/// Runs the requested session and returns the text to print.
fn run(args: Args) -> Result<String> {
    let config = Config::load();
    let color = args.color.map_or(config.color, ColorMode::from);
    let styles = color.styles();
    tracing::debug!(?config, color = styles.color(), "starting");

    match args.command {
        Command::Prompt {
            label,
            default,
            allow_edit,
            number,
            hide_entered,
        } => {
            let mut prompt = Prompt::new(label)
                .allow_edit(allow_edit)
                .hide_entered(hide_entered)
                .pointer(config.pointer)
                .styles(styles);
            if let Some(default) = default {
                prompt = prompt.default(default);
            }
            if number {
                prompt = prompt.validate(validate_number);
            }
            Ok(prompt.run()?)
        }

        Command::Password { label, mask } => Ok(Prompt::new(label)
            .mask(mask)
            .pointer(config.pointer)
            .styles(styles)
            .run()?),

        Command::Confirm { label, default_yes } => {
            Confirm::new(label)
                .default_yes(default_yes)
                .styles(styles)
                .run()?;
            Ok("y".to_string())
        }

        Command::Select {
            label,
            items,
            search,
            size,
            cursor,
        } => {
            let mut select = Select::new(label, items.clone())
                .size(size.unwrap_or(config.window_size()))
                .hide_help(config.hide_help)
                .pointer(config.pointer)
                .styles(styles)
                .cursor_pos(cursor);
            if search {
                select = select.searcher(substring_searcher(items));
            }
            let (_, item) = select.run()?;
            Ok(item)
        }

        Command::MultiSelect {
            label,
            items,
            selected,
            search,
            size,
        } => {
            let mut select = MultiSelect::new(label, items.clone())
                .size(size.unwrap_or(config.window_size()))
                .hide_help(config.hide_help)
                .pointer(config.pointer)
                .styles(styles)
                .selected(selected);
            if search {
                select = select.searcher(substring_searcher(items));
            }
            let chosen = select.run()?;
            Ok(chosen
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(","))
        }

        Command::SelectAdd {
            label,
            items,
            add_label,
        } => {
            let select = SelectWithAdd::new(label, items, add_label)
                .size(config.window_size())
                .hide_help(config.hide_help)
                .styles(styles)
                .validate(|value| {
                    anyhow::ensure!(!value.trim().is_empty(), "value cannot be empty");
                    Ok(())
                });
            match select.run()? {
                Selection::Existing(_, item) => Ok(item),
                Selection::Added(value) => Ok(value),
            }
        }
    }
}

fn validate_number(input: &str) -> Result<()> {
    input
        .trim()
        .parse::<f64>()
        .with_context(|| "must be a number".to_string())?;
    Ok(())
}

/// Case-insensitive substring match, ignoring spaces in the term.
fn substring_searcher(items: Vec<String>) -> impl Fn(&str, usize) -> bool {
    move |term: &str, index: usize| {
        let needle = term.replace(' ', "").to_lowercase();
        items
            .get(index)
            .is_some_and(|item| item.replace(' ', "").to_lowercase().contains(&needle))
    }
}
