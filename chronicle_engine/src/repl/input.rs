//! Terminal input handling for the REPL.
//!
//! Wraps rustyline configuration and completion tailored to the command set,
//! with a plain stdin fallback when no terminal is attached.

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Helper};

/// Outcome of reading a line from the REPL input.
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

/// Command words offered by tab completion.
const COMMAND_WORDS: &[&str] = &[
    "abandon",
    "accept",
    "attack",
    "buy",
    "chain",
    "complete",
    "equip",
    "explore",
    "fight",
    "help",
    "inventory",
    "progress",
    "quests",
    "quests active",
    "quests available",
    "quests completed",
    "quit",
    "rest",
    "run",
    "save",
    "saves",
    "sell",
    "shop",
    "special",
    "stats",
    "unequip armor",
    "unequip weapon",
    "use",
];

type ReplEditor = rustyline::Editor<ChronicleHelper, DefaultHistory>;

/// Completes command words first, then content names (quest ids, items, enemies)
/// for the word under the cursor.
#[derive(Default)]
struct ChronicleHelper {
    content_terms: Vec<String>,
}

impl Helper for ChronicleHelper {}

impl Completer for ChronicleHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (start, prefix) = current_prefix(line, pos);
        if prefix.is_empty() {
            return Ok((start, Vec::new()));
        }
        let lower = prefix.to_lowercase();
        let commands: Vec<Pair> = COMMAND_WORDS
            .iter()
            .filter(|term| term.starts_with(&lower))
            .map(|term| Pair {
                display: (*term).to_string(),
                replacement: (*term).to_string(),
            })
            .collect();
        if !commands.is_empty() {
            return Ok((start, commands));
        }

        // past the command word: complete the argument only
        let (arg_start, arg) = match lower.find(char::is_whitespace) {
            Some(idx) => {
                let rest = &prefix[idx..];
                let trimmed = rest.trim_start();
                (start + prefix.len() - trimmed.len(), trimmed.to_lowercase())
            },
            None => return Ok((start, Vec::new())),
        };
        let pairs = self
            .content_terms
            .iter()
            .filter(|term| term.starts_with(&arg))
            .map(|term| Pair {
                display: term.clone(),
                replacement: term.clone(),
            })
            .collect();
        Ok((arg_start, pairs))
    }
}

impl Hinter for ChronicleHelper {
    type Hint = String;
}

impl Highlighter for ChronicleHelper {}

impl Validator for ChronicleHelper {
    fn validate(&self, ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        let _ = ctx;
        Ok(ValidationResult::Valid(None))
    }
}

fn current_prefix(line: &str, pos: usize) -> (usize, String) {
    let slice = &line[..pos];
    let trimmed = slice.trim_start_matches(char::is_whitespace);
    let start = pos - trimmed.len();
    (start, trimmed.to_string())
}

/// Helper responsible for managing the interactive input backend.
///
/// Prefers `rustyline` when an interactive terminal is available, falling back to
/// a basic stdin reader otherwise.
pub struct InputManager {
    backend: Backend,
}

impl InputManager {
    /// Create an input manager; `content_terms` feed argument completion.
    pub fn new(content_terms: Vec<String>) -> Self {
        let backend = if io::stdin().is_terminal() {
            match RustylineInput::new(content_terms) {
                Ok(editor) => {
                    info!("using rustyline-backed REPL input");
                    Backend::Rustyline(Box::new(editor))
                },
                Err(err) => {
                    warn!("failed to initialize rustyline ({err}), falling back to basic stdin");
                    Backend::plain()
                },
            }
        } else {
            info!("stdin is not a TTY; using basic input mode");
            Backend::plain()
        };

        Self { backend }
    }

    /// Read a line from the current backend. If the interactive backend reports an
    /// unrecoverable error, switch to the plain stdin backend and retry once.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self.backend.read_line(prompt) {
            Ok(event) => Ok(event),
            Err(err) => {
                if self.backend.is_rustyline() {
                    warn!("rustyline input failed: {err} -- switching to basic stdin");
                    self.backend = Backend::plain();
                    self.backend.read_line(prompt)
                } else {
                    Err(err)
                }
            },
        }
    }
}

enum Backend {
    Rustyline(Box<RustylineInput>),
    Plain(StdinInput),
}

impl Backend {
    fn plain() -> Self {
        Backend::Plain(StdinInput::default())
    }

    fn is_rustyline(&self) -> bool {
        matches!(self, Backend::Rustyline(_))
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self {
            Backend::Rustyline(editor) => editor.read_line(prompt),
            Backend::Plain(stdin) => stdin.read_line(prompt),
        }
    }
}

struct RustylineInput {
    editor: ReplEditor,
    history_path: Option<PathBuf>,
}

impl RustylineInput {
    fn new(content_terms: Vec<String>) -> io::Result<Self> {
        let mut editor = rustyline::Editor::<ChronicleHelper, _>::new().map_err(map_io_err)?;
        editor.set_helper(Some(ChronicleHelper { content_terms }));
        let history_path = history_file_path();

        if let Some(path) = history_path.as_ref() {
            if let Some(dir) = path.parent()
                && let Err(err) = fs::create_dir_all(dir)
            {
                warn!("failed to create history directory {}: {err}", dir.display());
            }

            if let Err(err) = editor.load_history(path) {
                match err {
                    ReadlineError::Io(ref io_err) if io_err.kind() == io::ErrorKind::NotFound => {
                        info!("no prior history found at {}, starting fresh", path.display());
                    },
                    other => {
                        warn!("failed to load history from {}: {other}", path.display());
                    },
                }
            }
        }

        Ok(Self { editor, history_path })
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(err) = self.editor.add_history_entry(line.as_str()) {
                        warn!("failed to append to history: {err}");
                    }
                    if let Some(path) = self.history_path.as_ref()
                        && let Err(err) = self.editor.save_history(path)
                    {
                        warn!("failed to persist history to {}: {err}", path.display());
                    }
                }
                Ok(InputEvent::Line(line))
            },
            Err(err) => convert_readline_error(err),
        }
    }
}

#[derive(Default)]
struct StdinInput {
    buffer: String,
}

impl StdinInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        print!("{prompt}");
        io::stdout().flush()?;

        self.buffer.clear();
        let bytes = io::stdin().read_line(&mut self.buffer)?;
        if bytes == 0 {
            return Ok(InputEvent::Eof);
        }

        if self.buffer.ends_with('\n') {
            self.buffer.pop();
            if self.buffer.ends_with('\r') {
                self.buffer.pop();
            }
        }

        Ok(InputEvent::Line(self.buffer.clone()))
    }
}

fn convert_readline_error(err: ReadlineError) -> io::Result<InputEvent> {
    match err {
        ReadlineError::Interrupted => Ok(InputEvent::Interrupted),
        ReadlineError::Eof => Ok(InputEvent::Eof),
        ReadlineError::Io(io_err) => Err(io_err),
        other => Err(io::Error::other(other)),
    }
}

fn map_io_err(err: ReadlineError) -> io::Error {
    match err {
        ReadlineError::Io(io_err) => io_err,
        other => io::Error::other(other),
    }
}

fn history_file_path() -> Option<PathBuf> {
    dirs::data_dir()
        .or_else(dirs::data_local_dir)
        .map(|base| build_history_path(&base))
}

fn build_history_path(base: &Path) -> PathBuf {
    let mut path = base.to_path_buf();
    path.push("chronicle");
    path.push("history.txt");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_readline_ctrl_c_to_interrupt() {
        let result = convert_readline_error(ReadlineError::Interrupted).unwrap();
        assert!(matches!(result, InputEvent::Interrupted));
    }

    #[test]
    fn converts_readline_eof() {
        let result = convert_readline_error(ReadlineError::Eof).unwrap();
        assert!(matches!(result, InputEvent::Eof));
    }

    #[test]
    fn history_path_appends_components() {
        let base = PathBuf::from("/tmp/chronicle-test");
        let path = build_history_path(&base);
        assert!(path.ends_with(Path::new("chronicle/history.txt")));
    }

    #[test]
    fn prefix_skips_leading_whitespace() {
        assert_eq!(current_prefix("   acc", 6), (3, "acc".to_string()));
    }

    #[test]
    fn command_words_are_sorted_and_unique() {
        let mut sorted = COMMAND_WORDS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted, COMMAND_WORDS);
    }
}
