use std::{
    io::{BufRead, IsTerminal, Write},
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};
use desk_cli::COMMAND_NAMES;
use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Config as ReadlineConfig, Context as ReadlineContext, Editor, Helper,
};
use tracing::warn;

use crate::app_state::AppState;
use crate::board_render::render_board;
use crate::commands::{handle_command, CommandAction, CommandOutcome};

const REPL_PROMPT: &str = "desk> ";

#[derive(Debug, Clone)]
pub(crate) struct InteractiveRuntimeConfig {
    pub(crate) history_path: PathBuf,
    pub(crate) show_board: bool,
}

#[derive(Debug)]
struct ReplCommandCompleter {
    commands: Vec<String>,
}

impl ReplCommandCompleter {
    fn new(commands: &[&str]) -> Self {
        Self {
            commands: commands
                .iter()
                .map(|command| (*command).to_string())
                .collect(),
        }
    }

    fn complete_token(&self, token: &str) -> Vec<String> {
        if !token.starts_with('/') {
            return Vec::new();
        }
        self.commands
            .iter()
            .filter(|candidate| candidate.starts_with(token))
            .cloned()
            .collect()
    }
}

impl Helper for ReplCommandCompleter {}
impl Validator for ReplCommandCompleter {}
impl Highlighter for ReplCommandCompleter {}

impl Hinter for ReplCommandCompleter {
    type Hint = String;
}

impl Completer for ReplCommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let safe_pos = pos.min(line.len());
        // Only the command word completes; mentor names may contain spaces.
        if line[..safe_pos].contains(char::is_whitespace) {
            return Ok((safe_pos, Vec::new()));
        }
        let token = line[..safe_pos].trim_start();
        let start = safe_pos - token.len();
        let matches = self
            .complete_token(token)
            .into_iter()
            .map(|candidate| Pair {
                display: candidate.clone(),
                replacement: candidate,
            })
            .collect::<Vec<_>>();
        Ok((start, matches))
    }
}

/// Runs one command and appends the refreshed board when the registry changed.
pub(crate) fn dispatch_turn(
    state: &mut AppState,
    input: &str,
    show_board: bool,
) -> CommandOutcome {
    let revision_before = state.registry.revision();
    let mut outcome = handle_command(state, input);
    if show_board && state.registry.revision() != revision_before {
        if !outcome.output.is_empty() {
            outcome.output.push_str("\n\n");
        }
        outcome.output.push_str(&render_board(state));
    }
    outcome
}

fn print_outcome(outcome: &CommandOutcome) {
    if !outcome.output.is_empty() {
        println!("{}", outcome.output);
    }
}

pub(crate) fn run_interactive(
    state: &mut AppState,
    config: &InteractiveRuntimeConfig,
) -> Result<()> {
    if std::io::stdin().is_terminal() && std::io::stdout().is_terminal() {
        run_interactive_tty(state, config)
    } else {
        run_interactive_stdin(state, config)
    }
}

fn run_interactive_stdin(state: &mut AppState, config: &InteractiveRuntimeConfig) -> Result<()> {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{REPL_PROMPT}");
        std::io::stdout()
            .flush()
            .context("failed to flush stdout")?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read interactive input")?;
        if line.trim().is_empty() {
            continue;
        }

        let outcome = dispatch_turn(state, &line, config.show_board);
        print_outcome(&outcome);
        if outcome.action == CommandAction::Exit {
            break;
        }
    }

    Ok(())
}

fn run_interactive_tty(state: &mut AppState, config: &InteractiveRuntimeConfig) -> Result<()> {
    let mut editor = build_repl_editor()?;
    load_repl_history(&mut editor, &config.history_path);

    loop {
        let line = match editor.readline(REPL_PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(error) => return Err(anyhow!("failed to read interactive input: {error}")),
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if matches!(editor.add_history_entry(input), Ok(true)) {
            save_repl_history(&mut editor, &config.history_path);
        }

        let outcome = dispatch_turn(state, input, config.show_board);
        print_outcome(&outcome);
        if outcome.action == CommandAction::Exit {
            break;
        }
    }

    save_repl_history(&mut editor, &config.history_path);
    Ok(())
}

fn build_repl_editor() -> Result<Editor<ReplCommandCompleter, DefaultHistory>> {
    let config = ReadlineConfig::builder().build();
    let mut editor = Editor::<ReplCommandCompleter, DefaultHistory>::with_config(config)
        .context("failed to initialize interactive editor")?;
    editor.set_helper(Some(ReplCommandCompleter::new(COMMAND_NAMES)));
    Ok(editor)
}

fn load_repl_history(editor: &mut Editor<ReplCommandCompleter, DefaultHistory>, path: &Path) {
    if let Err(error) = editor.load_history(path) {
        if !matches!(
            error,
            ReadlineError::Io(ref io_error) if io_error.kind() == std::io::ErrorKind::NotFound
        ) {
            warn!("failed to load history from {}: {error}", path.display());
        }
    }
}

fn save_repl_history(editor: &mut Editor<ReplCommandCompleter, DefaultHistory>, path: &Path) {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(error) = std::fs::create_dir_all(parent) {
                warn!(
                    "failed to create history directory {}: {error}",
                    parent.display()
                );
                return;
            }
        }
    }

    if let Err(error) = editor.save_history(path) {
        warn!("failed to persist history to {}: {error}", path.display());
    }
}
