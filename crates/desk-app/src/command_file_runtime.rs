use std::path::Path;

use anyhow::{bail, Result};
use desk_cli::{parse_command_file, CliCommandFileErrorMode, CommandFileReport};

use crate::app_state::AppState;
use crate::commands::{CommandAction, CommandOutcome};
use crate::runtime_loop::dispatch_turn;

pub(crate) fn execute_command_file(
    path: &Path,
    mode: CliCommandFileErrorMode,
    state: &mut AppState,
    show_board: bool,
) -> Result<CommandFileReport> {
    execute_command_file_with_handler(path, mode, |command| {
        dispatch_turn(state, command, show_board)
    })
}

fn execute_command_file_with_handler<F>(
    path: &Path,
    mode: CliCommandFileErrorMode,
    mut handle_command: F,
) -> Result<CommandFileReport>
where
    F: FnMut(&str) -> CommandOutcome,
{
    let entries = parse_command_file(path)?;
    let mut report = CommandFileReport {
        total: entries.len(),
        ..CommandFileReport::default()
    };

    for entry in entries {
        report.executed += 1;

        if !entry.command.starts_with('/') {
            report.failed += 1;
            println!(
                "command file error: path={} line={} command={} error=command must start with '/'",
                path.display(),
                entry.line_number,
                entry.command
            );
            if mode == CliCommandFileErrorMode::FailFast {
                report.halted_early = true;
                break;
            }
            continue;
        }

        let outcome = handle_command(&entry.command);
        if !outcome.output.is_empty() {
            println!("{}", outcome.output);
        }

        if outcome.failed {
            report.failed += 1;
            println!(
                "command file error: path={} line={} command={}",
                path.display(),
                entry.line_number,
                entry.command
            );
            if mode == CliCommandFileErrorMode::FailFast {
                report.halted_early = true;
                break;
            }
            continue;
        }

        report.succeeded += 1;
        if outcome.action == CommandAction::Exit {
            report.halted_early = true;
            println!(
                "command file notice: path={} line={} command={} action=exit",
                path.display(),
                entry.line_number,
                entry.command
            );
            break;
        }
    }

    println!(
        "command file summary: path={} mode={} total={} executed={} succeeded={} failed={} halted_early={}",
        path.display(),
        mode.as_str(),
        report.total,
        report.executed,
        report.succeeded,
        report.failed,
        report.halted_early
    );

    if mode == CliCommandFileErrorMode::FailFast && report.failed > 0 {
        bail!(
            "command file execution failed: path={} failed={} mode={}",
            path.display(),
            report.failed,
            mode.as_str()
        );
    }

    Ok(report)
}
