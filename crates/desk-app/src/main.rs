mod app_state;
mod board_render;
mod bootstrap_helpers;
mod command_file_runtime;
mod commands;
mod runtime_loop;

use anyhow::{Context, Result};
use clap::Parser;
use desk_cli::Cli;
use desk_roster::load_roster;
use tracing::info;

use crate::app_state::AppState;
use crate::board_render::render_board;
use crate::bootstrap_helpers::init_tracing;
use crate::command_file_runtime::execute_command_file;
use crate::runtime_loop::{run_interactive, InteractiveRuntimeConfig};

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    run_cli(cli)
}

fn run_cli(cli: Cli) -> Result<()> {
    let roster = load_roster(&cli.mentors, &cli.startups).with_context(|| {
        format!(
            "failed to load roster from {} and {}",
            cli.mentors.display(),
            cli.startups.display()
        )
    })?;
    let mut state = AppState::from_cli(&cli, roster);
    info!(
        policy = state.allocator.policy().as_str(),
        seeded = cli.seed.is_some(),
        "mentor desk ready"
    );

    let show_board = !cli.no_board;
    if let Some(path) = cli.command_file.as_deref() {
        execute_command_file(path, cli.command_file_error_mode, &mut state, show_board)?;
        return Ok(());
    }

    println!("{}", render_board(&state));
    println!("type /help for commands");
    let config = InteractiveRuntimeConfig {
        history_path: cli.history.clone(),
        show_board,
    };
    run_interactive(&mut state, &config)
}
