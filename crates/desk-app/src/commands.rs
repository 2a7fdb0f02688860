use desk_allocation::{AllocationRequest, AllocationWarning, ToggleOutcome};
use desk_cli::{
    canonical_command_name, command_catalog, normalize_help_topic, parse_allocate_args,
    parse_command, take_json_flag, ALLOCATE_USAGE,
};
use desk_roster::SelectionTarget;

use crate::app_state::AppState;
use crate::board_render::{
    render_allocated, render_board, render_eligible, render_ended, render_generate_report,
    render_option_list, render_status, render_warning,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CommandAction {
    Continue,
    Exit,
}

/// Text produced by one command plus whether it should count as a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CommandOutcome {
    pub(crate) action: CommandAction,
    pub(crate) output: String,
    pub(crate) failed: bool,
}

impl CommandOutcome {
    fn ok(output: impl Into<String>) -> Self {
        Self {
            action: CommandAction::Continue,
            output: output.into(),
            failed: false,
        }
    }

    fn failed(output: impl Into<String>) -> Self {
        Self {
            action: CommandAction::Continue,
            output: output.into(),
            failed: true,
        }
    }

    fn exit() -> Self {
        Self {
            action: CommandAction::Exit,
            output: String::new(),
            failed: false,
        }
    }

    fn from_warning(warning: &AllocationWarning) -> Self {
        Self::failed(render_warning(warning))
    }
}

/// Handles one slash command against the application state.
pub(crate) fn handle_command(state: &mut AppState, input: &str) -> CommandOutcome {
    let Some(parsed) = parse_command(input) else {
        return CommandOutcome::failed(format!(
            "commands start with '/': {}\nrun /help for command list",
            input.trim()
        ));
    };
    let args = parsed.args;

    match canonical_command_name(parsed.name) {
        "/quit" => CommandOutcome::exit(),
        "/help" => handle_help(args),
        "/board" => CommandOutcome::ok(render_board(state)),
        "/mentors" => CommandOutcome::ok(render_option_list(
            "mentors",
            &state.roster.option_labels(SelectionTarget::Mentor),
        )),
        "/startups" => CommandOutcome::ok(render_option_list(
            "startups",
            &state.roster.option_labels(SelectionTarget::Startup),
        )),
        "/allocate" => handle_allocate(state, args),
        "/generate" => handle_generate(state),
        "/toggle" => handle_toggle(state, args),
        "/end" => handle_end(state, args),
        "/eligible" => handle_eligible(state, args),
        "/status" => handle_status(state, args),
        unknown => CommandOutcome::failed(command_catalog::unknown_command_message(unknown)),
    }
}

fn handle_help(args: &str) -> CommandOutcome {
    if args.is_empty() {
        return CommandOutcome::ok(command_catalog::render_help_overview());
    }
    let topic = normalize_help_topic(args);
    match command_catalog::render_command_help(&topic) {
        Some(help) => CommandOutcome::ok(help),
        None => CommandOutcome::failed(command_catalog::unknown_help_topic_message(&topic)),
    }
}

fn require_mentor_arg<'a>(args: &'a str, usage: &str) -> Result<&'a str, CommandOutcome> {
    if args.is_empty() {
        return Err(CommandOutcome::failed(format!("usage: {usage}")));
    }
    Ok(args)
}

fn handle_allocate(state: &mut AppState, args: &str) -> CommandOutcome {
    let parsed = match parse_allocate_args(args) {
        Ok(parsed) => parsed,
        Err(error) => {
            return CommandOutcome::failed(format!("{error}\nusage: {ALLOCATE_USAGE}"));
        }
    };
    let mentor = state
        .roster
        .selected_name(SelectionTarget::Mentor, parsed.mentor);
    let startup = parsed
        .startup
        .map(|raw| state.roster.selected_name(SelectionTarget::Startup, raw));
    let request = match startup.as_deref() {
        Some(startup) => AllocationRequest::manual(&mentor, startup),
        None => AllocationRequest::auto(&mentor),
    };

    let now = state.now_unix_ms();
    match state.allocator.allocate(
        &state.roster,
        &mut state.registry,
        request,
        state.random.as_mut(),
        now,
    ) {
        Ok(session) => CommandOutcome::ok(render_allocated(&mentor, &session)),
        Err(warning) => CommandOutcome::from_warning(&warning),
    }
}

fn handle_generate(state: &mut AppState) -> CommandOutcome {
    let now = state.now_unix_ms();
    let report = state.allocator.generate(
        &state.roster,
        &mut state.registry,
        state.random.as_mut(),
        now,
    );
    CommandOutcome::ok(render_generate_report(&report))
}

fn handle_toggle(state: &mut AppState, args: &str) -> CommandOutcome {
    let raw = match require_mentor_arg(args, "/toggle <mentor>") {
        Ok(raw) => raw,
        Err(outcome) => return outcome,
    };
    let mentor = state.roster.selected_name(SelectionTarget::Mentor, raw);
    let now = state.now_unix_ms();
    match state.allocator.toggle(
        &state.roster,
        &mut state.registry,
        &mentor,
        state.random.as_mut(),
        now,
    ) {
        Ok(ToggleOutcome::Started(session)) => {
            CommandOutcome::ok(render_allocated(&mentor, &session))
        }
        Ok(ToggleOutcome::Ended(session)) => CommandOutcome::ok(render_ended(&mentor, &session)),
        Err(warning) => CommandOutcome::from_warning(&warning),
    }
}

fn handle_end(state: &mut AppState, args: &str) -> CommandOutcome {
    let raw = match require_mentor_arg(args, "/end <mentor>") {
        Ok(raw) => raw,
        Err(outcome) => return outcome,
    };
    let mentor = state.roster.selected_name(SelectionTarget::Mentor, raw);
    match state.registry.end_session(&mentor) {
        Ok(session) => CommandOutcome::ok(render_ended(&mentor, &session)),
        Err(warning) => CommandOutcome::from_warning(&warning),
    }
}

fn handle_eligible(state: &AppState, args: &str) -> CommandOutcome {
    let raw = match require_mentor_arg(args, "/eligible <mentor>") {
        Ok(raw) => raw,
        Err(outcome) => return outcome,
    };
    let mentor = state.roster.selected_name(SelectionTarget::Mentor, raw);
    match state
        .allocator
        .eligible_startups(&state.roster, &state.registry, &mentor)
    {
        Ok(eligible) => CommandOutcome::ok(render_eligible(&mentor, &eligible)),
        Err(warning) => CommandOutcome::from_warning(&warning),
    }
}

fn handle_status(state: &AppState, args: &str) -> CommandOutcome {
    let (rest, json) = take_json_flag(args);
    if !rest.is_empty() {
        return CommandOutcome::failed("usage: /status [--json]");
    }
    match render_status(state, json) {
        Ok(rendered) => CommandOutcome::ok(rendered),
        Err(error) => CommandOutcome::failed(format!("failed to render status: {error}")),
    }
}
