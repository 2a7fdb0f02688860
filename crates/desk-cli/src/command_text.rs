#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedCommand<'a> {
    pub name: &'a str,
    pub args: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
    pub details: &'static str,
    pub example: &'static str,
}

/// Mentor and optional startup selections of an `/allocate` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocateArgs<'a> {
    pub mentor: &'a str,
    pub startup: Option<&'a str>,
}

const STARTUP_FLAG: &str = "--startup";
const JSON_FLAG: &str = "--json";

pub fn parse_command(input: &str) -> Option<ParsedCommand<'_>> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or_default();
    let args = parts.next().map(str::trim).unwrap_or_default();
    Some(ParsedCommand { name, args })
}

pub fn canonical_command_name(name: &str) -> &str {
    if name == "/exit" {
        "/quit"
    } else {
        name
    }
}

/// Splits `<mentor> [--startup <startup>]`; names may contain spaces.
pub fn parse_allocate_args(args: &str) -> Result<AllocateArgs<'_>, String> {
    let args = args.trim();
    let (mentor, startup) = match find_flag(args, STARTUP_FLAG) {
        Some((start, end)) => {
            let value = args[end..].trim_start_matches('=').trim();
            if value.is_empty() {
                return Err(format!("missing value for {STARTUP_FLAG}"));
            }
            (args[..start].trim(), Some(value))
        }
        None => (args, None),
    };
    if mentor.is_empty() {
        return Err("mentor selection is required".to_string());
    }
    if mentor.starts_with("--") {
        return Err(format!("unknown flag '{mentor}'"));
    }
    Ok(AllocateArgs { mentor, startup })
}

/// Removes a trailing or leading `--json` flag; returns the remainder and
/// whether the flag was present.
pub fn take_json_flag(args: &str) -> (&str, bool) {
    let trimmed = args.trim();
    if trimmed == JSON_FLAG {
        return ("", true);
    }
    if let Some(rest) = trimmed.strip_suffix(JSON_FLAG) {
        if rest.ends_with(char::is_whitespace) {
            return (rest.trim_end(), true);
        }
    }
    if let Some(rest) = trimmed.strip_prefix(JSON_FLAG) {
        if rest.starts_with(char::is_whitespace) {
            return (rest.trim_start(), true);
        }
    }
    (trimmed, false)
}

fn find_flag(args: &str, flag: &str) -> Option<(usize, usize)> {
    let mut search_from = 0usize;
    while let Some(offset) = args[search_from..].find(flag) {
        let start = search_from + offset;
        let end = start + flag.len();
        let starts_token = start == 0 || args[..start].ends_with(char::is_whitespace);
        let ends_token = args[end..].is_empty()
            || args[end..].starts_with(char::is_whitespace)
            || args[end..].starts_with('=');
        if starts_token && ends_token {
            return Some((start, end));
        }
        search_from = end;
    }
    None
}

pub fn normalize_help_topic(topic: &str) -> String {
    let trimmed = topic.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

pub fn render_help_overview(command_specs: &[CommandSpec]) -> String {
    let mut lines = vec!["commands:".to_string()];
    for spec in command_specs {
        lines.push(format!("  {:<42} {}", spec.usage, spec.description));
    }
    lines.push("tip: run /help <command> for details".to_string());
    lines.join("\n")
}

pub fn render_command_help(topic: &str, command_specs: &[CommandSpec]) -> Option<String> {
    let normalized = normalize_help_topic(topic);
    let command_name = canonical_command_name(&normalized);
    let spec = command_specs
        .iter()
        .find(|entry| entry.name == command_name)?;
    Some(format!(
        "command: {}\nusage: {}\n{}\n{}\nexample: {}",
        spec.name, spec.usage, spec.description, spec.details, spec.example
    ))
}

pub fn unknown_help_topic_message(topic: &str, command_names: &[&str]) -> String {
    match suggest_command(topic, command_names) {
        Some(suggestion) => format!(
            "unknown help topic: {topic}\ndid you mean {suggestion}?\nrun /help for command list"
        ),
        None => format!("unknown help topic: {topic}\nrun /help for command list"),
    }
}

pub fn unknown_command_message(command: &str, command_names: &[&str]) -> String {
    match suggest_command(command, command_names) {
        Some(suggestion) => {
            format!("unknown command: {command}\ndid you mean {suggestion}?\nrun /help for command list")
        }
        None => format!("unknown command: {command}\nrun /help for command list"),
    }
}

fn suggest_command<'a>(command: &str, command_names: &'a [&str]) -> Option<&'a str> {
    let command = canonical_command_name(command);
    if command.is_empty() {
        return None;
    }

    if let Some(prefix_match) = command_names
        .iter()
        .copied()
        .find(|candidate| candidate.starts_with(command))
    {
        return Some(prefix_match);
    }

    let mut best: Option<(&str, usize)> = None;
    for candidate in command_names.iter().copied() {
        let distance = levenshtein_distance(command, candidate);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((candidate, distance)),
        }
    }

    let (candidate, distance) = best?;
    let threshold = match command.len() {
        0..=4 => 1,
        5..=8 => 2,
        _ => 3,
    };
    if distance <= threshold {
        Some(candidate)
    } else {
        None
    }
}

fn levenshtein_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    if a.is_empty() {
        return b.chars().count();
    }
    if b.is_empty() {
        return a.chars().count();
    }

    let b_chars = b.chars().collect::<Vec<_>>();
    let mut previous = (0..=b_chars.len()).collect::<Vec<_>>();
    let mut current = vec![0; b_chars.len() + 1];

    for (i, left) in a.chars().enumerate() {
        current[0] = i + 1;
        for (j, right) in b_chars.iter().enumerate() {
            let substitution_cost = if left == *right { 0 } else { 1 };
            let deletion = previous[j + 1] + 1;
            let insertion = current[j] + 1;
            let substitution = previous[j] + substitution_cost;
            current[j + 1] = deletion.min(insertion).min(substitution);
        }
        previous.clone_from_slice(&current);
    }

    previous[b_chars.len()]
}

#[cfg(test)]
mod tests {
    use super::{
        parse_allocate_args, parse_command, render_command_help, render_help_overview,
        take_json_flag, unknown_command_message, CommandSpec,
    };

    const TEST_SPECS: &[CommandSpec] = &[
        CommandSpec {
            name: "/generate",
            usage: "/generate",
            description: "Auto-assign idle mentors",
            details: "Skips mentors already in a session.",
            example: "/generate",
        },
        CommandSpec {
            name: "/quit",
            usage: "/quit",
            description: "Exit",
            details: "Alias: /exit",
            example: "/quit",
        },
    ];
    const TEST_NAMES: &[&str] = &["/generate", "/quit", "/exit"];

    #[test]
    fn unit_parse_command_returns_name_and_args_for_slash_input() {
        let parsed = parse_command("  /toggle   Ada Lovelace ").expect("command should parse");
        assert_eq!(parsed.name, "/toggle");
        assert_eq!(parsed.args, "Ada Lovelace");
        assert!(parse_command("toggle Ada").is_none());
    }

    #[test]
    fn functional_parse_allocate_args_splits_names_with_spaces() {
        let parsed =
            parse_allocate_args("Ada Lovelace --startup Misc Labs").expect("allocate args");
        assert_eq!(parsed.mentor, "Ada Lovelace");
        assert_eq!(parsed.startup, Some("Misc Labs"));

        let equals = parse_allocate_args("#2 --startup=#3").expect("equals form");
        assert_eq!(equals.mentor, "#2");
        assert_eq!(equals.startup, Some("#3"));

        let auto = parse_allocate_args("Grace").expect("auto form");
        assert_eq!(auto.startup, None);
    }

    #[test]
    fn regression_parse_allocate_args_ignores_flag_text_inside_names() {
        let parsed = parse_allocate_args("Ada --startupish --startup Pulse").expect("parse");
        assert_eq!(parsed.mentor, "Ada --startupish");
        assert_eq!(parsed.startup, Some("Pulse"));
    }

    #[test]
    fn regression_parse_allocate_args_rejects_missing_values() {
        assert_eq!(
            parse_allocate_args("Ada --startup").expect_err("missing startup"),
            "missing value for --startup"
        );
        assert_eq!(
            parse_allocate_args("--startup Pulse").expect_err("missing mentor"),
            "mentor selection is required"
        );
    }

    #[test]
    fn unit_take_json_flag_detects_flag_position() {
        assert_eq!(take_json_flag("--json"), ("", true));
        assert_eq!(take_json_flag("Ada --json"), ("Ada", true));
        assert_eq!(take_json_flag("--json Ada"), ("Ada", true));
        assert_eq!(take_json_flag("Ada--json"), ("Ada--json", false));
    }

    #[test]
    fn functional_render_help_overview_lists_usage_and_descriptions() {
        let output = render_help_overview(TEST_SPECS);
        assert!(output.contains("commands:"));
        assert!(output.contains("/generate"));
        assert!(output.contains("Auto-assign idle mentors"));
    }

    #[test]
    fn integration_render_command_help_normalizes_topic_and_supports_exit_alias() {
        let output = render_command_help("exit", TEST_SPECS).expect("help should render");
        assert!(output.contains("command: /quit"));
        assert!(output.contains("Alias: /exit"));
    }

    #[test]
    fn regression_unknown_command_message_only_suggests_for_close_match() {
        let close = unknown_command_message("/generat", TEST_NAMES);
        assert!(close.contains("did you mean /generate?"));

        let far = unknown_command_message("/zzzzzzzz", TEST_NAMES);
        assert!(!far.contains("did you mean"));
    }
}
