use crate::CommandSpec;

pub const ALLOCATE_USAGE: &str = "/allocate <mentor> [--startup <startup>]";

pub const COMMAND_SPECS: &[CommandSpec] = &[
    CommandSpec {
        name: "/help",
        usage: "/help [command]",
        description: "Show command list or detailed command help",
        details: "Use '/help /command' (or '/help command') for command-specific guidance.",
        example: "/help /allocate",
    },
    CommandSpec {
        name: "/board",
        usage: "/board",
        description: "Render every mentor panel with its session and button",
        details: "Read-only. The board is also re-rendered after any command that changes it.",
        example: "/board",
    },
    CommandSpec {
        name: "/mentors",
        usage: "/mentors",
        description: "List mentor selections with their sector preferences",
        details: "Numbers can be used as selections, e.g. '#2'.",
        example: "/mentors",
    },
    CommandSpec {
        name: "/startups",
        usage: "/startups",
        description: "List startup selections with their sectors",
        details: "Numbers can be used as selections, e.g. '#3'.",
        example: "/startups",
    },
    CommandSpec {
        name: "/allocate",
        usage: ALLOCATE_USAGE,
        description: "Allocate a startup to a mentor (manual with --startup, otherwise auto)",
        details:
            "Manual allocation fails if the startup does not exist or was already assigned to the mentor. Auto allocation samples a startup matching the mentor's sectors or 'Other'. Selections accept a name, a list label, or '#N'.",
        example: "/allocate Ada Lovelace --startup Ledgerly",
    },
    CommandSpec {
        name: "/generate",
        usage: "/generate",
        description: "Auto-allocate every mentor without a live session",
        details: "Mentors with no eligible startup are reported and left waiting.",
        example: "/generate",
    },
    CommandSpec {
        name: "/toggle",
        usage: "/toggle <mentor>",
        description: "Press the mentor's Create New Session / End Session button",
        details: "Starts an auto-allocated session when waiting; ends the live session otherwise.",
        example: "/toggle #1",
    },
    CommandSpec {
        name: "/end",
        usage: "/end <mentor>",
        description: "End the mentor's live session",
        details: "Other mentors are not affected. The pairing stays on record and is not offered again.",
        example: "/end Ada Lovelace",
    },
    CommandSpec {
        name: "/eligible",
        usage: "/eligible <mentor>",
        description: "Show the startups auto allocation could pick for a mentor",
        details: "Read-only; applies the same filters as auto allocation.",
        example: "/eligible Grace Hopper",
    },
    CommandSpec {
        name: "/status",
        usage: "/status [--json]",
        description: "Summarize sessions, pairings, and assigned startups",
        details: "Add --json for machine-readable output.",
        example: "/status --json",
    },
    CommandSpec {
        name: "/quit",
        usage: "/quit",
        description: "Exit the desk",
        details: "Alias: /exit",
        example: "/quit",
    },
];

pub const COMMAND_NAMES: &[&str] = &[
    "/help",
    "/board",
    "/mentors",
    "/startups",
    "/allocate",
    "/generate",
    "/toggle",
    "/end",
    "/eligible",
    "/status",
    "/quit",
    "/exit",
];

pub fn render_help_overview() -> String {
    crate::render_help_overview(COMMAND_SPECS)
}

pub fn render_command_help(topic: &str) -> Option<String> {
    crate::render_command_help(topic, COMMAND_SPECS)
}

pub fn unknown_help_topic_message(topic: &str) -> String {
    crate::unknown_help_topic_message(topic, COMMAND_NAMES)
}

pub fn unknown_command_message(command: &str) -> String {
    crate::unknown_command_message(command, COMMAND_NAMES)
}
