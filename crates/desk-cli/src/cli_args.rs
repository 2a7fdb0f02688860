use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::CliCommandFileErrorMode;

#[derive(Debug, Parser)]
#[command(
    name = "mentor-desk",
    about = "Assign startups to mentors during a live mentoring event",
    version
)]
/// Command-line configuration for the `mentor-desk` binary.
pub struct Cli {
    #[arg(
        long,
        env = "MENTOR_DESK_MENTORS",
        default_value = "mentors.csv",
        help = "Mentors CSV with columns Name, Sector 1, Sector 2, Sector 3, Index"
    )]
    pub mentors: PathBuf,

    #[arg(
        long,
        env = "MENTOR_DESK_STARTUPS",
        default_value = "startups.csv",
        help = "Startups CSV with columns Name, Sector, Index, Contacts"
    )]
    pub startups: PathBuf,

    #[arg(
        long,
        env = "MENTOR_DESK_SEED",
        help = "Seed for startup sampling; identical seeds and commands produce identical boards"
    )]
    pub seed: Option<u64>,

    #[arg(
        long = "skip-busy-startups",
        env = "MENTOR_DESK_SKIP_BUSY_STARTUPS",
        default_value_t = false,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        help = "Never offer a startup that is in another mentor's live session"
    )]
    pub skip_busy_startups: bool,

    #[arg(
        long = "command-file",
        env = "MENTOR_DESK_COMMAND_FILE",
        help = "Run slash commands from this file (one per line, '#' comments) and exit"
    )]
    pub command_file: Option<PathBuf>,

    #[arg(
        long = "command-file-error-mode",
        env = "MENTOR_DESK_COMMAND_FILE_ERROR_MODE",
        value_enum,
        default_value_t = CliCommandFileErrorMode::FailFast,
        requires = "command_file",
        help = "How --command-file reacts to a failing command"
    )]
    pub command_file_error_mode: CliCommandFileErrorMode,

    #[arg(
        long,
        env = "MENTOR_DESK_HISTORY",
        default_value = ".mentor-desk/repl_history.txt",
        help = "Interactive history file"
    )]
    pub history: PathBuf,

    #[arg(
        long = "no-board",
        default_value_t = false,
        help = "Do not re-render the board after commands that change it"
    )]
    pub no_board: bool,
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use super::Cli;
    use crate::CliCommandFileErrorMode;

    #[test]
    fn unit_cli_defaults_are_stable() {
        let cli = Cli::try_parse_from(["mentor-desk"]).expect("defaults parse");
        assert_eq!(cli.mentors, PathBuf::from("mentors.csv"));
        assert_eq!(cli.startups, PathBuf::from("startups.csv"));
        assert_eq!(cli.seed, None);
        assert!(!cli.skip_busy_startups);
        assert!(cli.command_file.is_none());
        assert_eq!(
            cli.command_file_error_mode,
            CliCommandFileErrorMode::FailFast
        );
        assert!(!cli.no_board);
    }

    #[test]
    fn functional_cli_parses_custom_values() {
        let cli = Cli::try_parse_from([
            "mentor-desk",
            "--mentors",
            "day2/mentors.csv",
            "--startups",
            "day2/startups.csv",
            "--seed",
            "42",
            "--skip-busy-startups",
            "--command-file",
            "script.txt",
            "--command-file-error-mode",
            "continue-on-error",
            "--no-board",
        ])
        .expect("custom values parse");
        assert_eq!(cli.mentors, PathBuf::from("day2/mentors.csv"));
        assert_eq!(cli.seed, Some(42));
        assert!(cli.skip_busy_startups);
        assert_eq!(cli.command_file, Some(PathBuf::from("script.txt")));
        assert_eq!(
            cli.command_file_error_mode,
            CliCommandFileErrorMode::ContinueOnError
        );
        assert!(cli.no_board);
    }

    #[test]
    fn regression_cli_error_mode_requires_command_file() {
        let error = Cli::try_parse_from([
            "mentor-desk",
            "--command-file-error-mode",
            "continue-on-error",
        ])
        .expect_err("error mode without command file");
        assert!(error.to_string().contains("--command-file"));
    }

    #[test]
    fn regression_cli_rejects_non_numeric_seed() {
        assert!(Cli::try_parse_from(["mentor-desk", "--seed", "abc"]).is_err());
    }
}
