#![no_main]

use desk_cli::{parse_allocate_args, parse_command, parse_command_lines, take_json_flag};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let raw = String::from_utf8_lossy(data);
    for entry in parse_command_lines(&raw) {
        assert!(entry.line_number >= 1);
        assert!(!entry.command.is_empty());
        if let Some(parsed) = parse_command(&entry.command) {
            assert!(parsed.name.starts_with('/'));
            if let Ok(args) = parse_allocate_args(parsed.args) {
                assert!(!args.mentor.is_empty());
                assert!(args.startup.map_or(true, |startup| !startup.is_empty()));
            }
            let (rest, _) = take_json_flag(parsed.args);
            assert!(rest.len() <= parsed.args.len());
        }
    }
});
