use std::path::Path;

use anyhow::{Context, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
/// One command line from a command file, with its 1-based source line.
pub struct CommandFileEntry {
    pub line_number: usize,
    pub command: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandFileReport {
    pub total: usize,
    pub executed: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub halted_early: bool,
}

pub fn parse_command_file(path: &Path) -> Result<Vec<CommandFileEntry>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read command file {}", path.display()))?;
    Ok(parse_command_lines(&raw))
}

/// Skips blank lines and `#` comments; everything else is kept trimmed.
pub fn parse_command_lines(raw: &str) -> Vec<CommandFileEntry> {
    raw.lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            Some(CommandFileEntry {
                line_number: index + 1,
                command: trimmed.to_string(),
            })
        })
        .collect()
}
