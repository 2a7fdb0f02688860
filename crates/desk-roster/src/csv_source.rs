use std::{fs::File, io::Read, path::Path};

use anyhow::{Context, Result};
use desk_core::{Mentor, SectorPreference, Startup};
use serde::Deserialize;
use tracing::{info, warn};

use crate::Roster;

// Row 1 is the header.
const FIRST_DATA_ROW: usize = 2;

#[derive(Debug, Deserialize)]
struct MentorRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Sector 1", default)]
    sector_1: Option<String>,
    #[serde(rename = "Sector 2", default)]
    sector_2: Option<String>,
    #[serde(rename = "Sector 3", default)]
    sector_3: Option<String>,
    #[serde(rename = "Index", default, deserialize_with = "csv::invalid_option")]
    index: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct StartupRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Sector", default)]
    sector: Option<String>,
    #[serde(rename = "Contacts", default)]
    contacts: Option<String>,
    #[serde(rename = "Index", default, deserialize_with = "csv::invalid_option")]
    index: Option<u32>,
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader)
}

/// Reads mentor rows (`Name, Sector 1, Sector 2, Sector 3, Index`).
pub fn read_mentors_csv<R: Read>(reader: R) -> Result<Vec<Mentor>> {
    let mut mentors = Vec::new();
    for (offset, row) in csv_reader(reader).deserialize::<MentorRow>().enumerate() {
        let row_number = offset + FIRST_DATA_ROW;
        let row = row.with_context(|| format!("failed to parse mentor row {row_number}"))?;
        if row.name.trim().is_empty() {
            warn!(row = row_number, "mentor row without a name skipped");
            continue;
        }
        let cells = [row.sector_1, row.sector_2, row.sector_3];
        let preference =
            SectorPreference::from_cells(cells.iter().map(|cell| cell.as_deref().unwrap_or("")));
        let mut mentor = Mentor::new(row.name.trim(), preference);
        mentor.index = row.index;
        mentors.push(mentor);
    }
    Ok(mentors)
}

/// Reads startup rows (`Name, Sector, Index, Contacts`).
pub fn read_startups_csv<R: Read>(reader: R) -> Result<Vec<Startup>> {
    let mut startups = Vec::new();
    for (offset, row) in csv_reader(reader).deserialize::<StartupRow>().enumerate() {
        let row_number = offset + FIRST_DATA_ROW;
        let row = row.with_context(|| format!("failed to parse startup row {row_number}"))?;
        if row.name.trim().is_empty() {
            warn!(row = row_number, "startup row without a name skipped");
            continue;
        }
        let mut startup = Startup::new(
            row.name.trim(),
            row.sector.unwrap_or_default(),
            row.contacts.unwrap_or_default(),
        );
        startup.index = row.index;
        startups.push(startup);
    }
    Ok(startups)
}

pub fn load_roster(mentors_path: &Path, startups_path: &Path) -> Result<Roster> {
    let mentors_file = File::open(mentors_path)
        .with_context(|| format!("failed to open mentors file {}", mentors_path.display()))?;
    let mentors = read_mentors_csv(mentors_file)
        .with_context(|| format!("failed to read mentors file {}", mentors_path.display()))?;

    let startups_file = File::open(startups_path)
        .with_context(|| format!("failed to open startups file {}", startups_path.display()))?;
    let startups = read_startups_csv(startups_file)
        .with_context(|| format!("failed to read startups file {}", startups_path.display()))?;

    let roster = Roster::new(mentors, startups);
    info!(
        mentors = roster.mentors().len(),
        startups = roster.startups().len(),
        "roster loaded"
    );
    Ok(roster)
}
