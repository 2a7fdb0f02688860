//! Foundational domain records shared across Mentor Desk crates.
//!
//! Provides the mentor/startup/session records, sector preference rules, and
//! time utilities used by roster loading, allocation, and board rendering.

pub mod records;
pub mod sector;
pub mod time_utils;

pub use records::{Mentor, MentorStatus, Session, Startup};
pub use sector::{Sector, SectorPreference, AGNOSTIC_SECTOR, OTHER_SECTOR};
pub use time_utils::{
    current_unix_timestamp_ms, format_time_of_day, format_time_of_day_in, TIME_OF_DAY_FORMAT,
};
