//! Immutable mentor/startup roster and its tabular loaders.
//!
//! Mentors and startups are read once from CSV at start-up; afterwards the
//! roster only answers lookups and select-box style queries.

mod csv_source;
mod roster;
mod selection;

pub use csv_source::{load_roster, read_mentors_csv, read_startups_csv};
pub use roster::Roster;
pub use selection::{selection_name, SelectionTarget};
