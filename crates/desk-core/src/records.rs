use serde::{Deserialize, Serialize};

use crate::sector::{Sector, SectorPreference};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Mentor attending the event. `name` is the unique key.
pub struct Mentor {
    pub name: String,
    pub preference: SectorPreference,
    pub index: Option<u32>,
}

impl Mentor {
    pub fn new(name: impl Into<String>, preference: SectorPreference) -> Self {
        Self {
            name: name.into(),
            preference,
            index: None,
        }
    }

    /// Select-box label, e.g. `Ada (Pref: FinTech, EdTech)`.
    pub fn option_label(&self) -> String {
        format!("{} (Pref: {})", self.name, self.preference.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Startup available for sessions. `name` is the unique key.
pub struct Startup {
    pub name: String,
    pub sector: Sector,
    pub contacts: String,
    pub index: Option<u32>,
}

impl Startup {
    pub fn new(
        name: impl Into<String>,
        sector: impl Into<String>,
        contacts: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            sector: Sector::new(sector),
            contacts: contacts.into(),
            index: None,
        }
    }

    /// Select-box label, e.g. `Ledgerly (Sector: FinTech)`.
    pub fn option_label(&self) -> String {
        format!("{} (Sector: {})", self.name, self.sector)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Live mentor/startup pairing. Never outlives the process.
pub struct Session {
    pub startup: String,
    pub sector: Sector,
    pub contacts: String,
    pub allocated_at_unix_ms: u64,
}

impl Session {
    pub fn for_startup(startup: &Startup, allocated_at_unix_ms: u64) -> Self {
        Self {
            startup: startup.name.clone(),
            sector: startup.sector.clone(),
            contacts: startup.contacts.clone(),
            allocated_at_unix_ms,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Mentor panel status; mirrors whether the mentor has a live session.
pub enum MentorStatus {
    AwaitingSession,
    InSession,
}

impl MentorStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AwaitingSession => "awaiting-session",
            Self::InSession => "in-session",
        }
    }

    /// Label of the panel button that transitions out of this status.
    pub fn button_label(self) -> &'static str {
        match self {
            Self::AwaitingSession => "Create New Session",
            Self::InSession => "End Session",
        }
    }
}
