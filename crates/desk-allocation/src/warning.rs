use thiserror::Error;

/// Recoverable, user-visible notice. Returning one never mutates the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationWarning {
    #[error("unknown mentor '{mentor}'")]
    UnknownMentor { mentor: String },
    #[error("invalid selection: startup '{startup}' does not exist")]
    StartupNotFound { startup: String },
    #[error("startup '{startup}' is already assigned to mentor '{mentor}'")]
    AlreadyAssigned { mentor: String, startup: String },
    #[error("startup '{startup}' is in a live session with mentor '{mentor}'")]
    StartupBusy { startup: String, mentor: String },
    #[error("no available startups for {mentor}")]
    NoneAvailable { mentor: String },
    #[error("mentor '{mentor}' has no active session")]
    NoActiveSession { mentor: String },
}

impl AllocationWarning {
    /// Stable short code used in command-file reports and JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownMentor { .. } => "unknown_mentor",
            Self::StartupNotFound { .. } => "startup_not_found",
            Self::AlreadyAssigned { .. } => "already_assigned",
            Self::StartupBusy { .. } => "startup_busy",
            Self::NoneAvailable { .. } => "none_available",
            Self::NoActiveSession { .. } => "no_active_session",
        }
    }
}
