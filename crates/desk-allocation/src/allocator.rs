use desk_core::{Session, Startup};
use desk_roster::Roster;
use serde::Serialize;
use tracing::debug;

use crate::{AllocationRegistry, AllocationWarning, RandomSource};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Which startups are excluded besides the mentor's own assigned set.
pub enum ExclusionPolicy {
    #[default]
    PerMentor,
    /// Also exclude startups in another mentor's live session.
    SkipBusy,
}

impl ExclusionPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PerMentor => "per-mentor",
            Self::SkipBusy => "skip-busy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationRequest<'a> {
    pub mentor: &'a str,
    pub startup: Option<&'a str>,
}

impl<'a> AllocationRequest<'a> {
    pub fn auto(mentor: &'a str) -> Self {
        Self {
            mentor,
            startup: None,
        }
    }

    pub fn manual(mentor: &'a str, startup: &'a str) -> Self {
        Self {
            mentor,
            startup: Some(startup),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Result of one bulk generation sweep.
pub struct GenerateReport {
    pub created: Vec<(String, Session)>,
    pub already_in_session: usize,
    pub warnings: Vec<AllocationWarning>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    Started(Session),
    Ended(Session),
}

#[derive(Debug, Clone, Copy, Default)]
/// Single-pick startup selector. Holds no state besides its policy.
pub struct Allocator {
    policy: ExclusionPolicy,
}

impl Allocator {
    pub fn new(policy: ExclusionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ExclusionPolicy {
        self.policy
    }

    /// Startups auto mode may pick for `mentor`, in roster order.
    pub fn eligible_startups<'r>(
        &self,
        roster: &'r Roster,
        registry: &AllocationRegistry,
        mentor: &str,
    ) -> Result<Vec<&'r Startup>, AllocationWarning> {
        let Some(record) = roster.mentor(mentor) else {
            return Err(AllocationWarning::UnknownMentor {
                mentor: mentor.to_string(),
            });
        };

        let eligible = roster
            .startups()
            .iter()
            .filter(|startup| !registry.is_assigned_to(mentor, &startup.name))
            .filter(|startup| record.preference.admits(&startup.sector))
            .filter(|startup| !self.is_busy_elsewhere(registry, mentor, &startup.name))
            .collect::<Vec<_>>();
        debug!(
            mentor,
            eligible = eligible.len(),
            policy = self.policy.as_str(),
            "eligible startups computed"
        );
        Ok(eligible)
    }

    /// Selects a startup for the request and commits it to the registry.
    pub fn allocate(
        &self,
        roster: &Roster,
        registry: &mut AllocationRegistry,
        request: AllocationRequest<'_>,
        random: &mut dyn RandomSource,
        now_unix_ms: u64,
    ) -> Result<Session, AllocationWarning> {
        let selected = match request.startup {
            Some(startup) => self.check_manual(roster, registry, request.mentor, startup),
            None => self.pick_auto(roster, registry, request.mentor, random),
        };
        let startup = selected.inspect_err(|warning| {
            debug!(mentor = request.mentor, code = warning.code(), "allocation rejected");
        })?;
        registry.record_allocation(request.mentor, startup, now_unix_ms)
    }

    /// Auto-allocates for every mentor without a live session, in roster order.
    /// Warnings are collected and do not stop the sweep.
    pub fn generate(
        &self,
        roster: &Roster,
        registry: &mut AllocationRegistry,
        random: &mut dyn RandomSource,
        now_unix_ms: u64,
    ) -> GenerateReport {
        let mut report = GenerateReport::default();
        for mentor in roster.mentors() {
            if registry.session(&mentor.name).is_some() {
                report.already_in_session += 1;
                continue;
            }
            match self.allocate(
                roster,
                registry,
                AllocationRequest::auto(&mentor.name),
                random,
                now_unix_ms,
            ) {
                Ok(session) => report.created.push((mentor.name.clone(), session)),
                Err(warning) => report.warnings.push(warning),
            }
        }
        report
    }

    /// Panel button: start an auto-allocated session, or end the live one.
    pub fn toggle(
        &self,
        roster: &Roster,
        registry: &mut AllocationRegistry,
        mentor: &str,
        random: &mut dyn RandomSource,
        now_unix_ms: u64,
    ) -> Result<ToggleOutcome, AllocationWarning> {
        if registry.session(mentor).is_some() {
            return registry.end_session(mentor).map(ToggleOutcome::Ended);
        }
        self.allocate(
            roster,
            registry,
            AllocationRequest::auto(mentor),
            random,
            now_unix_ms,
        )
        .map(ToggleOutcome::Started)
    }

    fn check_manual<'r>(
        &self,
        roster: &'r Roster,
        registry: &AllocationRegistry,
        mentor: &str,
        startup: &str,
    ) -> Result<&'r Startup, AllocationWarning> {
        if roster.mentor(mentor).is_none() {
            return Err(AllocationWarning::UnknownMentor {
                mentor: mentor.to_string(),
            });
        }
        let Some(record) = roster.startup(startup) else {
            return Err(AllocationWarning::StartupNotFound {
                startup: startup.to_string(),
            });
        };
        if registry.is_assigned_to(mentor, &record.name) {
            return Err(AllocationWarning::AlreadyAssigned {
                mentor: mentor.to_string(),
                startup: record.name.clone(),
            });
        }
        if self.policy == ExclusionPolicy::SkipBusy {
            if let Some(busy_with) = registry.busy_mentor_for(&record.name) {
                if busy_with != mentor {
                    return Err(AllocationWarning::StartupBusy {
                        startup: record.name.clone(),
                        mentor: busy_with.to_string(),
                    });
                }
            }
        }
        Ok(record)
    }

    fn pick_auto<'r>(
        &self,
        roster: &'r Roster,
        registry: &AllocationRegistry,
        mentor: &str,
        random: &mut dyn RandomSource,
    ) -> Result<&'r Startup, AllocationWarning> {
        let eligible = self.eligible_startups(roster, registry, mentor)?;
        if eligible.is_empty() {
            return Err(AllocationWarning::NoneAvailable {
                mentor: mentor.to_string(),
            });
        }
        let pick = random.pick_index(eligible.len()).min(eligible.len() - 1);
        Ok(eligible[pick])
    }

    fn is_busy_elsewhere(
        &self,
        registry: &AllocationRegistry,
        mentor: &str,
        startup: &str,
    ) -> bool {
        self.policy == ExclusionPolicy::SkipBusy
            && registry
                .busy_mentor_for(startup)
                .is_some_and(|busy_with| busy_with != mentor)
    }
}
