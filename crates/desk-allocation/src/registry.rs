use std::collections::{BTreeMap, BTreeSet, HashMap};

use desk_core::{MentorStatus, Session, Startup};
use desk_roster::Roster;
use serde::Serialize;
use tracing::info;

use crate::AllocationWarning;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
/// Counts shown by the status view.
pub struct RegistrySummary {
    pub mentors: usize,
    pub in_session: usize,
    pub awaiting_session: usize,
    pub startups_assigned: usize,
    pub pairings: usize,
    pub revision: u64,
}

#[derive(Debug, Clone, Default)]
/// Mutable event state: live sessions plus assignment history.
///
/// Mentor status is derived from session presence, so it cannot drift from it.
/// Assigned sets only grow; ending a session keeps the pairing on record.
pub struct AllocationRegistry {
    sessions: BTreeMap<String, Session>,
    mentor_assignments: HashMap<String, BTreeSet<String>>,
    startups_assigned: BTreeSet<String>,
    revision: u64,
}

impl AllocationRegistry {
    pub fn new<I, S>(mentor_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mentor_assignments: mentor_names
                .into_iter()
                .map(|name| (name.into(), BTreeSet::new()))
                .collect(),
            ..Self::default()
        }
    }

    pub fn for_roster(roster: &Roster) -> Self {
        Self::new(roster.mentor_names())
    }

    pub fn knows_mentor(&self, mentor: &str) -> bool {
        self.mentor_assignments.contains_key(mentor)
    }

    pub fn session(&self, mentor: &str) -> Option<&Session> {
        self.sessions.get(mentor)
    }

    /// Live sessions keyed by mentor name, in name order.
    pub fn sessions(&self) -> impl Iterator<Item = (&str, &Session)> {
        self.sessions
            .iter()
            .map(|(mentor, session)| (mentor.as_str(), session))
    }

    pub fn status(&self, mentor: &str) -> MentorStatus {
        if self.sessions.contains_key(mentor) {
            MentorStatus::InSession
        } else {
            MentorStatus::AwaitingSession
        }
    }

    pub fn assigned_to(&self, mentor: &str) -> Option<&BTreeSet<String>> {
        self.mentor_assignments.get(mentor)
    }

    pub fn is_assigned_to(&self, mentor: &str, startup: &str) -> bool {
        self.mentor_assignments
            .get(mentor)
            .is_some_and(|assigned| assigned.contains(startup))
    }

    /// Every startup handed to any mentor this event.
    pub fn assigned_startups(&self) -> &BTreeSet<String> {
        &self.startups_assigned
    }

    /// Mentor currently in a live session with `startup`, if any.
    pub fn busy_mentor_for(&self, startup: &str) -> Option<&str> {
        self.sessions
            .iter()
            .find(|(_, session)| session.startup == startup)
            .map(|(mentor, _)| mentor.as_str())
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Commits a pairing: writes the session and records the startup in the
    /// mentor's and the global assigned sets. A live session for the mentor is
    /// replaced.
    pub fn record_allocation(
        &mut self,
        mentor: &str,
        startup: &Startup,
        allocated_at_unix_ms: u64,
    ) -> Result<Session, AllocationWarning> {
        let Some(assigned) = self.mentor_assignments.get_mut(mentor) else {
            return Err(AllocationWarning::UnknownMentor {
                mentor: mentor.to_string(),
            });
        };
        assigned.insert(startup.name.clone());
        self.startups_assigned.insert(startup.name.clone());

        let session = Session::for_startup(startup, allocated_at_unix_ms);
        if let Some(replaced) = self.sessions.insert(mentor.to_string(), session.clone()) {
            info!(
                mentor,
                replaced = %replaced.startup,
                startup = %session.startup,
                "live session replaced"
            );
        } else {
            info!(mentor, startup = %session.startup, "session started");
        }
        self.revision += 1;
        Ok(session)
    }

    /// Removes exactly this mentor's live session.
    pub fn end_session(&mut self, mentor: &str) -> Result<Session, AllocationWarning> {
        if !self.knows_mentor(mentor) {
            return Err(AllocationWarning::UnknownMentor {
                mentor: mentor.to_string(),
            });
        }
        let session =
            self.sessions
                .remove(mentor)
                .ok_or_else(|| AllocationWarning::NoActiveSession {
                    mentor: mentor.to_string(),
                })?;
        info!(mentor, startup = %session.startup, "session ended");
        self.revision += 1;
        Ok(session)
    }

    pub fn summary(&self) -> RegistrySummary {
        let mentors = self.mentor_assignments.len();
        let in_session = self.sessions.len();
        RegistrySummary {
            mentors,
            in_session,
            awaiting_session: mentors.saturating_sub(in_session),
            startups_assigned: self.startups_assigned.len(),
            pairings: self.mentor_assignments.values().map(BTreeSet::len).sum(),
            revision: self.revision,
        }
    }
}
