use std::collections::HashMap;

use desk_core::{Mentor, Startup};
use tracing::warn;

#[derive(Debug, Clone, Default)]
/// Mentors and startups for one event, in source order.
pub struct Roster {
    mentors: Vec<Mentor>,
    startups: Vec<Startup>,
    mentor_positions: HashMap<String, usize>,
    startup_positions: HashMap<String, usize>,
}

impl Roster {
    /// Builds a roster, keeping the first record for any duplicated name.
    pub fn new(mentors: Vec<Mentor>, startups: Vec<Startup>) -> Self {
        let mut roster = Self::default();
        for mentor in mentors {
            if roster.mentor_positions.contains_key(&mentor.name) {
                warn!(mentor = %mentor.name, "duplicate mentor row ignored");
                continue;
            }
            roster
                .mentor_positions
                .insert(mentor.name.clone(), roster.mentors.len());
            roster.mentors.push(mentor);
        }
        for startup in startups {
            if roster.startup_positions.contains_key(&startup.name) {
                warn!(startup = %startup.name, "duplicate startup row ignored");
                continue;
            }
            roster
                .startup_positions
                .insert(startup.name.clone(), roster.startups.len());
            roster.startups.push(startup);
        }
        roster
    }

    pub fn mentors(&self) -> &[Mentor] {
        &self.mentors
    }

    pub fn startups(&self) -> &[Startup] {
        &self.startups
    }

    pub fn mentor(&self, name: &str) -> Option<&Mentor> {
        self.mentor_positions
            .get(name)
            .map(|position| &self.mentors[*position])
    }

    pub fn startup(&self, name: &str) -> Option<&Startup> {
        self.startup_positions
            .get(name)
            .map(|position| &self.startups[*position])
    }

    pub fn mentor_names(&self) -> impl Iterator<Item = &str> {
        self.mentors.iter().map(|mentor| mentor.name.as_str())
    }

    /// Mentors as listed to the user: by `Index`, then rows without one in
    /// source order.
    pub fn mentors_in_display_order(&self) -> Vec<&Mentor> {
        display_order(&self.mentors, |mentor| mentor.index)
    }

    pub fn startups_in_display_order(&self) -> Vec<&Startup> {
        display_order(&self.startups, |startup| startup.index)
    }
}

fn display_order<T>(records: &[T], index: impl Fn(&T) -> Option<u32>) -> Vec<&T> {
    let mut ordered = records.iter().collect::<Vec<_>>();
    // Stable, so equal or missing indexes keep source order.
    ordered.sort_by_key(|record| {
        let position = index(*record);
        (position.is_none(), position)
    });
    ordered
}

#[cfg(test)]
mod tests {
    use desk_core::{Mentor, SectorPreference, Startup};

    use super::Roster;

    #[test]
    fn unit_roster_lookup_by_exact_name() {
        let roster = Roster::new(
            vec![Mentor::new("Ada", SectorPreference::Agnostic)],
            vec![Startup::new("Ledgerly", "FinTech", "hi@ledgerly.io")],
        );
        assert!(roster.mentor("Ada").is_some());
        assert!(roster.mentor("ada").is_none());
        assert_eq!(
            roster.startup("Ledgerly").map(|startup| startup.contacts.as_str()),
            Some("hi@ledgerly.io")
        );
    }

    #[test]
    fn regression_roster_keeps_first_duplicate_and_source_order() {
        let roster = Roster::new(
            vec![
                Mentor::new("Ada", SectorPreference::Agnostic),
                Mentor::new("Grace", SectorPreference::from_cells(["EdTech"])),
                Mentor::new("Ada", SectorPreference::from_cells(["FinTech"])),
            ],
            vec![
                Startup::new("Ledgerly", "FinTech", "first"),
                Startup::new("Ledgerly", "Other", "second"),
            ],
        );
        assert_eq!(roster.mentor_names().collect::<Vec<_>>(), vec!["Ada", "Grace"]);
        assert!(roster.mentor("Ada").expect("ada").preference.is_agnostic());
        assert_eq!(roster.startups().len(), 1);
        assert_eq!(roster.startups()[0].contacts, "first");
    }

    #[test]
    fn functional_display_order_follows_index_then_source_order() {
        let mut zed = Mentor::new("Zed", SectorPreference::Agnostic);
        zed.index = Some(2);
        let mut amy = Mentor::new("Amy", SectorPreference::Agnostic);
        amy.index = Some(1);
        let unindexed = Mentor::new("Bo", SectorPreference::Agnostic);
        let mut late = Startup::new("Late", "Other", "");
        late.index = Some(9);
        let early = Startup::new("Early", "Other", "");

        let roster = Roster::new(vec![unindexed, zed, amy], vec![late, early]);

        let mentors = roster
            .mentors_in_display_order()
            .into_iter()
            .map(|mentor| mentor.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(mentors, vec!["Amy", "Zed", "Bo"]);
        let startups = roster
            .startups_in_display_order()
            .into_iter()
            .map(|startup| startup.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(startups, vec!["Late", "Early"]);
        assert_eq!(roster.mentor_names().collect::<Vec<_>>(), vec!["Bo", "Zed", "Amy"]);
    }
}
