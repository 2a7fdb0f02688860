use desk_core::{Mentor, Startup};

use crate::Roster;

/// Strips a select-box label down to the record name: `Ada (Pref: …)` → `Ada`.
pub fn selection_name(raw: &str) -> &str {
    let trimmed = raw.trim();
    match trimmed.split_once(" (") {
        Some((name, _)) => name.trim_end(),
        None => trimmed,
    }
}

/// Roster list a selection is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionTarget {
    Mentor,
    Startup,
}

fn parse_list_number(raw: &str) -> Option<usize> {
    raw.strip_prefix('#')?
        .parse::<usize>()
        .ok()
        .filter(|value| *value > 0)
}

impl Roster {
    /// Resolves `#N` (1-based position in the display order), an exact name, a
    /// select-box label, or a case-insensitive name.
    pub fn resolve_mentor(&self, raw: &str) -> Option<&Mentor> {
        let raw = raw.trim();
        if let Some(number) = parse_list_number(raw) {
            return self.mentors_in_display_order().get(number - 1).copied();
        }
        let name = selection_name(raw);
        self.mentor(name).or_else(|| {
            self.mentors()
                .iter()
                .find(|mentor| mentor.name.eq_ignore_ascii_case(name))
        })
    }

    pub fn resolve_startup(&self, raw: &str) -> Option<&Startup> {
        let raw = raw.trim();
        if let Some(number) = parse_list_number(raw) {
            return self.startups_in_display_order().get(number - 1).copied();
        }
        let name = selection_name(raw);
        self.startup(name).or_else(|| {
            self.startups()
                .iter()
                .find(|startup| startup.name.eq_ignore_ascii_case(name))
        })
    }

    /// Canonical record name for a selection, or the stripped input when
    /// nothing matches so the caller can report it.
    pub fn selected_name(&self, target: SelectionTarget, raw: &str) -> String {
        let resolved = match target {
            SelectionTarget::Mentor => self.resolve_mentor(raw).map(|mentor| mentor.name.as_str()),
            SelectionTarget::Startup => self
                .resolve_startup(raw)
                .map(|startup| startup.name.as_str()),
        };
        resolved.unwrap_or_else(|| selection_name(raw)).to_string()
    }

    /// Numbered select-box options for `target`, in display order.
    pub fn option_labels(&self, target: SelectionTarget) -> Vec<String> {
        let labels = match target {
            SelectionTarget::Mentor => self
                .mentors_in_display_order()
                .into_iter()
                .map(Mentor::option_label)
                .collect::<Vec<_>>(),
            SelectionTarget::Startup => self
                .startups_in_display_order()
                .into_iter()
                .map(Startup::option_label)
                .collect::<Vec<_>>(),
        };
        labels
            .into_iter()
            .enumerate()
            .map(|(position, label)| format!("#{:<3} {label}", position + 1))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use desk_core::{Mentor, SectorPreference, Startup};

    use super::{selection_name, SelectionTarget};
    use crate::Roster;

    fn sample_roster() -> Roster {
        Roster::new(
            vec![
                Mentor::new("Ada Lovelace", SectorPreference::from_cells(["FinTech"])),
                Mentor::new("Grace Hopper", SectorPreference::Agnostic),
            ],
            vec![
                Startup::new("Ledgerly", "FinTech", "hi@ledgerly.io"),
                Startup::new("Pulse", "HealthTech", "team@pulse.health"),
            ],
        )
    }

    #[test]
    fn unit_selection_name_strips_label_suffix() {
        assert_eq!(selection_name("Ada Lovelace (Pref: FinTech)"), "Ada Lovelace");
        assert_eq!(selection_name("  Pulse  "), "Pulse");
    }

    #[test]
    fn functional_resolve_mentor_accepts_number_label_and_case() {
        let roster = sample_roster();
        let by_number = roster.resolve_mentor("#2").expect("by number");
        assert_eq!(by_number.name, "Grace Hopper");
        let by_label = roster
            .resolve_mentor("Ada Lovelace (Pref: FinTech)")
            .expect("by label");
        assert_eq!(by_label.name, "Ada Lovelace");
        let by_case = roster.resolve_mentor("grace hopper").expect("by case");
        assert_eq!(by_case.name, "Grace Hopper");
    }

    #[test]
    fn regression_resolve_rejects_zero_and_out_of_range_numbers() {
        let roster = sample_roster();
        assert!(roster.resolve_startup("#0").is_none());
        assert!(roster.resolve_startup("#3").is_none());
    }

    #[test]
    fn functional_selected_name_falls_back_to_stripped_input() {
        let roster = sample_roster();
        assert_eq!(
            roster.selected_name(SelectionTarget::Startup, "pulse"),
            "Pulse"
        );
        assert_eq!(
            roster.selected_name(SelectionTarget::Startup, "Ghost (Sector: X)"),
            "Ghost"
        );
    }

    #[test]
    fn unit_option_labels_are_numbered_from_one() {
        let roster = sample_roster();
        let labels = roster.option_labels(SelectionTarget::Startup);
        assert_eq!(labels[0], "#1   Ledgerly (Sector: FinTech)");
        assert_eq!(labels[1], "#2   Pulse (Sector: HealthTech)");
    }

    #[test]
    fn regression_list_numbers_follow_index_column_not_source_order() {
        let mut second = Startup::new("Ledgerly", "FinTech", "");
        second.index = Some(2);
        let mut first = Startup::new("Pulse", "HealthTech", "");
        first.index = Some(1);
        let roster = Roster::new(Vec::new(), vec![second, first]);

        let labels = roster.option_labels(SelectionTarget::Startup);
        assert_eq!(labels[0], "#1   Pulse (Sector: HealthTech)");
        assert_eq!(labels[1], "#2   Ledgerly (Sector: FinTech)");
        assert_eq!(
            roster.resolve_startup("#1").map(|startup| startup.name.as_str()),
            Some("Pulse")
        );
    }
}
