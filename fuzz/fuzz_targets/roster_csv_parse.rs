#![no_main]

use desk_roster::{read_mentors_csv, read_startups_csv, Roster};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mentors = read_mentors_csv(data).unwrap_or_default();
    let startups = read_startups_csv(data).unwrap_or_default();
    for mentor in &mentors {
        assert!(!mentor.name.trim().is_empty());
        assert!(mentor.preference.sectors().len() <= 3);
    }
    let parsed_mentors = mentors.len();
    let roster = Roster::new(mentors, startups);
    assert!(roster.mentors().len() <= parsed_mentors);
    for name in roster.mentor_names() {
        assert!(roster.mentor(name).is_some());
    }
});
