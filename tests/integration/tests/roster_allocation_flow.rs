use std::fs;

use anyhow::Result;
use desk_allocation::{
    AllocationRegistry, AllocationRequest, AllocationWarning, Allocator, ExclusionPolicy,
    RngSource, ScriptedSource, ToggleOutcome,
};
use desk_core::MentorStatus;
use desk_roster::{load_roster, Roster, SelectionTarget};
use tempfile::tempdir;

const NOW: u64 = 1_700_000_000_000;

fn load_fixture(mentors: &str, startups: &str) -> Result<Roster> {
    let temp = tempdir()?;
    let mentors_path = temp.path().join("mentors.csv");
    let startups_path = temp.path().join("startups.csv");
    fs::write(&mentors_path, mentors)?;
    fs::write(&startups_path, startups)?;
    load_roster(&mentors_path, &startups_path)
}

fn eligible(allocator: &Allocator, roster: &Roster, registry: &AllocationRegistry) -> Vec<String> {
    allocator
        .eligible_startups(roster, registry, "M")
        .expect("mentor M is known")
        .into_iter()
        .map(|startup| startup.name.clone())
        .collect()
}

#[test]
fn integration_csv_roster_drives_preference_filtered_allocation() {
    let roster = load_fixture(
        "Name,Sector 1,Sector 2,Sector 3,Index\nM,FinTech,,,1\n",
        "Name,Sector,Index,Contacts\nA,FinTech,1,a@x\nB,HealthTech,2,b@x\nC,Other,3,c@x\n",
    )
    .expect("fixture loads");
    let allocator = Allocator::default();
    let mut registry = AllocationRegistry::for_roster(&roster);

    assert_eq!(eligible(&allocator, &roster, &registry), vec!["A", "C"]);

    let mut random = ScriptedSource::new([0]);
    let first = allocator
        .allocate(
            &roster,
            &mut registry,
            AllocationRequest::auto("M"),
            &mut random,
            NOW,
        )
        .expect("first allocation");
    assert_eq!(first.startup, "A");
    assert_eq!(eligible(&allocator, &roster, &registry), vec!["C"]);

    registry.end_session("M").expect("session ends");
    let second = allocator
        .toggle(&roster, &mut registry, "M", &mut random, NOW + 1)
        .expect("toggle starts a session");
    assert!(matches!(second, ToggleOutcome::Started(ref session) if session.startup == "C"));

    registry.end_session("M").expect("session ends");
    let exhausted = allocator
        .toggle(&roster, &mut registry, "M", &mut random, NOW + 2)
        .expect_err("pool exhausted");
    assert_eq!(
        exhausted,
        AllocationWarning::NoneAvailable {
            mentor: "M".to_string()
        }
    );
    assert_eq!(registry.status("M"), MentorStatus::AwaitingSession);
}

#[test]
fn integration_generate_over_csv_roster_reports_waiting_mentors() {
    let roster = load_fixture(
        "Name,Sector 1,Sector 2,Sector 3,Index\nFin,FinTech,,,1\nBio,BioTech,,,2\nAny,,,,3\n",
        "Name,Sector,Index,Contacts\nLedgerly,fintech,1,l@x\n",
    )
    .expect("fixture loads");
    let allocator = Allocator::new(ExclusionPolicy::SkipBusy);
    let mut registry = AllocationRegistry::for_roster(&roster);
    let mut random = RngSource::seeded(11);

    let report = allocator.generate(&roster, &mut registry, &mut random, NOW);

    assert_eq!(report.created.len(), 1);
    assert_eq!(report.created[0].0, "Fin");
    assert_eq!(
        report
            .warnings
            .iter()
            .map(AllocationWarning::code)
            .collect::<Vec<_>>(),
        vec!["none_available", "none_available"]
    );
    assert_eq!(registry.summary().in_session, 1);
    assert_eq!(registry.summary().awaiting_session, 2);
}

#[test]
fn regression_label_selection_resolves_to_csv_record_names() {
    let roster = load_fixture(
        "Name,Sector 1,Sector 2,Sector 3,Index\nAda Lovelace,FinTech,HealthTech,,1\n",
        "Name,Sector,Index,Contacts\nPulse,HealthTech,1,p@x\n",
    )
    .expect("fixture loads");

    assert_eq!(
        roster.selected_name(
            SelectionTarget::Mentor,
            "Ada Lovelace (Pref: FinTech, HealthTech)"
        ),
        "Ada Lovelace"
    );
    assert_eq!(
        roster.selected_name(SelectionTarget::Startup, "Pulse (Sector: HealthTech)"),
        "Pulse"
    );

    let allocator = Allocator::default();
    let mut registry = AllocationRegistry::for_roster(&roster);
    let mut random = ScriptedSource::default();
    let session = allocator
        .allocate(
            &roster,
            &mut registry,
            AllocationRequest::manual("Ada Lovelace", "Pulse"),
            &mut random,
            NOW,
        )
        .expect("manual allocation");
    assert_eq!(session.contacts, "p@x");
    assert!(registry.is_assigned_to("Ada Lovelace", "Pulse"));
}
