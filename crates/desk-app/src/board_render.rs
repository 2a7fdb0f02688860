use desk_allocation::{AllocationWarning, GenerateReport, RegistrySummary};
use desk_core::{format_time_of_day, Mentor, Session, Startup};
use serde::Serialize;

use crate::app_state::AppState;

const BOARD_TITLE: &str = "Mentoring Session Scheduler";

pub(crate) fn render_board(state: &AppState) -> String {
    let mut lines = vec![BOARD_TITLE.to_string(), "=".repeat(BOARD_TITLE.len())];
    let mentors = state.roster.mentors_in_display_order();
    if mentors.is_empty() {
        lines.push("no mentors loaded".to_string());
    }
    for mentor in mentors {
        lines.extend(render_mentor_panel(state, mentor));
    }
    lines.join("\n")
}

fn render_mentor_panel(state: &AppState, mentor: &Mentor) -> Vec<String> {
    let mut lines = vec![format!(
        "Mentor: {} (Pref: {})",
        mentor.name,
        mentor.preference.label()
    )];
    if let Some(session) = state.registry.session(&mentor.name) {
        lines.push(format!("  {}", render_session_line(session)));
    }
    lines.push(format!(
        "  [{}]",
        state.registry.status(&mentor.name).button_label()
    ));
    lines
}

pub(crate) fn render_session_line(session: &Session) -> String {
    format!(
        "Startup: {} | Sector: {} | Contacts: {} | Time: {}",
        session.startup,
        session.sector,
        session.contacts,
        format_time_of_day(session.allocated_at_unix_ms)
    )
}

pub(crate) fn render_allocated(mentor: &str, session: &Session) -> String {
    format!(
        "allocated: mentor={} startup={} sector={}",
        mentor, session.startup, session.sector
    )
}

pub(crate) fn render_ended(mentor: &str, session: &Session) -> String {
    format!("session ended: mentor={} startup={}", mentor, session.startup)
}

pub(crate) fn render_warning(warning: &AllocationWarning) -> String {
    format!("warning: {warning}")
}

pub(crate) fn render_generate_report(report: &GenerateReport) -> String {
    let mut lines = report
        .created
        .iter()
        .map(|(mentor, session)| render_allocated(mentor, session))
        .collect::<Vec<_>>();
    lines.extend(report.warnings.iter().map(render_warning));
    if report.warnings.is_empty() {
        lines.push("All mentors have been assigned startups!".to_string());
    } else {
        lines.push(format!(
            "generate summary: created={} already_in_session={} still_waiting={}",
            report.created.len(),
            report.already_in_session,
            report.warnings.len()
        ));
    }
    lines.join("\n")
}

pub(crate) fn render_option_list(heading: &str, labels: &[String]) -> String {
    let mut lines = vec![format!("{heading}:")];
    if labels.is_empty() {
        lines.push("  none".to_string());
    }
    lines.extend(labels.iter().map(|label| format!("  {label}")));
    lines.join("\n")
}

pub(crate) fn render_eligible(mentor: &str, eligible: &[&Startup]) -> String {
    let labels = eligible
        .iter()
        .map(|startup| startup.option_label())
        .collect::<Vec<_>>();
    render_option_list(
        &format!("eligible for {mentor} ({})", eligible.len()),
        &labels,
    )
}

#[derive(Debug, Serialize)]
struct StatusReport<'a> {
    policy: &'static str,
    summary: RegistrySummary,
    sessions: Vec<StatusSession<'a>>,
    startups_assigned: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
struct StatusSession<'a> {
    mentor: &'a str,
    #[serde(flatten)]
    session: &'a Session,
}

pub(crate) fn render_status(state: &AppState, json: bool) -> serde_json::Result<String> {
    let summary = state.registry.summary();
    if json {
        let report = StatusReport {
            policy: state.allocator.policy().as_str(),
            summary,
            sessions: state
                .registry
                .sessions()
                .map(|(mentor, session)| StatusSession { mentor, session })
                .collect(),
            startups_assigned: state
                .registry
                .assigned_startups()
                .iter()
                .map(String::as_str)
                .collect(),
        };
        return serde_json::to_string_pretty(&report);
    }

    Ok(format!(
        "status: mentors={} in_session={} awaiting_session={} pairings={} startups_assigned={} policy={} revision={}",
        summary.mentors,
        summary.in_session,
        summary.awaiting_session,
        summary.pairings,
        summary.startups_assigned,
        state.allocator.policy().as_str(),
        summary.revision
    ))
}
