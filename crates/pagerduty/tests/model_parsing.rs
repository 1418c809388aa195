//! Integration tests for parsing PagerDuty response envelopes.
//!
//! These tests validate that the models deserialize realistic API payloads
//! once the resource key is taken out of its envelope.

use pagerduty::models::{
    EscalationPolicy, Incident, IncidentStatus, MaintenanceWindow, OnCall, Urgency,
};
use pagerduty_core::connection::unwrap_envelope;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

/// Get the path to the test fixtures directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> Value {
    let fixture_path = fixtures_dir().join(name);
    let raw = fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture at {}: {}",
            fixture_path.display(),
            e
        )
    });
    serde_json::from_str(&raw).unwrap_or_else(|e| panic!("Fixture {name} is not JSON: {e}"))
}

fn envelope<T: DeserializeOwned>(name: &str, key: &str) -> T {
    unwrap_envelope(load_fixture(name), key)
        .unwrap_or_else(|e| panic!("Failed to unwrap `{key}` from {name}: {e}"))
}

#[test]
fn test_incident_list() {
    let incidents: Vec<Incident> = envelope("incidents.json", "incidents");
    assert_eq!(incidents.len(), 2, "Expected 2 incidents in test data");

    let fire = &incidents[0];
    assert_eq!(fire.incident_number, 1234);
    assert_eq!(fire.status, IncidentStatus::Resolved);
    assert_eq!(fire.urgency, Some(Urgency::High));
    assert_eq!(fire.self_url.as_deref(), Some("https://api.pagerduty.com/incidents/PT4KHLK"));
    assert_eq!(fire.assignments[0].assignee.summary.as_deref(), Some("Earline Greenholt"));
    assert_eq!(fire.acknowledgements.len(), 1);
    assert!(fire.priority.is_none());
    assert_eq!(fire.teams[0].kind.as_deref(), Some("team_reference"));
}

#[test]
fn test_incident_with_local_offset() {
    let incidents: Vec<Incident> = envelope("incidents.json", "incidents");
    let disk = &incidents[1];

    assert_eq!(disk.status, IncidentStatus::Triggered);
    assert_eq!(disk.urgency, Some(Urgency::Low));
    assert!(disk.incident_key.is_none());
    assert!(disk.assignments.is_empty());
    assert!(disk.escalation_policy.is_none());
    assert_eq!(disk.created_at.offset().local_minus_utc(), -4 * 3600);
    assert_eq!(disk.created_at.to_rfc3339(), "2015-10-07T09:12:01-04:00");
}

#[test]
fn test_escalation_policy_rules() {
    let policies: Vec<EscalationPolicy> =
        envelope("escalation_policies.json", "escalation_policies");
    let policy = &policies[0];

    assert_eq!(policy.name, "Engineering Escalation Policy");
    assert_eq!(policy.escalation_rules.len(), 2);

    let delays: Vec<u32> = policy
        .escalation_rules
        .iter()
        .map(|rule| rule.escalation_delay_in_minutes)
        .collect();
    assert_eq!(delays, vec![30, 15]);

    let target_kinds: Vec<&str> = policy.escalation_rules[0]
        .targets
        .iter()
        .filter_map(|target| target.kind.as_deref())
        .collect();
    assert_eq!(target_kinds, vec!["user_reference", "schedule_reference"]);
    assert_eq!(policy.on_call_handoff_notifications.as_deref(), Some("if_has_services"));
}

#[test]
fn test_on_calls_with_permanent_coverage() {
    let on_calls: Vec<OnCall> = envelope("oncalls.json", "oncalls");

    let scheduled = &on_calls[0];
    assert_eq!(scheduled.escalation_level, 2);
    assert_eq!(scheduled.schedule.as_ref().map(|s| s.id.as_str()), Some("PI7DH85"));
    assert!(scheduled.start.is_some() && scheduled.end.is_some());

    let permanent = &on_calls[1];
    assert!(permanent.schedule.is_none());
    assert!(permanent.start.is_none());
    assert!(permanent.end.is_none());
}

#[test]
fn test_maintenance_window() {
    let window: MaintenanceWindow = envelope("maintenance_window.json", "maintenance_window");

    assert_eq!(window.sequence_number, Some(1));
    assert_eq!(window.created_by.as_ref().map(|u| u.id.as_str()), Some("PXPGF42"));
    assert_eq!(window.services.len(), 1);
    assert_eq!(window.teams[0].summary.as_deref(), Some("Engineering"));
    assert!(window.end_time > window.start_time);
}

#[test]
fn test_missing_envelope_key() {
    let err = unwrap_envelope::<Vec<Incident>>(load_fixture("oncalls.json"), "incidents")
        .unwrap_err();
    assert!(matches!(err, pagerduty::Error::MissingField(ref key) if key == "incidents"));
}

#[test]
fn test_unknown_incident_status_is_rejected() {
    let mut data = load_fixture("incidents.json");
    data["incidents"][0]["status"] = Value::from("snoozed");
    let err = unwrap_envelope::<Vec<Incident>>(data, "incidents").unwrap_err();
    assert!(matches!(err, pagerduty::Error::ParseError(_)));
}
