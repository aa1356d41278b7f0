use crate::{ClientStatus, MeetingStatus};

use std::str::FromStr;

#[test]
fn test_client_status_as_str() {
    assert_eq!(ClientStatus::Active.as_str(), "Active");
    assert_eq!(ClientStatus::Pending.as_str(), "Pending");
    assert_eq!(ClientStatus::Completed.as_str(), "Completed");
}

#[test]
fn test_client_status_from_str_ignores_case() {
    assert_eq!(
        ClientStatus::from_str("active").unwrap(),
        ClientStatus::Active
    );
    assert_eq!(
        ClientStatus::from_str("Completed").unwrap(),
        ClientStatus::Completed
    );
    assert!(ClientStatus::from_str("archived").is_err());
}

#[test]
fn test_client_status_serializes_as_label() {
    let json = serde_json::to_string(&ClientStatus::Pending).unwrap();
    assert_eq!(json, "\"Pending\"");
}

#[test]
fn test_meeting_status_from_str() {
    assert_eq!(
        MeetingStatus::from_str("scheduled").unwrap(),
        MeetingStatus::Scheduled
    );
    assert!(MeetingStatus::from_str("cancelled").is_err());
}

#[test]
fn test_meeting_status_default() {
    assert_eq!(MeetingStatus::default(), MeetingStatus::Scheduled);
}
