use crate::{MeetingSchedule, MeetingStatus};

#[test]
fn test_search_by_subject() {
    let schedule = MeetingSchedule::default();

    let results = schedule.search("appeal");

    let ids: Vec<&str> = results.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "6"]);
}

#[test]
fn test_search_by_client() {
    let schedule = MeetingSchedule::default();

    let results = schedule.search("wilson");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].subject, "Annual Tax Planning Session");
    assert_eq!(results[0].status, MeetingStatus::Scheduled);
}

#[test]
fn test_blank_query_returns_all_meetings() {
    let schedule = MeetingSchedule::default();
    assert_eq!(schedule.search(" ").len(), schedule.all().len());
}
