use crate::MeetingSchedule;

#[test]
fn test_meeting_time_serializes_as_wall_clock() {
    let schedule = MeetingSchedule::default();
    let consultation = &schedule.all()[1];

    let json = serde_json::to_value(consultation).unwrap();

    assert_eq!(json["time"], "2:30 PM");
    assert_eq!(json["date"], "2024-01-18");
    assert_eq!(json["status"], "Completed");
}

#[test]
fn test_display_time_morning() {
    let schedule = MeetingSchedule::default();
    assert_eq!(schedule.all()[0].display_time(), "10:00 AM");
    assert_eq!(schedule.all()[4].display_time(), "9:00 AM");
}
