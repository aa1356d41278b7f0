use crate::Meeting;
use crate::catalog::{filter_by_query, seed};

#[derive(Debug, Clone)]
pub struct MeetingSchedule {
    meetings: Vec<Meeting>,
}

impl Default for MeetingSchedule {
    fn default() -> Self {
        Self::new(seed::meetings())
    }
}

impl MeetingSchedule {
    pub fn new(meetings: Vec<Meeting>) -> Self {
        Self { meetings }
    }

    pub fn all(&self) -> &[Meeting] {
        &self.meetings
    }

    /// Meetings whose subject or client contains `query`.
    pub fn search(&self, query: &str) -> Vec<&Meeting> {
        filter_by_query(&self.meetings, query, |meeting| {
            [meeting.subject.as_str(), meeting.client.as_str()]
        })
    }
}
