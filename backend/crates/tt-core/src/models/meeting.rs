use crate::MeetingStatus;

use chrono::{NaiveDate, NaiveTime};
use serde::{Serialize, Serializer};

const TIME_FORMAT: &str = "%-I:%M %p";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meeting {
    pub id: String,
    pub subject: String,
    pub client: String,
    pub date: NaiveDate,
    #[serde(serialize_with = "serialize_wall_clock")]
    pub time: NaiveTime,
    pub status: MeetingStatus,
}

impl Meeting {
    /// Wall-clock time the way the office writes it, e.g. `2:30 PM`.
    pub fn display_time(&self) -> String {
        self.time.format(TIME_FORMAT).to_string()
    }
}

fn serialize_wall_clock<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&time.format(TIME_FORMAT))
}
