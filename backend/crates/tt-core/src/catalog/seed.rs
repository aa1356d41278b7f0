//! Seed data for the local catalogs.

use crate::{
    ClientRecord, ClientStatus, DocumentStatus, Meeting, MeetingStatus, SignatureDocument,
};

use chrono::{NaiveDate, NaiveTime};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are valid")
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("seed times are valid")
}

fn client(
    id: &str,
    client_name: &str,
    property_address: &str,
    tax_year: u16,
    status: ClientStatus,
) -> ClientRecord {
    ClientRecord {
        id: id.to_string(),
        client_name: client_name.to_string(),
        property_address: property_address.to_string(),
        tax_year,
        status,
    }
}

#[rustfmt::skip]
pub fn client_records() -> Vec<ClientRecord> {
    use ClientStatus::*;

    vec![
        client("1", "John Smith", "123 Main St, Chicago, IL 60601", 2024, Active),
        client("2", "Sarah Johnson", "456 Oak Ave, Burr Ridge, IL 60527", 2024, Pending),
        client("3", "Michael Brown", "789 Pine Rd, Chicago, IL 60602", 2023, Completed),
        client("4", "Emily Davis", "321 Elm St, Burr Ridge, IL 60527", 2024, Active),
        client("5", "Robert Wilson", "555 Cedar Lane, Chicago, IL 60603", 2024, Pending),
        client("6", "Jennifer Martinez", "777 Maple Drive, Burr Ridge, IL 60527", 2023, Completed),
    ]
}

fn meeting(
    id: &str,
    subject: &str,
    client: &str,
    date: NaiveDate,
    time: NaiveTime,
    status: MeetingStatus,
) -> Meeting {
    Meeting {
        id: id.to_string(),
        subject: subject.to_string(),
        client: client.to_string(),
        date,
        time,
        status,
    }
}

#[rustfmt::skip]
pub fn meetings() -> Vec<Meeting> {
    use MeetingStatus::*;

    vec![
        meeting("1", "Property Tax Assessment Review", "John Smith", date(2024, 1, 15), time(10, 0), Scheduled),
        meeting("2", "Tax Appeal Consultation", "Sarah Johnson", date(2024, 1, 18), time(14, 30), Completed),
        meeting("3", "Property Valuation Discussion", "Michael Brown", date(2024, 1, 22), time(11, 15), Scheduled),
        meeting("4", "Tax Reduction Strategy Meeting", "Emily Davis", date(2024, 1, 25), time(15, 0), Pending),
        meeting("5", "Annual Tax Planning Session", "Robert Wilson", date(2024, 1, 28), time(9, 0), Scheduled),
        meeting("6", "Property Assessment Appeal", "Jennifer Martinez", date(2024, 1, 30), time(13, 45), Pending),
    ]
}

fn document(
    id: &str,
    document_name: &str,
    client: &str,
    property: &str,
    date_created: NaiveDate,
    status: DocumentStatus,
) -> SignatureDocument {
    SignatureDocument {
        id: id.to_string(),
        document_name: document_name.to_string(),
        client: client.to_string(),
        property: property.to_string(),
        date_created,
        status,
    }
}

#[rustfmt::skip]
pub fn signature_documents() -> Vec<SignatureDocument> {
    use DocumentStatus::*;

    vec![
        document("1", "Property Tax Appeal Form - John Smith", "John Smith", "123 Main St, Chicago, IL 60601", date(2024, 1, 10), PendingSignature),
        document("2", "Tax Assessment Agreement - Sarah Johnson", "Sarah Johnson", "456 Oak Ave, Burr Ridge, IL 60527", date(2024, 1, 8), Signed),
        document("3", "Property Valuation Report - Michael Brown", "Michael Brown", "789 Pine Rd, Chicago, IL 60602", date(2024, 1, 12), PendingSignature),
        document("4", "Tax Reduction Contract - Emily Davis", "Emily Davis", "321 Elm St, Burr Ridge, IL 60527", date(2024, 1, 14), Signed),
        document("5", "Annual Tax Review - Robert Wilson", "Robert Wilson", "555 Cedar Lane, Chicago, IL 60603", date(2024, 1, 16), PendingSignature),
        document("6", "Property Assessment Appeal - Jennifer Martinez", "Jennifer Martinez", "777 Maple Drive, Burr Ridge, IL 60527", date(2024, 1, 18), Signed),
    ]
}
