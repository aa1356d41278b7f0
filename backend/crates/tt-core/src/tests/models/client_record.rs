use crate::ClientDirectory;

use serde_json::json;

#[test]
fn test_serialized_record_keeps_camel_case_and_string_tax_year() {
    let directory = ClientDirectory::default();
    let json = serde_json::to_value(&directory.all()[0]).unwrap();

    assert_eq!(
        json,
        json!({
            "id": "1",
            "clientName": "John Smith",
            "propertyAddress": "123 Main St, Chicago, IL 60601",
            "taxYear": "2024",
            "status": "Active",
        })
    );
}

#[test]
fn test_tax_year_stays_numeric_in_memory() {
    let directory = ClientDirectory::default();

    assert!(directory.all().iter().all(|record| record.tax_year >= 2023));
}
