//! Canned request bodies and spreadsheets.

use serde_json::{json, Value};

pub const CONTACTS_HEADER: &str = "firstname,lastname,email,phone,company";

pub fn email_request(to: &str) -> Value {
    json!({
        "to": to,
        "subject": "Quarterly update",
        "body": "Numbers are up."
    })
}

pub fn schedule_request(to: &str, schedule_time: &str) -> Value {
    json!({
        "to": to,
        "subject": "Quarterly update",
        "body": "Numbers are up.",
        "schedule_time": schedule_time
    })
}

/// Three contacts with emails and one with a blank email cell.
pub fn contacts_csv() -> String {
    format!(
        "{CONTACTS_HEADER}\n\
         Ada,Lovelace,ada@example.com,555-0100,Engines\n\
         Alan,Turing,,555-0101,Bletchley\n\
         Grace,Hopper,grace@example.com,555-0102,Navy\n\
         Katherine,Johnson,katherine@example.com,555-0103,NASA\n"
    )
}

/// Same contacts without the `phone` column.
pub fn contacts_csv_without_phone() -> String {
    "firstname,lastname,email,company\n\
     Ada,Lovelace,ada@example.com,Engines\n\
     Grace,Hopper,grace@example.com,Navy\n"
        .to_string()
}

/// Workbook whose first sheet has mixed-case, padded headers and three
/// contacts, one with an empty email cell. A second sheet is ignored.
pub const CONTACTS_XLSX: &[u8] = include_bytes!("../fixtures/contacts.xlsx");
