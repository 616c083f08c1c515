//! Response payloads served by the mock registry.
//!
//! These mirror the registry's wire format but are defined independently of
//! the client crate, so integration tests catch schema drift.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Date with a recorded fixture payload.
pub const FIXTURE_DATE: &str = "2001-05-18";

/// Verbatim body served for `FIXTURE_DATE`.
pub const FIXTURE_BODY: &str = include_str!("../fixtures/2001-05-18.json");

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Envelope {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Vec<Action>>,
    #[serde(rename = "errorMessage", skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl Envelope {
    pub fn success(result: Vec<Action>) -> Self {
        Self {
            status: "Success".to_string(),
            result: Some(result),
            error_message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: "Failed".to_string(),
            result: None,
            error_message: Some(message.into()),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub action_type: String,
    pub completed_time: String,
    pub certificate_ranges: Vec<CertificateRange>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRange {
    pub certificate_type: String,
    pub registered_person_number: i64,
    pub accreditation_code: String,
    pub generation_year: i32,
    pub generation_state: String,
    pub start_serial_number: i64,
    pub end_serial_number: i64,
    pub fuel_source: String,
    pub owner_account: String,
    #[serde(rename = "ownerAccountID")]
    pub owner_account_id: i64,
    pub status: String,
}

/// Deterministic single-action payload for a date without a fixture.
///
/// The action completes on `date` and its serial range is derived from the
/// day number, so responses for different dates never overlap.
pub fn synthesize(date: NaiveDate) -> Vec<Action> {
    let start = i64::from(date.num_days_from_ce()) * 1000;
    vec![Action {
        action_type: "Certificate Transfer".to_string(),
        completed_time: format!("{date}T09:30:00.000+10:00"),
        certificate_ranges: vec![CertificateRange {
            certificate_type: "LGC".to_string(),
            registered_person_number: 5001,
            accreditation_code: "SRPVNSW0001".to_string(),
            generation_year: date.year(),
            generation_state: "NSW".to_string(),
            start_serial_number: start,
            end_serial_number: start + 999,
            fuel_source: "Solar".to_string(),
            owner_account: "Mock Energy Trading".to_string(),
            owner_account_id: 7002,
            status: "Registered".to_string(),
        }],
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_has_four_actions() {
        let envelope: Envelope = serde_json::from_str(FIXTURE_BODY).unwrap();
        assert_eq!(envelope.status, "Success");
        assert_eq!(envelope.result.unwrap().len(), 4);
    }

    #[test]
    fn failed_envelope_omits_result() {
        let json = serde_json::to_value(Envelope::failed("bad date")).unwrap();
        assert_eq!(json["status"], "Failed");
        assert_eq!(json["errorMessage"], "bad date");
        assert!(json.get("result").is_none());
    }

    #[test]
    fn synthesized_action_lands_on_the_requested_date() {
        let date = NaiveDate::from_ymd_opt(2012, 3, 4).unwrap();
        let actions = synthesize(date);
        assert_eq!(actions.len(), 1);
        assert!(actions[0].completed_time.starts_with("2012-03-04T"));
        let range = &actions[0].certificate_ranges[0];
        assert_eq!(range.generation_year, 2012);
        assert!(range.start_serial_number <= range.end_serial_number);
    }

    #[test]
    fn range_uses_registry_field_names() {
        let json = serde_json::to_value(&synthesize(NaiveDate::from_ymd_opt(2012, 3, 4).unwrap())[0]).unwrap();
        let range = &json["certificateRanges"][0];
        assert!(range.get("ownerAccountID").is_some());
        assert!(range.get("registeredPersonNumber").is_some());
        assert!(json.get("completedTime").is_some());
    }
}
