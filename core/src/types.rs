//! Domain records for the REC Registry certificate-actions API.
//!
//! # Design
//! Field names are idiomatic Rust; `#[serde(rename)]` maps them onto the
//! registry's camelCase wire names. The envelope stays crate-private: callers
//! only ever see the decoded action list or an error.

use chrono::{DateTime, FixedOffset, NaiveDate, ParseResult};
use serde::{Deserialize, Serialize};

/// First date the REC Registry has data for.
pub const FIRST_DATE: &str = "2001-05-18";

/// Calendar date format (`YYYY-MM-DD`) used for the `date` query parameter.
pub const ISO8601_DATE: &str = "%Y-%m-%d";

/// Parse [`FIRST_DATE`] with [`ISO8601_DATE`].
pub fn first_date() -> ParseResult<NaiveDate> {
    NaiveDate::parse_from_str(FIRST_DATE, ISO8601_DATE)
}

/// One completed certificate action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Action {
    /// Kind of action, e.g. "Certificate Transfer". Treated as opaque.
    #[serde(rename = "actionType", default)]
    pub action_type: String,

    /// When the registry finished processing the action.
    #[serde(rename = "completedTime")]
    pub complete_time: DateTime<FixedOffset>,

    /// Certificate ranges involved, in server order.
    #[serde(rename = "certificateRanges", default)]
    pub ranges: Vec<Range>,
}

/// A contiguous block of certificates touched by an action.
///
/// `start <= end` is a registry guarantee and is not re-checked here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Range {
    #[serde(rename = "certificateType")]
    pub certificate_type: String,

    /// Registered person the certificates were created for.
    #[serde(rename = "registeredPersonNumber")]
    pub person_id: i64,

    /// Accreditation code of the generating installation.
    #[serde(rename = "accreditationCode")]
    pub accreditation_code: String,

    #[serde(rename = "generationYear")]
    pub year: i32,

    /// State where the generating system is installed.
    #[serde(rename = "generationState")]
    pub state: String,

    /// First serial number in the range, inclusive.
    #[serde(rename = "startSerialNumber")]
    pub start: i64,

    /// Last serial number in the range, inclusive.
    #[serde(rename = "endSerialNumber")]
    pub end: i64,

    #[serde(rename = "fuelSource")]
    pub fuel_source: String,

    /// Account holding the certificates after the action.
    #[serde(rename = "ownerAccount")]
    pub owner: String,

    #[serde(rename = "ownerAccountID")]
    pub owner_id: i64,

    /// Certificate status after the action.
    pub status: String,
}

/// Top-level wrapper every registry response arrives in.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Envelope {
    pub status: String,
    pub result: Vec<Action>,
    #[serde(rename = "errorMessage")]
    pub error_message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_date_reformats_to_the_same_string() {
        let date = first_date().unwrap();
        assert_eq!(date.format(ISO8601_DATE).to_string(), FIRST_DATE);
    }

    #[test]
    fn range_fills_missing_fields_with_defaults() {
        let range: Range = serde_json::from_str(r#"{"startSerialNumber":5,"endSerialNumber":9}"#).unwrap();
        assert_eq!(range.start, 5);
        assert_eq!(range.end, 9);
        assert!(range.owner.is_empty());
        assert_eq!(range.owner_id, 0);
    }

    #[test]
    fn range_rejects_non_numeric_serial() {
        let result: Result<Range, _> = serde_json::from_str(r#"{"startSerialNumber":"one"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn action_serializes_with_wire_names() {
        let action = Action {
            action_type: "Certificate Transfer".to_string(),
            complete_time: DateTime::parse_from_rfc3339("2001-05-18T10:30:00+10:00").unwrap(),
            ranges: vec![Range {
                certificate_type: "REC".to_string(),
                start: 1,
                end: 10,
                ..Range::default()
            }],
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["actionType"], "Certificate Transfer");
        assert_eq!(json["certificateRanges"][0]["certificateType"], "REC");
        assert_eq!(json["certificateRanges"][0]["endSerialNumber"], 10);
        let back: Action = serde_json::from_value(json).unwrap();
        assert_eq!(back, action);
    }

    #[test]
    fn action_requires_completed_time() {
        let result: Result<Action, _> = serde_json::from_str(r#"{"actionType":"Create"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn envelope_defaults_every_field() {
        let envelope: Envelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.status.is_empty());
        assert!(envelope.result.is_empty());
        assert!(envelope.error_message.is_empty());
    }
}
