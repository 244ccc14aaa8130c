//! `Planning Center` data types.
//!
//! These types represent the data structures from the `Planning Center` API.
//! The parsers are deliberately lenient: a record that is missing optional
//! attributes still parses, matching how the API omits or nulls fields.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

/// Represents a type of service (e.g., "Sunday Morning")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceType {
    /// Opaque `Planning Center` identifier.
    pub id: String,
    /// Display name of the service type.
    pub name: String,
}

impl ServiceType {
    /// Parse a service type from a `data` array element.
    pub fn from_value(v: &Value) -> Option<Self> {
        let id = v["id"].as_str()?.to_string();
        let name = v["attributes"]["name"].as_str().unwrap_or("Unknown").to_string();
        Some(Self { id, name })
    }
}

/// Represents a specific instance of a service type on a particular date
#[derive(Debug, Clone)]
pub struct PlanSummary {
    /// Opaque `Planning Center` identifier.
    pub id: String,
    /// Calendar date of the plan. Only the date component of `sort_date`
    /// is significant; the time of day is ignored for matching.
    pub date: NaiveDate,
}

impl PlanSummary {
    /// Parse a plan from a `data` array element.
    ///
    /// The `sort_date` attribute is truncated to its first ten characters
    /// (`YYYY-MM-DD`) before parsing, so both date-only and full timestamp
    /// forms are accepted.
    pub fn from_value(v: &Value) -> Option<Self> {
        let id = v["id"].as_str()?.to_string();
        let sort_date = v["attributes"]["sort_date"].as_str()?;
        let date = NaiveDate::parse_from_str(sort_date.get(..10)?, "%Y-%m-%d").ok()?;
        Some(Self { id, date })
    }
}

/// Assignment of a person to a role on a plan
#[derive(Debug, Clone)]
pub struct TeamMember {
    /// Display name of the assigned person.
    pub name: String,
    /// Free-text role label (e.g., "Sound Technician").
    pub position: String,
    /// Identifier of the underlying person record, when the relationship
    /// is present.
    pub person_id: Option<String>,
}

impl TeamMember {
    /// Parse a team member from a `data` array element. Never fails:
    /// missing attributes default to empty and a missing person
    /// relationship becomes `None`.
    pub fn from_value(v: &Value) -> Self {
        Self {
            name: v["attributes"]["name"].as_str().unwrap_or("").to_string(),
            position: v["attributes"]["team_position_name"].as_str().unwrap_or("").to_string(),
            person_id: v["relationships"]["person"]["data"]["id"].as_str().map(String::from),
        }
    }
}

/// A named or unnamed time slot attached to a plan
///
/// The unnamed slot is the canonical service start time; named slots are
/// rehearsals, soundchecks and the like.
#[derive(Debug, Clone)]
pub struct PlanTime {
    /// Slot label, absent for the canonical service time.
    pub name: Option<String>,
    /// Absolute start instant, if `starts_at` was present and parseable.
    pub starts_at: Option<DateTime<Utc>>,
}

impl PlanTime {
    /// Parse a plan time from a `data` array element.
    pub fn from_value(v: &Value) -> Self {
        let starts_at = v["attributes"]["starts_at"]
            .as_str()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc));
        Self {
            name: v["attributes"]["name"].as_str().map(String::from),
            starts_at,
        }
    }
}
