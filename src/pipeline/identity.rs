//! Per-person profile lookup and chat-identifier extraction.
//!
//! By organizational convention the Discord ID lives in the free-text
//! `notes` field of a person's profile. Extraction is treated as a parsing
//! step: the notes are scanned for a snowflake-shaped token, and "present
//! but invalid" is a distinct outcome from "missing" so operators can spot
//! profiles that need fixing.

use std::sync::LazyLock;

use futures::future;
use regex::Regex;
use serde_json::Value;

use crate::planning_center::PcoTransport;

/// Regex matching a Discord snowflake: 17-20 decimal digits.
#[allow(clippy::expect_used)]
static RE_SNOWFLAKE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[0-9]{17,20}\b").expect("valid regex: RE_SNOWFLAKE")
});

/// Result of extracting a chat-platform identifier from a notes field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatIdOutcome {
    /// A snowflake-shaped token was found in the notes.
    Valid(String),
    /// Notes are present but contain no valid identifier; carries the raw
    /// text for diagnostics and wire compatibility.
    Invalid(String),
    /// The notes field is empty or absent.
    Missing,
}

/// A person's resolved chat identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatIdentity {
    /// The scheduling-platform person this identity belongs to.
    pub person_id: String,
    /// What the notes field yielded.
    pub outcome: ChatIdOutcome,
}

impl ChatIdentity {
    /// Flatten the outcome to the wire shape the original endpoints used:
    /// the extracted ID when valid, the raw notes text when invalid, and an
    /// empty string when missing.
    #[must_use]
    pub fn wire_value(&self) -> &str {
        match &self.outcome {
            ChatIdOutcome::Valid(id) | ChatIdOutcome::Invalid(id) => id,
            ChatIdOutcome::Missing => "",
        }
    }
}

/// Extract a chat-platform identifier from free-form notes text.
pub fn extract_chat_id(notes: &str) -> ChatIdOutcome {
    let trimmed = notes.trim();
    if trimmed.is_empty() {
        return ChatIdOutcome::Missing;
    }
    RE_SNOWFLAKE.find(trimmed).map_or_else(
        || ChatIdOutcome::Invalid(trimmed.to_string()),
        |m| ChatIdOutcome::Valid(m.as_str().to_string()),
    )
}

/// Resolve the chat identity of each person, preserving input order.
///
/// Profiles are fetched concurrently; the lookups are independent reads.
/// A failed or malformed profile fetch skips that person with a warning
/// rather than aborting the batch, so the output may be shorter than the
/// input. No deduplication is applied.
pub async fn resolve_chat_ids(
    transport: &dyn PcoTransport,
    person_ids: &[String],
) -> Vec<ChatIdentity> {
    let lookups = person_ids.iter().map(|person_id| async move {
        let path = format!("/people/{}", person_id);
        (person_id, transport.fetch_json(&path, &[]).await)
    });

    let mut identities = Vec::with_capacity(person_ids.len());
    for (person_id, result) in future::join_all(lookups).await {
        match result {
            Ok(json) => match parse_notes(&json) {
                Some(notes) => {
                    let outcome = extract_chat_id(&notes);
                    if let ChatIdOutcome::Invalid(raw) = &outcome {
                        tracing::warn!(%person_id, notes = %raw, "Notes contain no valid chat ID");
                    }
                    identities.push(ChatIdentity { person_id: person_id.clone(), outcome });
                }
                None => {
                    tracing::warn!(%person_id, "No data found for person");
                }
            },
            Err(e) => {
                tracing::warn!(%person_id, "Failed to fetch person: {}", e);
            }
        }
    }
    identities
}

/// Pull the notes attribute out of a person response, treating an absent or
/// null field as empty notes. `None` means the response had no person record
/// at all.
fn parse_notes(json: &Value) -> Option<String> {
    let attributes = json["data"]["attributes"].as_object()?;
    Some(
        attributes
            .get("notes")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string(),
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_bare_snowflake() {
        assert_eq!(
            extract_chat_id("200317799226998784"),
            ChatIdOutcome::Valid("200317799226998784".to_string())
        );
    }

    #[test]
    fn extracts_snowflake_embedded_in_prose() {
        assert_eq!(
            extract_chat_id("discord: 200317799226998784 (prefers DMs)"),
            ChatIdOutcome::Valid("200317799226998784".to_string())
        );
    }

    #[test]
    fn short_token_is_invalid() {
        assert_eq!(
            extract_chat_id("12345"),
            ChatIdOutcome::Invalid("12345".to_string())
        );
    }

    #[test]
    fn prose_without_token_is_invalid() {
        assert_eq!(
            extract_chat_id("ask the office for my handle"),
            ChatIdOutcome::Invalid("ask the office for my handle".to_string())
        );
    }

    #[test]
    fn blank_notes_are_missing() {
        assert_eq!(extract_chat_id("   "), ChatIdOutcome::Missing);
        assert_eq!(extract_chat_id(""), ChatIdOutcome::Missing);
    }

    #[test]
    fn wire_value_collapses_outcomes() {
        let valid = ChatIdentity {
            person_id: "u1".to_string(),
            outcome: ChatIdOutcome::Valid("200317799226998784".to_string()),
        };
        let missing = ChatIdentity {
            person_id: "u2".to_string(),
            outcome: ChatIdOutcome::Missing,
        };
        assert_eq!(valid.wire_value(), "200317799226998784");
        assert_eq!(missing.wire_value(), "");
    }

    #[test]
    fn null_notes_parse_as_empty() {
        let json = json!({ "data": { "attributes": { "notes": null } } });
        assert_eq!(parse_notes(&json).as_deref(), Some(""));
    }

    #[test]
    fn missing_person_record_is_none() {
        assert!(parse_notes(&json!({ "errors": [] })).is_none());
    }
}
