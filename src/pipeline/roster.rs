//! Team roster fetching and role-based filtering.

use crate::error::{Error, Result};
use crate::pipeline::service::ResolvedPlan;
use crate::planning_center::types::TeamMember;
use crate::planning_center::PcoTransport;

/// Role predicates applied to a member's free-text position label.
///
/// Matching is case-sensitive substring containment, so the general
/// [`Technician`](Self::Technician) filter also matches "Sound Technician",
/// "Video Technician" and any other position containing the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleFilter {
    /// All audio/video crew: positions containing "Technician".
    Technician,
    /// Audio crew only: positions containing "Sound Technician".
    SoundTechnician,
}

impl RoleFilter {
    const fn needle(self) -> &'static str {
        match self {
            Self::Technician => "Technician",
            Self::SoundTechnician => "Sound Technician",
        }
    }

    /// Whether a position label matches this filter.
    pub fn matches(self, position: &str) -> bool {
        position.contains(self.needle())
    }
}

/// Which field of a matched member to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterField {
    /// The member's display name.
    Name,
    /// The underlying person record's ID, empty string when the
    /// relationship is missing.
    PersonId,
}

/// Fetch a plan's team members and return the chosen field of every member
/// whose position matches `filter`, in source order.
///
/// A failed or malformed roster fetch is a hard error rather than an empty
/// list: identity resolution downstream must be able to tell "no
/// technicians assigned" apart from "lookup failed".
pub async fn fetch_team_by_role(
    transport: &dyn PcoTransport,
    plan: &ResolvedPlan,
    filter: RoleFilter,
    field: RosterField,
) -> Result<Vec<String>> {
    let path = format!(
        "/service_types/{}/plans/{}/team_members",
        plan.service_type_id, plan.plan_id
    );
    let json = transport.fetch_json(&path, &[]).await?;

    let data = json["data"]
        .as_array()
        .ok_or_else(|| Error::parse("Missing 'data' array in team members response", Some(path)))?;

    let mut matched = Vec::new();
    for member in data.iter().map(TeamMember::from_value) {
        if !filter.matches(&member.position) {
            continue;
        }
        tracing::debug!(name = %member.name, position = %member.position, "Matched team member");
        matched.push(match field {
            RosterField::Name => member.name,
            RosterField::PersonId => member.person_id.unwrap_or_default(),
        });
    }

    Ok(matched)
}
