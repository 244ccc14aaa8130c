//! Canonical plan start time resolution.

use chrono::{DateTime, FixedOffset};

use crate::error::{Error, Result};
use crate::pipeline::service::ResolvedPlan;
use crate::planning_center::types::PlanTime;
use crate::planning_center::PcoTransport;

/// Resolve a plan's canonical start time in the organization's local offset.
///
/// The canonical time is the first plan time whose `name` is absent; named
/// slots (rehearsal, soundcheck) are ignored even when they start earlier.
/// Returns `Ok(None)` when no unnamed slot exists. A failed or malformed
/// `plan_times` fetch, or an unnamed slot whose `starts_at` cannot be
/// parsed, is an error.
pub async fn resolve_plan_start_time(
    transport: &dyn PcoTransport,
    plan: &ResolvedPlan,
    offset: FixedOffset,
) -> Result<Option<DateTime<FixedOffset>>> {
    let path = format!(
        "/service_types/{}/plans/{}/plan_times",
        plan.service_type_id, plan.plan_id
    );
    let json = transport.fetch_json(&path, &[]).await?;

    let data = json["data"]
        .as_array()
        .ok_or_else(|| Error::parse("Missing 'data' array in plan times response", Some(path)))?;

    let Some(canonical) = data
        .iter()
        .map(PlanTime::from_value)
        .find(|time| time.name.is_none())
    else {
        tracing::debug!(plan_id = %plan.plan_id, "No unnamed plan time found");
        return Ok(None);
    };

    let starts_at = canonical.starts_at.ok_or_else(|| {
        Error::parse(
            format!("Unnamed plan time for plan {} has no parseable starts_at", plan.plan_id),
            None,
        )
    })?;

    let local = starts_at.with_timezone(&offset);
    tracing::debug!(plan_id = %plan.plan_id, %local, "Resolved start time");
    Ok(Some(local))
}
