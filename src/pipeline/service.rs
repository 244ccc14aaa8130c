//! Date-to-plan resolution.

use chrono::NaiveDate;

use crate::pipeline::service_types::list_service_type_ids;
use crate::planning_center::types::PlanSummary;
use crate::planning_center::PcoTransport;

/// A service type and the plan within it scheduled on the target date.
///
/// Both IDs travel together through the rest of the pipeline; downstream
/// lookups need the pair, and nothing caches it between invocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPlan {
    /// Service type the plan belongs to.
    pub service_type_id: String,
    /// The plan scheduled on the resolved date.
    pub plan_id: String,
}

/// Find the service scheduled on `target`, if any.
///
/// Scans service types in source order and, for each, fetches its single
/// nearest future plan. The first service type whose plan falls on the
/// target calendar date wins; the scan stops there. Per-type fetch failures
/// are logged and skipped, so one broken service type cannot mask a match
/// in a later one. Returns `None` only after every service type has been
/// consulted without a match.
pub async fn resolve_plan_for_date(
    transport: &dyn PcoTransport,
    target: NaiveDate,
) -> Option<ResolvedPlan> {
    let ids = list_service_type_ids(transport).await;
    tracing::debug!(service_types = ids.len(), %target, "scanning for today's plan");

    for service_type_id in ids {
        let path = format!("/service_types/{}/plans", service_type_id);
        let json = match transport
            .fetch_json(&path, &[("filter", "future"), ("per_page", "1")])
            .await
        {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(%service_type_id, "Skipping service type: {}", e);
                continue;
            }
        };

        let Some(plan) = json["data"]
            .as_array()
            .and_then(|data| data.first())
            .and_then(PlanSummary::from_value)
        else {
            continue;
        };

        if plan.date == target {
            tracing::info!(%service_type_id, plan_id = %plan.id, "Today's service resolved");
            return Some(ResolvedPlan { service_type_id, plan_id: plan.id });
        }
    }

    tracing::info!(%target, "No service found");
    None
}
