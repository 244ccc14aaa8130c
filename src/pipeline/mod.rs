//! The service/plan/technician resolution pipeline.
//!
//! Turns a calendar date into the chat-platform identifiers of the
//! technicians on duty through a chain of dependent lookups: enumerate
//! service types, find the plan scheduled on the target date, filter the
//! plan's roster by role, then resolve each person's profile. A sibling
//! branch resolves the plan's canonical start time.
//!
//! Every step takes the resolved service type and plan as explicit values;
//! nothing is retained between pipeline invocations.

/// Per-person profile lookup and chat-identifier extraction
pub mod identity;
/// Team roster fetching and role-based filtering
pub mod roster;
/// Date-to-plan resolution across service types
pub mod service;
/// Service type enumeration
pub mod service_types;
/// Canonical plan start time resolution
pub mod times;

pub use identity::{resolve_chat_ids, ChatIdOutcome, ChatIdentity};
pub use roster::{fetch_team_by_role, RoleFilter, RosterField};
pub use service::{resolve_plan_for_date, ResolvedPlan};
pub use service_types::list_service_type_ids;
pub use times::resolve_plan_start_time;
