//! HTTP endpoints for the chat-bot integration.
//!
//! Thin axum layer over the resolution pipeline. For compatibility with the
//! bot that consumes these endpoints, failures collapse to empty arrays or
//! null bodies on the wire; the distinction between "nothing found" and
//! "lookup failed" is preserved in the logs.

use anyhow::{Context, Result};
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{FixedOffset, NaiveDate, Utc};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;
use crate::pipeline::{
    fetch_team_by_role, list_service_type_ids, resolve_chat_ids, resolve_plan_for_date,
    resolve_plan_start_time, ResolvedPlan, RoleFilter, RosterField,
};
use crate::planning_center::PcoTransport;

/// Shared application state
pub struct AppState {
    /// Transport used for every scheduling-platform lookup.
    pub transport: Arc<dyn PcoTransport>,
    /// The organization's local offset for date defaults and start times.
    pub utc_offset: FixedOffset,
}

impl AppState {
    /// Today's date in the organization's local offset.
    ///
    /// Evaluated on every call; a default computed once at startup would go
    /// stale as soon as the process crosses midnight.
    fn local_today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.utc_offset).date_naive()
    }
}

#[derive(Debug, Deserialize)]
struct DateQuery {
    today: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
struct RosterQuery {
    today: Option<NaiveDate>,
    /// `true` emits display names, `false` (default) emits person IDs.
    #[serde(default, rename = "nameMode")]
    name_mode: bool,
}

#[derive(Debug, Deserialize)]
struct PersonIdsQuery {
    /// Comma-separated scheduling-platform person IDs.
    ids: String,
}

#[derive(Debug, Deserialize)]
struct StartTimeQuery {
    service_type: String,
    plan: String,
}

/// Build the endpoint router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/AllTechs", get(all_techs))
        .route("/SoundTechs", get(sound_techs))
        .route("/StartTimes", get(start_times))
        .route("/mini/ServiceIDs", get(mini_service_ids))
        .route("/mini/TodayService", get(mini_today_service))
        .route("/mini/AllTechs", get(mini_all_techs))
        .route("/mini/SoundTechs", get(mini_sound_techs))
        .route("/mini/DiscordIDs", get(mini_discord_ids))
        .route("/mini/StartTime", get(mini_start_time))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Bind and serve the endpoints.
pub async fn run_server(config: &Config, transport: Arc<dyn PcoTransport>) -> Result<()> {
    let state = Arc::new(AppState {
        transport,
        utc_offset: config.utc_offset(),
    });

    let addr: SocketAddr = format!("{}:{}", config.bind_host, config.bind_port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", config.bind_host, config.bind_port))?;
    tracing::info!("HTTP server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, router(state)).await.context("server error")?;

    Ok(())
}

/// Resolve the roster for a date, collapsing failures to an empty list for
/// the wire while keeping them apart in the logs.
async fn roster_for(
    state: &AppState,
    today: Option<NaiveDate>,
    filter: RoleFilter,
    field: RosterField,
) -> Vec<String> {
    let target = today.unwrap_or_else(|| state.local_today());
    let Some(plan) = resolve_plan_for_date(state.transport.as_ref(), target).await else {
        return Vec::new();
    };
    match fetch_team_by_role(state.transport.as_ref(), &plan, filter, field).await {
        Ok(members) => members,
        Err(e) => {
            tracing::error!(plan_id = %plan.plan_id, "Roster fetch failed: {}", e);
            Vec::new()
        }
    }
}

/// Roster person IDs composed with identity resolution.
async fn chat_ids_for(state: &AppState, today: Option<NaiveDate>, filter: RoleFilter) -> Vec<String> {
    let person_ids = roster_for(state, today, filter, RosterField::PersonId).await;
    resolve_chat_ids(state.transport.as_ref(), &person_ids)
        .await
        .iter()
        .map(|identity| identity.wire_value().to_string())
        .collect()
}

async fn mini_service_ids(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(list_service_type_ids(state.transport.as_ref()).await)
}

async fn mini_today_service(
    State(state): State<Arc<AppState>>,
    Query(q): Query<DateQuery>,
) -> Json<Option<String>> {
    let target = q.today.unwrap_or_else(|| state.local_today());
    Json(
        resolve_plan_for_date(state.transport.as_ref(), target)
            .await
            .map(|plan| plan.plan_id),
    )
}

async fn mini_all_techs(
    State(state): State<Arc<AppState>>,
    Query(q): Query<RosterQuery>,
) -> Json<Vec<String>> {
    let field = if q.name_mode { RosterField::Name } else { RosterField::PersonId };
    Json(roster_for(&state, q.today, RoleFilter::Technician, field).await)
}

async fn mini_sound_techs(
    State(state): State<Arc<AppState>>,
    Query(q): Query<RosterQuery>,
) -> Json<Vec<String>> {
    let field = if q.name_mode { RosterField::Name } else { RosterField::PersonId };
    Json(roster_for(&state, q.today, RoleFilter::SoundTechnician, field).await)
}

async fn mini_discord_ids(
    State(state): State<Arc<AppState>>,
    Query(q): Query<PersonIdsQuery>,
) -> Json<Vec<String>> {
    let person_ids: Vec<String> = q
        .ids
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(String::from)
        .collect();
    Json(
        resolve_chat_ids(state.transport.as_ref(), &person_ids)
            .await
            .iter()
            .map(|identity| identity.wire_value().to_string())
            .collect(),
    )
}

async fn mini_start_time(
    State(state): State<Arc<AppState>>,
    Query(q): Query<StartTimeQuery>,
) -> Json<Option<String>> {
    let plan = ResolvedPlan { service_type_id: q.service_type, plan_id: q.plan };
    Json(start_time_for(&state, &plan).await)
}

async fn all_techs(
    State(state): State<Arc<AppState>>,
    Query(q): Query<DateQuery>,
) -> Json<Vec<String>> {
    Json(chat_ids_for(&state, q.today, RoleFilter::Technician).await)
}

async fn sound_techs(
    State(state): State<Arc<AppState>>,
    Query(q): Query<DateQuery>,
) -> Json<Vec<String>> {
    Json(chat_ids_for(&state, q.today, RoleFilter::SoundTechnician).await)
}

async fn start_times(
    State(state): State<Arc<AppState>>,
    Query(q): Query<DateQuery>,
) -> Json<Option<String>> {
    let target = q.today.unwrap_or_else(|| state.local_today());
    let Some(plan) = resolve_plan_for_date(state.transport.as_ref(), target).await else {
        return Json(None);
    };
    Json(start_time_for(&state, &plan).await)
}

async fn start_time_for(state: &AppState, plan: &ResolvedPlan) -> Option<String> {
    match resolve_plan_start_time(state.transport.as_ref(), plan, state.utc_offset).await {
        Ok(time) => time.map(|t| t.to_rfc3339()),
        Err(e) => {
            tracing::error!(plan_id = %plan.plan_id, "Start time lookup failed: {}", e);
            None
        }
    }
}
