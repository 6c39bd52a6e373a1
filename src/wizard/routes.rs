//! REST endpoints for setup status and progress.

use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tokio::sync::Mutex;

use crate::phase::{Gate, PhaseId};

use super::controller::WizardController;

/// Shared state for setup routes.
#[derive(Clone)]
pub struct SetupRouteState {
    pub wizard: Arc<Mutex<WizardController>>,
}

/// One row of the phase listing.
#[derive(Debug, Serialize)]
struct PhaseSummary {
    id: PhaseId,
    title: &'static str,
    skippable: bool,
    requires: Option<&'static str>,
}

/// GET /api/setup/status
///
/// Returns where the wizard is: completion flag, current phase, index,
/// and the selections made so far.
async fn get_status(State(state): State<SetupRouteState>) -> impl IntoResponse {
    let wizard = state.wizard.lock().await;
    Json(wizard.status())
}

/// GET /api/setup/phases
///
/// Returns the configured phase sequence in order.
async fn get_phases(State(state): State<SetupRouteState>) -> impl IntoResponse {
    let wizard = state.wizard.lock().await;
    let phases: Vec<PhaseSummary> = wizard
        .registry()
        .iter()
        .map(|p| PhaseSummary {
            id: p.id,
            title: p.title,
            skippable: p.skippable,
            requires: match p.gate {
                Gate::Requires(key) => Some(key),
                Gate::Always => None,
            },
        })
        .collect();
    Json(phases)
}

/// GET /api/setup/selections
///
/// Returns the selections captured in this session.
async fn get_selections(State(state): State<SetupRouteState>) -> impl IntoResponse {
    let wizard = state.wizard.lock().await;
    Json(wizard.selections().clone())
}

/// Build the setup REST routes.
pub fn setup_routes(state: SetupRouteState) -> Router {
    Router::new()
        .route("/api/setup/status", get(get_status))
        .route("/api/setup/phases", get(get_phases))
        .route("/api/setup/selections", get(get_selections))
        .with_state(state)
}
