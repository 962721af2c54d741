use crate::error::ApiError;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;
use uuid62::Uuid62;

/// In-memory UUID registry shared by all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    ids: Arc<RwLock<BTreeSet<Uuid>>>,
    max_ids: usize,
}

impl AppState {
    pub fn new(max_ids: usize) -> Self {
        Self {
            ids: Arc::new(RwLock::new(BTreeSet::new())),
            max_ids,
        }
    }

    fn insert(&self, id: Uuid) -> Result<(), ApiError> {
        let mut ids = self.ids.write();
        if ids.contains(&id) {
            return Err(ApiError::Conflict(Uuid62(id)));
        }
        if ids.len() >= self.max_ids {
            return Err(ApiError::RegistryFull {
                limit: self.max_ids,
            });
        }
        ids.insert(id);
        Ok(())
    }

    fn contains(&self, id: Uuid) -> bool {
        self.ids.read().contains(&id)
    }

    fn remove(&self, id: Uuid) -> bool {
        self.ids.write().remove(&id)
    }

    fn snapshot(&self) -> Vec<Uuid> {
        self.ids.read().iter().copied().collect()
    }
}

/// JSON representation of a registered UUID: the Base62 form under `id`, the
/// canonical hyphenated form under `longId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UuidBody {
    pub id: Uuid62,
    pub long_id: Uuid,
}

impl From<Uuid> for UuidBody {
    fn from(id: Uuid) -> Self {
        Self {
            id: Uuid62(id),
            long_id: id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddParams {
    id: Uuid62,
}

/// Builds the service: registry routes plus request tracing, and permissive
/// CORS when `cors_any` is set.
pub fn app(state: AppState, cors_any: bool) -> Router {
    let router = Router::new()
        .route("/uuids", get(list_uuids).post(add_uuid))
        .route("/uuids/random", post(add_random_uuid))
        .route("/uuids/{id}", get(get_uuid).delete(delete_uuid))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if cors_any {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

fn register(state: &AppState, id: Uuid) -> Result<Response, ApiError> {
    state.insert(id)?;
    let location = format!("/uuids/{}", Uuid62(id));
    tracing::info!(%location, long_id = %id, "registered uuid");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(UuidBody::from(id)),
    )
        .into_response())
}

async fn add_uuid(
    State(state): State<AppState>,
    Query(params): Query<AddParams>,
) -> Result<Response, ApiError> {
    register(&state, params.id.into_inner())
}

async fn add_random_uuid(State(state): State<AppState>) -> Result<Response, ApiError> {
    let id = uuid::Builder::from_random_bytes(rand::random()).into_uuid();
    register(&state, id)
}

async fn get_uuid(
    State(state): State<AppState>,
    Path(id): Path<Uuid62>,
) -> Result<Json<UuidBody>, ApiError> {
    if !state.contains(*id) {
        return Err(ApiError::NotFound(id));
    }
    Ok(Json(UuidBody::from(id.into_inner())))
}

async fn list_uuids(State(state): State<AppState>) -> Json<Vec<UuidBody>> {
    Json(state.snapshot().into_iter().map(UuidBody::from).collect())
}

async fn delete_uuid(
    State(state): State<AppState>,
    Path(id): Path<Uuid62>,
) -> Result<StatusCode, ApiError> {
    if !state.remove(*id) {
        return Err(ApiError::NotFound(id));
    }
    tracing::info!(%id, "deleted uuid");
    Ok(StatusCode::NO_CONTENT)
}
