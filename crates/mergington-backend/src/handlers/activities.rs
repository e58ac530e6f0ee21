use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use mergington::data::{Confirmation, ErrorDetail, SignupQuery};
use mergington::errors::RosterError;
use mergington::log;

use crate::services::ActivityService;

/// Handler to list every activity keyed by name
pub async fn list(State(state): State<Arc<crate::AppState>>) -> Response {
    match state.roster.list().await {
        Ok(activities) => Json(activities).into_response(),
        Err(err) => error_response(err),
    }
}

/// Handler to sign a student up for an activity
pub async fn signup(
    State(state): State<Arc<crate::AppState>>,
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
) -> Response {
    match state.roster.signup(&activity_name, &query.email).await {
        Ok(_) => {
            log::info!("Signed up {} for {}", query.email, activity_name);
            Json(Confirmation {
                message: format!("Signed up {} for {}", query.email, activity_name),
            })
            .into_response()
        }
        Err(err) => error_response(err),
    }
}

/// Handler to remove a student from an activity's roster
pub async fn unregister(
    State(state): State<Arc<crate::AppState>>,
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
) -> Response {
    match state.roster.unregister(&activity_name, &query.email).await {
        Ok(_) => {
            log::info!("Removed {} from {}", query.email, activity_name);
            Json(Confirmation {
                message: format!("Removed {} from {}", query.email, activity_name),
            })
            .into_response()
        }
        Err(err) => error_response(err),
    }
}

/// Maps a roster failure to its HTTP status and `{"detail": ...}` body.
fn error_response(err: RosterError) -> Response {
    let status = match err {
        RosterError::AlreadySignedUp => StatusCode::BAD_REQUEST,
        RosterError::ActivityNotFound | RosterError::StudentNotFound => StatusCode::NOT_FOUND,
    };

    (
        status,
        Json(ErrorDetail {
            detail: err.to_string(),
        }),
    )
        .into_response()
}
