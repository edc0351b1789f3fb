use archive_banner::{BannerRenderer, Message};
use archive_reason::{resolve, resolve_checked, InvalidStatusDetails, Reason, StatusDetails, Substatus};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedReasonRequest {
    #[serde(default)]
    pub substatus: Option<Substatus>,
    #[serde(default)]
    pub status_details: StatusDetails,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ArchivedReasonResponse {
    pub reason: Reason,
    pub message: Message,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub struct AppState {
    pub renderer: BannerRenderer,
    pub strict: bool,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/archived-reason", post(handle_archived_reason))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Resolve and render the banner for one issue status.
///
/// In strict mode the details are validated first.
pub fn explain(
    state: &AppState,
    request: &ArchivedReasonRequest,
) -> Result<ArchivedReasonResponse, InvalidStatusDetails> {
    let substatus = request.substatus.unwrap_or_default();
    let reason = if state.strict {
        resolve_checked(substatus, &request.status_details)?
    } else {
        resolve(substatus, &request.status_details)
    };
    let message = state.renderer.render(&reason);
    Ok(ArchivedReasonResponse {
        text: message.to_string(),
        reason,
        message,
    })
}

async fn handle_archived_reason(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ArchivedReasonRequest>,
) -> Result<Json<ArchivedReasonResponse>, (StatusCode, Json<ErrorBody>)> {
    match explain(&state, &request) {
        Ok(response) => {
            tracing::debug!(rule = response.reason.rule(), "explained archived issue");
            Ok(Json(response))
        }
        Err(err) => {
            tracing::warn!(error = %err, "rejected status details");
            Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorBody {
                    error: err.to_string(),
                }),
            ))
        }
    }
}

async fn healthz() -> &'static str {
    "ok"
}
