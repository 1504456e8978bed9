//! HTTP routes
//!
//! Maps the credential checker, the upload handler and the minutes store to
//! JSON endpoints. Reading and updating minutes need a bearer token; login,
//! upload and minutes creation are open.

pub mod auth;
pub mod extract;
pub mod minutes;
pub mod upload;

use crate::error::AppError;
use crate::state::AppState;
use axum::{
    async_trait,
    extract::{DefaultBodyLimit, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;

/// Build the application router
pub fn router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    Router::new()
        .route("/api/health", get(health))
        .route("/api/login", post(auth::login))
        .route("/api/upload", post(upload::upload_audio).layer(upload_limit))
        .route(
            "/api/minutes",
            get(minutes::list_minutes).post(minutes::save_minutes),
        )
        .route("/api/minutes/update", post(minutes::update_minutes))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Subject of a verified bearer token
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub String);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> std::result::Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(bearer_token)
            .ok_or(AppError::NotAuthenticated)?;

        let subject = state.credentials.verify(token)?;
        Ok(Self(subject))
    }
}

fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Report a failure as a 200 `{"error": ...}` body, or as a status in strict mode
///
/// Transcription and append failures have always been reported this way;
/// clients check the body for an `error` key.
pub(crate) fn soft_failure(strict: bool, error: AppError) -> Response {
    if strict {
        return error.into_response();
    }

    log::error!("Request failed, reported in body: {}", error);
    Json(ErrorBody {
        error: error.to_string(),
    })
    .into_response()
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::auth::CredentialChecker;
    use crate::ports::mocks::{MockMinutesStore, MockTranscription};
    use crate::ports::storage::MinutesStorePort;
    use crate::ports::transcription::{TranscriptionConfig, TranscriptionServicePort};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::path::Path;
    use std::sync::Arc;
    use tower::ServiceExt;

    pub const ADMIN: &str = "admin";
    pub const PASSWORD: &str = "1234";

    pub fn test_state(
        upload_dir: &Path,
        minutes: Arc<dyn MinutesStorePort>,
        transcription: Arc<dyn TranscriptionServicePort>,
    ) -> AppState {
        AppState {
            credentials: Arc::new(CredentialChecker::new(
                ADMIN.to_string(),
                PASSWORD.to_string(),
                b"router-test-secret",
                chrono::Duration::minutes(60),
            )),
            minutes,
            transcription,
            transcription_config: TranscriptionConfig {
                model: Some("whisper-1".to_string()),
                language: Some("ko".to_string()),
            },
            upload_dir: upload_dir.to_path_buf(),
            max_upload_bytes: 1024 * 1024,
            strict_errors: false,
        }
    }

    pub fn default_state(upload_dir: &Path) -> AppState {
        test_state(
            upload_dir,
            Arc::new(MockMinutesStore::new()),
            Arc::new(MockTranscription::returning("hello")),
        )
    }

    pub fn bearer(state: &AppState) -> String {
        let issued = state.credentials.login(ADMIN, PASSWORD).unwrap();
        format!("Bearer {}", issued.token)
    }

    pub async fn send(app: Router, req: Request<Body>) -> (StatusCode, serde_json::Value) {
        let res = app.oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }
}
