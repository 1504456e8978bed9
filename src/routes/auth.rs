//! Login endpoint

use crate::error::Result;
use crate::routes::extract::FormBody;
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

/// OAuth2 password-style login form
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

/// Exchange the admin credentials for a bearer token
pub async fn login(
    State(state): State<AppState>,
    FormBody(form): FormBody<LoginForm>,
) -> Result<Json<LoginResponse>> {
    let issued = state.credentials.login(&form.username, &form.password)?;
    log::debug!("Token for {} expires at {}", form.username, issued.expires_at);

    Ok(Json(LoginResponse {
        access_token: issued.token,
        token_type: "bearer",
    }))
}
