/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Handler for participant token issuance.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use scene_token_types::{TokenRequest, TokenResponse};

use crate::error::AppError;
use crate::state::AppState;
use crate::token::generate_scene_token;

/// POST /token
///
/// Validates the participant name, signs a token granting access to the
/// requested scene, and returns it with the media server URL.
pub async fn issue_token(
    State(state): State<AppState>,
    payload: Result<Json<TokenRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, AppError> {
    let Json(request) = payload?;

    let identity = request
        .identity()
        .ok_or_else(|| AppError::invalid_request("participant_name is required"))?;

    let token = generate_scene_token(&state.api_key, &state.api_secret, identity, &request)?;

    tracing::info!("Token generated for scene {}", request.scene_name);

    Ok(Json(TokenResponse {
        server_url: state.server_url.clone(),
        participant_name: identity.to_string(),
        scene_name: request.scene_name,
        participant_token: token,
    }))
}
