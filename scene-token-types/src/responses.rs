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

//! Response types for the token service REST API.
//!
//! Successful responses are returned bare (no envelope). Failed responses
//! carry an [`crate::APIError`] body.

use serde::{Deserialize, Serialize};

/// Response payload for `POST /token`.
///
/// # Example
///
/// ```json
/// {
///   "serverUrl": "wss://media.example.com",
///   "sceneName": "room1",
///   "participantName": "alice",
///   "participantToken": "eyJhbGciOiJIUzI1NiJ9..."
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    /// Media server URL the client should connect to.
    pub server_url: String,
    pub scene_name: String,
    pub participant_name: String,
    /// Signed access token.
    pub participant_token: String,
}

/// Response payload for `GET /`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HealthResponse {
    pub message: String,
}

impl HealthResponse {
    pub fn alive() -> Self {
        Self {
            message: "alive".to_string(),
        }
    }
}
