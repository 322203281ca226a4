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

//! Scene access token (JWT) claims.
//!
//! The access token is a signed JWT (HMAC-SHA256) in the LiveKit access token
//! format. The token service signs it with the API secret; the media server
//! validates the signature, looks up the secret by the `iss` API key, and
//! reads the grants.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// JWT payload for a scene access token.
///
/// # Example payload
///
/// ```json
/// {
///   "iss": "APIxxxxxxxx",
///   "sub": "alice",
///   "jti": "alice",
///   "nbf": 1707004200,
///   "exp": 1707004800,
///   "video": { "roomJoin": true, "room": "room1", "canUpdateOwnMetadata": true },
///   "metadata": "{\"avatar\":\"cat\"}",
///   "participantAttributes": { "role": "guest" }
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SceneAccessClaims {
    /// API key the token was signed with.
    pub iss: String,

    /// Participant identity.
    pub sub: String,

    /// Token identifier. Set to the identity, as LiveKit does.
    pub jti: String,

    /// Not-before timestamp (Unix seconds), the issuance time.
    pub nbf: i64,

    /// Expiration timestamp (Unix seconds).
    pub exp: i64,

    pub video: VideoGrant,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,

    #[serde(
        rename = "participantAttributes",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub participant_attributes: Option<HashMap<String, String>>,
}

/// Room permissions carried in the `video` claim.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoGrant {
    /// Must be `true` for the media server to accept the connection.
    #[serde(default)]
    pub room_join: bool,

    /// The scene the participant may join.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,

    #[serde(default)]
    pub can_update_own_metadata: bool,
}

impl VideoGrant {
    /// Grant to join exactly `room` and update the participant's own metadata.
    pub fn join(room: &str) -> Self {
        Self {
            room_join: true,
            room: Some(room.to_string()),
            can_update_own_metadata: true,
        }
    }
}
