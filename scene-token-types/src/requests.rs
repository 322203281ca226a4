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

//! Request types for the token service REST API.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Request body for `POST /token`.
///
/// Field names are snake_case on the wire.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct TokenRequest {
    /// Scene (room) the participant wants to join.
    pub scene_name: String,

    /// Participant identity. Required, but kept optional here so that a
    /// missing field reaches the handler and is rejected with a 400 rather
    /// than a body decoding error.
    #[serde(default)]
    pub participant_name: Option<String>,

    /// Opaque metadata embedded verbatim in the token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,

    /// Custom attributes embedded as the `participantAttributes` claim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participant_attributes: Option<HashMap<String, String>>,
}

impl TokenRequest {
    /// The participant identity, or `None` when absent or empty.
    pub fn identity(&self) -> Option<&str> {
        self.participant_name.as_deref().filter(|n| !n.is_empty())
    }
}
