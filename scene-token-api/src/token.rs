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

//! Scene access token generation.
//!
//! Tokens are signed with the LiveKit API secret (HS256); the media server
//! finds the secret by the `iss` API key and validates the signature.

use std::collections::HashMap;
use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use scene_token_types::{SceneAccessClaims, TokenRequest, VideoGrant};

use crate::error::AppError;

/// Validity window of every issued token.
pub const TOKEN_TTL: Duration = Duration::from_secs(10 * 60);

/// Builder for a signed scene access token.
///
/// ```ignore
/// let jwt = AccessToken::new("key", "secret")
///     .with_identity("alice")
///     .with_ttl(TOKEN_TTL)
///     .with_grant(VideoGrant::join("room1"))
///     .to_jwt()?;
/// ```
#[derive(Clone)]
pub struct AccessToken<'a> {
    api_key: &'a str,
    api_secret: &'a str,
    identity: String,
    ttl: Duration,
    grant: VideoGrant,
    metadata: Option<String>,
    participant_attributes: Option<HashMap<String, String>>,
}

impl<'a> AccessToken<'a> {
    pub fn new(api_key: &'a str, api_secret: &'a str) -> Self {
        Self {
            api_key,
            api_secret,
            identity: String::new(),
            ttl: TOKEN_TTL,
            grant: VideoGrant::default(),
            metadata: None,
            participant_attributes: None,
        }
    }

    pub fn with_identity(mut self, identity: &str) -> Self {
        self.identity = identity.to_string();
        self
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_grant(mut self, grant: VideoGrant) -> Self {
        self.grant = grant;
        self
    }

    /// Embed opaque metadata. Empty strings are ignored.
    pub fn with_metadata(mut self, metadata: &str) -> Self {
        if !metadata.is_empty() {
            self.metadata = Some(metadata.to_string());
        }
        self
    }

    /// Embed the `participantAttributes` claim. Empty maps are ignored.
    pub fn with_participant_attributes(mut self, attributes: HashMap<String, String>) -> Self {
        if !attributes.is_empty() {
            self.participant_attributes = Some(attributes);
        }
        self
    }

    /// Build the claim set, anchored at `now` (Unix seconds).
    pub fn claims_at(&self, now: i64) -> SceneAccessClaims {
        SceneAccessClaims {
            iss: self.api_key.to_string(),
            sub: self.identity.clone(),
            jti: self.identity.clone(),
            nbf: now,
            exp: now + self.ttl.as_secs() as i64,
            video: self.grant.clone(),
            metadata: self.metadata.clone(),
            participant_attributes: self.participant_attributes.clone(),
        }
    }

    /// Sign the token with the API secret.
    pub fn to_jwt(&self) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = self.claims_at(Utc::now().timestamp());
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.api_secret.as_bytes()),
        )
    }
}

/// Sign a scene access token for the participant named in `request`.
///
/// The caller must have validated that `identity` is non-empty.
pub fn generate_scene_token(
    api_key: &str,
    api_secret: &str,
    identity: &str,
    request: &TokenRequest,
) -> Result<String, AppError> {
    let mut token = AccessToken::new(api_key, api_secret)
        .with_identity(identity)
        .with_ttl(TOKEN_TTL)
        .with_grant(VideoGrant::join(&request.scene_name));

    if let Some(metadata) = &request.metadata {
        token = token.with_metadata(metadata);
    }
    if let Some(attributes) = &request.participant_attributes {
        token = token.with_participant_attributes(attributes.clone());
    }

    token.to_jwt().map_err(|e| {
        tracing::error!("Failed to sign JWT: {e}");
        AppError::internal("failed to generate participant token")
    })
}
