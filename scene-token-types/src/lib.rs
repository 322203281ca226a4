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

//! Shared API types for the scene token service.
//!
//! This crate defines the API contract between the token service and its
//! consumers (web clients, integration tests). It carries no framework or
//! signing dependencies, only `serde` derives.

pub mod error;
pub mod requests;
pub mod responses;
pub mod token;

pub use error::APIError;
pub use requests::TokenRequest;
pub use responses::{HealthResponse, TokenResponse};
pub use token::{SceneAccessClaims, VideoGrant};
