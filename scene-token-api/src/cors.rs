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

//! CORS policy derived from the deployment environment.

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::config::DeploymentEnvironment;

/// Build the CORS layer for `environment`.
///
/// Only the environment's allow-listed origins are echoed back. Credentials
/// are allowed, so methods and headers mirror the preflight request instead
/// of using a wildcard.
pub fn cors_layer(environment: DeploymentEnvironment) -> CorsLayer {
    let origins: Vec<HeaderValue> = environment
        .allowed_origins()
        .iter()
        .copied()
        .map(HeaderValue::from_static)
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}
