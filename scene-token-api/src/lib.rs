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

//! Scene token service library.
//!
//! This crate provides the Axum router, application state, CORS policy and
//! configuration for the token service. The binary entry point (`main.rs`)
//! is a thin wrapper that calls into this library.

pub mod config;
pub mod cors;
pub mod error;
pub mod routes;
pub mod state;
pub mod token;
