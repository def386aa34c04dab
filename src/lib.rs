// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Withings API client
//!
//! OAuth2 authorization, per-user token management with transparent
//! refresh, and paginated queries for activity, intraday activity,
//! workouts and body measurements.
//!
//! ```no_run
//! # async fn run() -> withings_client::error::Result<()> {
//! use withings_client::{Config, WithingsClient};
//! use withings_client::models::MeasureParams;
//!
//! let client = WithingsClient::new(Config::new("id", "secret", "https://example.com/cb"));
//! let user = client.demo_user().await?;
//! let groups = user
//!     .get_all_measures(&MeasureParams {
//!         measure_types: vec![1],
//!         ..Default::default()
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod envelope;
pub mod error;
pub mod form;
pub mod logging;
pub mod models;
pub mod services;
pub mod time_utils;

pub use config::Config;
pub use error::{ClientError, Result};
pub use models::Token;
pub use services::{verify_state, AuthorizationRequest, UserClient, WithingsClient};
