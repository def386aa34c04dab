// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - API clients and resource fetchers.

pub mod activity;
pub mod intraday;
pub mod measure;
pub(crate) mod pagination;
pub mod user_client;
pub mod withings;
pub mod workout;

pub use intraday::INTRADAY_WINDOW_HOURS;
pub use user_client::UserClient;
pub use withings::{verify_state, AuthorizationRequest, WithingsClient};
