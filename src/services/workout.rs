// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout sessions.

use crate::error::Result;
use crate::models::{Workout, WorkoutPage, WorkoutParams};
use crate::services::pagination::collect_all;
use crate::services::UserClient;

impl UserClient {
    /// Fetch one page of workouts.
    pub async fn get_workouts(&self, params: &WorkoutParams) -> Result<WorkoutPage> {
        let form = params.encode()?;
        tracing::debug!(offset = params.offset, "Fetching workout page");
        self.call(&self.endpoints.measure_v2, &form).await
    }

    /// Fetch every workout matching `params` across all pages.
    pub async fn get_all_workouts(&self, params: &WorkoutParams) -> Result<Vec<Workout>> {
        params.encode()?;
        collect_all("get_all_workouts", params.offset, |offset| {
            let page_params = WorkoutParams {
                offset,
                ..params.clone()
            };
            async move { self.get_workouts(&page_params).await }
        })
        .await
    }
}
