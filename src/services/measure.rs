// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Raw body measurements.
//!
//! Unlike the other resources these live on the v1 `/measure` endpoint.

use crate::error::Result;
use crate::models::{MeasureGroup, MeasurePage, MeasureParams};
use crate::services::pagination::collect_all;
use crate::services::UserClient;

impl UserClient {
    /// Fetch one page of measure groups.
    pub async fn get_measures(&self, params: &MeasureParams) -> Result<MeasurePage> {
        let form = params.encode()?;
        tracing::debug!(offset = params.offset, "Fetching measure page");
        self.call(&self.endpoints.measure, &form).await
    }

    /// Fetch every measure group matching `params` across all pages.
    pub async fn get_all_measures(&self, params: &MeasureParams) -> Result<Vec<MeasureGroup>> {
        params.encode()?;
        collect_all("get_all_measures", params.offset, |offset| {
            let page_params = MeasureParams {
                offset,
                ..params.clone()
            };
            async move { self.get_measures(&page_params).await }
        })
        .await
    }
}
