// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Daily activity summaries.

use crate::error::Result;
use crate::models::{Activity, ActivityPage, ActivityParams};
use crate::services::pagination::collect_all;
use crate::services::UserClient;

impl UserClient {
    /// Fetch one page of daily activity summaries.
    ///
    /// If more results exist the returned page carries a non-zero offset to
    /// pass back in `params.offset`.
    pub async fn get_activity(&self, params: &ActivityParams) -> Result<ActivityPage> {
        let form = params.encode()?;
        tracing::debug!(offset = params.offset, "Fetching activity page");
        self.call(&self.endpoints.measure_v2, &form).await
    }

    /// Fetch every activity summary matching `params`, following the offset
    /// cursor until the last page.
    pub async fn get_all_activities(&self, params: &ActivityParams) -> Result<Vec<Activity>> {
        params.encode()?;
        collect_all("get_all_activities", params.offset, |offset| {
            let page_params = ActivityParams {
                offset,
                ..params.clone()
            };
            async move { self.get_activity(&page_params).await }
        })
        .await
    }
}
