// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Intraday activity series.
//!
//! The endpoint has no offset cursor. It returns at most 24 hours of
//! samples per call, so longer ranges are fetched window by window.

use std::collections::BTreeMap;

use chrono::Duration;

use crate::error::{ClientError, Result};
use crate::models::{IntradayActivityParams, IntradayActivityResponse, IntradaySample};
use crate::services::UserClient;

/// Longest range the provider serves in one intraday request.
pub const INTRADAY_WINDOW_HOURS: i64 = 24;

impl UserClient {
    /// Fetch intraday samples for a range of at most 24 hours.
    ///
    /// Without bounds the provider returns the most recent 24 hours.
    pub async fn get_intraday_activity(
        &self,
        params: &IntradayActivityParams,
    ) -> Result<BTreeMap<i64, IntradaySample>> {
        let form = params.encode()?;
        tracing::debug!(
            start = ?params.start_date,
            end = ?params.end_date,
            "Fetching intraday activity"
        );
        let response: IntradayActivityResponse =
            self.call(&self.endpoints.measure_v2, &form).await?;
        Ok(response.series)
    }

    /// Fetch intraday samples over an arbitrary range by walking it in
    /// consecutive 24 hour windows.
    ///
    /// Both bounds are required. Samples are merged by timestamp; a failure
    /// in any window discards the whole result.
    pub async fn get_all_intraday_activity(
        &self,
        params: &IntradayActivityParams,
    ) -> Result<BTreeMap<i64, IntradaySample>> {
        params.encode()?;
        let (Some(start), Some(end)) = (params.start_date, params.end_date) else {
            return Err(ClientError::Validation(
                "startdate and enddate are required to fetch a full intraday range".to_string(),
            ));
        };

        let window = Duration::hours(INTRADAY_WINDOW_HOURS);
        let mut series = BTreeMap::new();
        let mut window_start = start;

        loop {
            let window_end = (window_start + window).min(end);
            let window_params = IntradayActivityParams {
                start_date: Some(window_start),
                end_date: Some(window_end),
                data_fields: params.data_fields.clone(),
            };

            let batch = self
                .get_intraday_activity(&window_params)
                .await
                .map_err(|source| ClientError::Paginated {
                    operation: "get_all_intraday_activity",
                    offset: window_start.timestamp().max(0) as u64,
                    source: Box::new(source),
                })?;
            series.extend(batch);

            if window_end >= end {
                break;
            }
            window_start = window_end;
        }

        Ok(series)
    }
}
