// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! High-frequency activity series (`action=getintradayactivity`).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};
use crate::form::FormParams;
use crate::models::de::epoch_map_or_empty_list;
use crate::time_utils::format_epoch;

/// Field names accepted by `data_fields` on the intraday endpoint.
pub const INTRADAY_DATA_FIELDS: &[&str] = &[
    "steps",
    "elevation",
    "calories",
    "distance",
    "stroke",
    "pool_lap",
    "duration",
    "heart_rate",
    "spo2_auto",
    "rmssd",
    "sdnn1",
    "hrv_quality",
];

/// Query for intraday activity between two instants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntradayActivityParams {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub data_fields: Vec<String>,
}

impl IntradayActivityParams {
    /// Validate and encode the query as form fields.
    pub fn encode(&self) -> Result<FormParams> {
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end < start {
                return Err(ClientError::Validation(
                    "enddate must not be before startdate".to_string(),
                ));
            }
        }

        let mut form = FormParams::action("getintradayactivity");
        form.push_opt("startdate", self.start_date.map(format_epoch))
            .push_opt("enddate", self.end_date.map(format_epoch))
            .push_list("data_fields", &self.data_fields);
        Ok(form)
    }
}

/// Intraday samples keyed by epoch second.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntradayActivityResponse {
    #[serde(default, deserialize_with = "epoch_map_or_empty_list")]
    pub series: BTreeMap<i64, IntradaySample>,
}

/// One intraday sample. Only the requested data fields are populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntradaySample {
    #[serde(rename = "deviceid")]
    pub device_id: Option<String>,
    pub model: Option<String>,
    pub model_id: Option<i64>,
    pub steps: Option<i64>,
    pub elevation: Option<f64>,
    pub calories: Option<f64>,
    pub distance: Option<f64>,
    pub stroke: Option<i64>,
    pub pool_lap: Option<i64>,
    /// Sample duration in seconds
    pub duration: Option<i64>,
    pub heart_rate: Option<f64>,
    pub spo2_auto: Option<f64>,
    pub rmssd: Option<f64>,
    pub sdnn1: Option<f64>,
    pub hrv_quality: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_encode_epoch_bounds() {
        let params = IntradayActivityParams {
            start_date: Some(Utc.timestamp_opt(1_700_000_000, 0).unwrap()),
            end_date: Some(Utc.timestamp_opt(1_700_086_400, 0).unwrap()),
            data_fields: vec!["heart_rate".to_string()],
        };
        assert_eq!(
            params.encode().unwrap().encode(),
            "action=getintradayactivity&startdate=1700000000&enddate=1700086400&data_fields=heart_rate"
        );
    }

    #[test]
    fn test_reject_inverted_range() {
        let params = IntradayActivityParams {
            start_date: Some(Utc.timestamp_opt(1_700_086_400, 0).unwrap()),
            end_date: Some(Utc.timestamp_opt(1_700_000_000, 0).unwrap()),
            ..Default::default()
        };
        assert!(matches!(params.encode(), Err(ClientError::Validation(_))));
    }

    #[test]
    fn test_decode_series_keys() {
        let resp: IntradayActivityResponse = serde_json::from_str(
            r#"{"series":{"1700000060":{"deviceid":"abc","model":"ScanWatch","model_id":93,"heart_rate":61},"1700000000":{"steps":12,"duration":60}}}"#,
        )
        .unwrap();

        let keys: Vec<_> = resp.series.keys().copied().collect();
        assert_eq!(keys, vec![1_700_000_000, 1_700_000_060]);
        assert_eq!(resp.series[&1_700_000_060].heart_rate, Some(61.0));
        assert_eq!(resp.series[&1_700_000_000].steps, Some(12));
    }

    #[test]
    fn test_decode_empty_series_list() {
        let resp: IntradayActivityResponse = serde_json::from_str(r#"{"series":[]}"#).unwrap();
        assert!(resp.series.is_empty());
    }
}
