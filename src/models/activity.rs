// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Daily activity summaries (`action=getactivity`).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};
use crate::form::FormParams;
use crate::models::de::bool_from_int_or_bool;
use crate::models::Paginated;
use crate::time_utils::{format_epoch, format_ymd};

/// Field names accepted by `data_fields` on the activity endpoint.
pub const ACTIVITY_DATA_FIELDS: &[&str] = &[
    "steps",
    "distance",
    "elevation",
    "soft",
    "moderate",
    "intense",
    "active",
    "calories",
    "totalcalories",
    "hr_average",
    "hr_min",
    "hr_max",
    "hr_zone_0",
    "hr_zone_1",
    "hr_zone_2",
    "hr_zone_3",
];

/// Query for daily activity summaries.
///
/// Either a `start_date`/`end_date` range or a `last_update` cursor, not both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityParams {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub last_update: Option<DateTime<Utc>>,
    pub offset: u64,
    pub data_fields: Vec<String>,
}

impl ActivityParams {
    /// Validate and encode the query as form fields.
    pub fn encode(&self) -> Result<FormParams> {
        validate_range_or_cursor(
            self.start_date.is_some(),
            self.end_date.is_some(),
            self.last_update.is_some(),
        )?;

        let mut form = FormParams::action("getactivity");
        form.push_opt("lastupdate", self.last_update.map(format_epoch))
            .push_opt("startdateymd", self.start_date.map(format_ymd))
            .push_opt("enddateymd", self.end_date.map(format_ymd))
            .push_opt("offset", (self.offset > 0).then(|| self.offset.to_string()))
            .push_list("data_fields", &self.data_fields);
        Ok(form)
    }
}

/// Shared rule for endpoints taking a `YYYY-MM-DD` range or a `lastupdate` cursor.
pub(crate) fn validate_range_or_cursor(
    has_start: bool,
    has_end: bool,
    has_last_update: bool,
) -> Result<()> {
    if has_start && has_last_update {
        return Err(ClientError::Validation(
            "lastupdate cannot be set together with startdateymd".to_string(),
        ));
    }
    if !has_end && !has_last_update {
        return Err(ClientError::Validation(
            "either enddateymd or lastupdate must be set".to_string(),
        ));
    }
    Ok(())
}

/// One page of daily activity summaries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivityPage {
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default, deserialize_with = "bool_from_int_or_bool")]
    pub more: bool,
    /// Continuation offset, 0 when there are no further pages
    #[serde(default)]
    pub offset: u64,
}

impl Paginated for ActivityPage {
    type Record = Activity;

    fn into_parts(self) -> (Vec<Activity>, u64) {
        (self.activities, self.offset)
    }
}

/// Aggregated activity for a single day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    /// Day (`YYYY-MM-DD`)
    pub date: String,
    pub timezone: String,
    #[serde(rename = "deviceid")]
    pub device_id: Option<String>,
    #[serde(rename = "hash_deviceid")]
    pub hash_device_id: Option<String>,
    pub brand: i64,
    pub is_tracker: bool,
    pub steps: i64,
    /// Distance in meters
    pub distance: f64,
    /// Elevation climbed in meters
    pub elevation: f64,
    /// Seconds of soft activity
    pub soft: i64,
    /// Seconds of moderate activity
    pub moderate: i64,
    /// Seconds of intense activity
    pub intense: i64,
    /// Total active seconds
    pub active: i64,
    /// Active calories (kcal)
    pub calories: f64,
    /// Total calories including BMR (kcal)
    pub totalcalories: f64,
    pub hr_average: i64,
    pub hr_min: i64,
    pub hr_max: i64,
    pub hr_zone_0: i64,
    pub hr_zone_1: i64,
    pub hr_zone_2: i64,
    pub hr_zone_3: i64,
}
