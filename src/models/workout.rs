// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout sessions (`action=getworkouts`) and the workout category table.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::form::FormParams;
use crate::models::activity::validate_range_or_cursor;
use crate::models::de::bool_from_int_or_bool;
use crate::models::Paginated;
use crate::time_utils::{format_epoch, format_ymd};

/// Field names accepted by `data_fields` on the workout endpoint.
pub const WORKOUT_DATA_FIELDS: &[&str] = &[
    "calories",
    "intensity",
    "manual_distance",
    "manual_calories",
    "hr_average",
    "hr_min",
    "hr_max",
    "hr_zone_0",
    "hr_zone_1",
    "hr_zone_2",
    "hr_zone_3",
    "pause_duration",
    "algo_pause_duration",
    "spo2_average",
    "steps",
    "distance",
    "elevation",
    "pool_laps",
    "strokes",
    "pool_length",
];

/// Workout category codes and their display names.
pub const WORKOUT_CATEGORIES: &[(u32, &str)] = &[
    (1, "Walk"),
    (2, "Run"),
    (3, "Hiking"),
    (4, "Skating"),
    (5, "BMX"),
    (6, "Bicycling"),
    (7, "Swimming"),
    (8, "Surfing"),
    (9, "Kitesurfing"),
    (10, "Windsurfing"),
    (11, "Bodyboard"),
    (12, "Tennis"),
    (13, "Table tennis"),
    (14, "Squash"),
    (15, "Badminton"),
    (16, "Lift weights"),
    (17, "Fitness"),
    (18, "Elliptical"),
    (19, "Pilates"),
    (20, "Basket-ball"),
    (21, "Soccer"),
    (22, "Football"),
    (23, "Rugby"),
    (24, "Volley-ball"),
    (25, "Waterpolo"),
    (26, "Horse riding"),
    (27, "Golf"),
    (28, "Yoga"),
    (29, "Dancing"),
    (30, "Boxing"),
    (31, "Fencing"),
    (32, "Wrestling"),
    (33, "Martial arts"),
    (34, "Skiing"),
    (35, "Snowboarding"),
    (36, "Other"),
    (128, "No activity"),
    (187, "Rowing"),
    (188, "Zumba"),
    (191, "Baseball"),
    (192, "Handball"),
    (193, "Hockey"),
    (194, "Ice hockey"),
    (195, "Climbing"),
    (196, "Ice skating"),
    (272, "Multi-sport"),
    (306, "Indoor walk"),
    (307, "Indoor running"),
    (308, "Indoor cycling"),
];

/// Look up the display name of a workout category code.
pub fn workout_category_name(code: u32) -> Option<&'static str> {
    WORKOUT_CATEGORIES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Look up a workout category code by name (case-insensitive).
pub fn workout_category_code(name: &str) -> Option<u32> {
    WORKOUT_CATEGORIES
        .iter()
        .find(|(_, n)| n.eq_ignore_ascii_case(name))
        .map(|(code, _)| *code)
}

/// Query for workouts.
///
/// Either a `start_date`/`end_date` range or a `last_update` cursor, not both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutParams {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub last_update: Option<DateTime<Utc>>,
    pub offset: u64,
    pub data_fields: Vec<String>,
}

impl WorkoutParams {
    pub fn encode(&self) -> Result<FormParams> {
        validate_range_or_cursor(
            self.start_date.is_some(),
            self.end_date.is_some(),
            self.last_update.is_some(),
        )?;

        let mut form = FormParams::action("getworkouts");
        form.push_opt("lastupdate", self.last_update.map(format_epoch))
            .push_opt("startdateymd", self.start_date.map(format_ymd))
            .push_opt("enddateymd", self.end_date.map(format_ymd))
            .push_opt("offset", (self.offset > 0).then(|| self.offset.to_string()))
            .push_list("data_fields", &self.data_fields);
        Ok(form)
    }
}

/// One page of workouts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkoutPage {
    #[serde(default)]
    pub series: Vec<Workout>,
    #[serde(default, deserialize_with = "bool_from_int_or_bool")]
    pub more: bool,
    #[serde(default)]
    pub offset: u64,
}

impl Paginated for WorkoutPage {
    type Record = Workout;

    fn into_parts(self) -> (Vec<Workout>, u64) {
        (self.series, self.offset)
    }
}

/// A single workout session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Workout {
    pub id: u64,
    /// Category code, see [`WORKOUT_CATEGORIES`]
    pub category: u32,
    pub timezone: String,
    pub model: i64,
    pub attrib: i64,
    /// Start time (epoch seconds)
    #[serde(alias = "start_date")]
    pub startdate: i64,
    /// End time (epoch seconds)
    #[serde(alias = "end_date")]
    pub enddate: i64,
    /// Day (`YYYY-MM-DD`)
    pub date: String,
    /// Last modification (epoch seconds)
    pub modified: i64,
    #[serde(rename = "deviceid")]
    pub device_id: Option<String>,
    pub data: WorkoutData,
}

impl Workout {
    pub fn category_name(&self) -> Option<&'static str> {
        workout_category_name(self.category)
    }
}

/// Per-workout metrics. Only the requested data fields are populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkoutData {
    pub algo_pause_duration: Option<i64>,
    pub calories: Option<f64>,
    pub distance: Option<f64>,
    pub elevation: Option<f64>,
    pub hr_average: Option<i64>,
    pub hr_max: Option<i64>,
    pub hr_min: Option<i64>,
    pub hr_zone_0: Option<i64>,
    pub hr_zone_1: Option<i64>,
    pub hr_zone_2: Option<i64>,
    pub hr_zone_3: Option<i64>,
    pub intensity: Option<i64>,
    pub manual_calories: Option<f64>,
    pub manual_distance: Option<f64>,
    pub pause_duration: Option<i64>,
    pub pool_laps: Option<i64>,
    pub pool_length: Option<i64>,
    pub spo2_average: Option<i64>,
    pub steps: Option<i64>,
    pub strokes: Option<i64>,
}
