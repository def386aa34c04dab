// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Request parameters and response records for the Withings API.

pub mod activity;
pub(crate) mod de;
pub mod intraday;
pub mod measure;
pub mod token;
pub mod workout;

pub use activity::{Activity, ActivityPage, ActivityParams, ACTIVITY_DATA_FIELDS};
pub use intraday::{
    IntradayActivityParams, IntradayActivityResponse, IntradaySample, INTRADAY_DATA_FIELDS,
};
pub use measure::{
    measure_type_code, measure_type_name, Measure, MeasureCategory, MeasureGroup, MeasurePage,
    MeasureParams, MEASURE_TYPES,
};
pub use token::{Token, REFRESH_TOKEN_LIFETIME_HOURS};
pub use workout::{
    workout_category_code, workout_category_name, Workout, WorkoutData, WorkoutPage,
    WorkoutParams, WORKOUT_CATEGORIES, WORKOUT_DATA_FIELDS,
};

/// A response page that carries an offset cursor.
///
/// An offset of 0 means there are no further pages.
pub trait Paginated {
    type Record;

    /// Split the page into its records and the continuation offset.
    fn into_parts(self) -> (Vec<Self::Record>, u64);
}
