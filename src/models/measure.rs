// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Raw body measurements (`action=getmeas`) and the measure type table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};
use crate::form::FormParams;
use crate::models::de::bool_from_int_or_bool;
use crate::models::Paginated;
use crate::time_utils::format_epoch;

/// Known measure type names and their codes.
pub const MEASURE_TYPES: &[(&str, u32)] = &[
    ("Weight", 1),
    ("Height", 4),
    ("FatFreeMassKG", 5),
    ("FatRatio", 6),
    ("FatMassWeight", 8),
    ("DiastolicBloodPressure", 9),
    ("SystolicBloodPressure", 10),
    ("HeartPulse", 11),
    ("Temperature", 12),
    ("SP02", 54),
    ("BodyTemperature", 71),
    ("SkinTemperature", 73),
    ("MuscleMass", 76),
    ("Hydration", 77),
    ("BoneMass", 88),
    ("PulseWaveVelocity", 91),
    ("VO2", 123),
    ("AtrialFibrillation", 130),
    ("QRS", 135),
    ("PR", 136),
    ("QT", 137),
    ("CorrectedQT", 138),
    ("AtrialFPPG", 139),
    ("Vascular", 155),
    ("NerveHealthScoreConductance", 167),
    ("ExtracellularWater", 168),
    ("IntracellularWater", 169),
    ("VisceralFat", 170),
    ("FatFreeMass", 173),
    ("FatMass", 174),
    ("MuscleMassSegments", 175),
    ("ElectrodermalActivityFeet", 196),
    ("BasalMetabolicRate", 226),
    ("MetabolicAge", 227),
    ("ElectrochemicalSkinConductance", 229),
];

pub fn measure_type_code(name: &str) -> Option<u32> {
    MEASURE_TYPES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, code)| *code)
}

pub fn measure_type_name(code: u32) -> Option<&'static str> {
    MEASURE_TYPES
        .iter()
        .find(|(_, c)| *c == code)
        .map(|(name, _)| *name)
}

/// Which kind of measure group to return.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MeasureCategory {
    /// Measurements taken by a device or entered by the user
    #[default]
    RealMeasures,
    /// Goals set by the user
    UserObjectives,
}

impl MeasureCategory {
    pub fn code(self) -> u32 {
        match self {
            MeasureCategory::RealMeasures => 1,
            MeasureCategory::UserObjectives => 2,
        }
    }
}

/// Query for measure groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeasureParams {
    /// Measure type codes, see [`MEASURE_TYPES`]. At least one is required.
    pub measure_types: Vec<u32>,
    pub category: MeasureCategory,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub last_update: Option<DateTime<Utc>>,
    pub offset: u64,
}

impl MeasureParams {
    /// Validate and encode the query as form fields.
    ///
    /// A single type is sent as `meastype`, several as `meastypes`.
    pub fn encode(&self) -> Result<FormParams> {
        if self.start_date.is_some() && self.last_update.is_some() {
            return Err(ClientError::Validation(
                "lastupdate cannot be set together with startdate".to_string(),
            ));
        }

        let mut form = FormParams::action("getmeas");
        match self.measure_types.as_slice() {
            [] => {
                return Err(ClientError::Validation(
                    "at least one measure type is required".to_string(),
                ))
            }
            [single] => {
                form.push("meastype", single.to_string());
            }
            many => {
                let codes: Vec<String> = many.iter().map(u32::to_string).collect();
                form.push_list("meastypes", &codes);
            }
        }

        form.push("category", self.category.code().to_string())
            .push_opt("lastupdate", self.last_update.map(format_epoch))
            .push_opt("startdate", self.start_date.map(format_epoch))
            .push_opt("enddate", self.end_date.map(format_epoch))
            .push_opt("offset", (self.offset > 0).then(|| self.offset.to_string()));
        Ok(form)
    }
}

/// One page of measure groups.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MeasurePage {
    #[serde(default)]
    pub updatetime: i64,
    #[serde(default)]
    pub timezone: String,
    #[serde(default, deserialize_with = "bool_from_int_or_bool")]
    pub more: bool,
    #[serde(default)]
    pub offset: u64,
    #[serde(default, rename = "measuregrps")]
    pub measure_groups: Vec<MeasureGroup>,
}

impl Paginated for MeasurePage {
    type Record = MeasureGroup;

    fn into_parts(self) -> (Vec<MeasureGroup>, u64) {
        (self.measure_groups, self.offset)
    }
}

/// Measurements recorded at the same instant by the same device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasureGroup {
    #[serde(rename = "grpid")]
    pub group_id: u64,
    pub attrib: i64,
    /// Measurement time (epoch seconds)
    pub date: i64,
    pub created: i64,
    pub modified: i64,
    pub category: u32,
    #[serde(rename = "deviceid")]
    pub device_id: Option<String>,
    #[serde(rename = "hash_deviceid")]
    pub hash_device_id: Option<String>,
    pub timezone: Option<String>,
    pub measures: Vec<Measure>,
}

/// A single measurement, stored as `value * 10^unit`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Measure {
    pub value: i64,
    #[serde(rename = "type")]
    pub measure_type: u32,
    pub unit: i32,
    pub algo: Option<i64>,
    pub fm: Option<f64>,
    pub position: Option<i64>,
}

impl Measure {
    /// The reading as a float.
    pub fn as_f64(&self) -> f64 {
        let value = self.value as f64;
        if self.unit < 0 {
            // 1530 / 100 is exactly 15.3, 1530 * 0.01 is not.
            value / 10f64.powf(f64::from(self.unit.unsigned_abs()))
        } else {
            value * 10f64.powi(self.unit)
        }
    }

    pub fn type_name(&self) -> Option<&'static str> {
        measure_type_name(self.measure_type)
    }
}
