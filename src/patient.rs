//! Patient attributes: raw form values and the validated record the scorer consumes.

use crate::error::{Result, RiskError};
use crate::risk::derive_bmi;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const AGE_RANGE: (u8, u8) = (1, 100);
pub const BMI_RANGE: (f64, f64) = (15.0, 50.0);
pub const GLUCOSE_RANGE: (f64, f64) = (60.0, 250.0);
pub const WEIGHT_RANGE: (f64, f64) = (30.0, 200.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl FromStr for Gender {
    type Err = RiskError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            "Other" => Ok(Gender::Other),
            _ => Err(RiskError::UnknownCategory {
                field: "gender",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResidenceType {
    Urban,
    Rural,
}

impl ResidenceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResidenceType::Urban => "Urban",
            ResidenceType::Rural => "Rural",
        }
    }
}

impl FromStr for ResidenceType {
    type Err = RiskError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Urban" => Ok(ResidenceType::Urban),
            "Rural" => Ok(ResidenceType::Rural),
            _ => Err(RiskError::UnknownCategory {
                field: "Residence_type",
                value: s.to_string(),
            }),
        }
    }
}

/// Smoking history. The dataset's `Unknown` sentinel is not a valid value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SmokingStatus {
    #[serde(rename = "formerly smoked")]
    FormerlySmoked,
    #[serde(rename = "never smoked")]
    NeverSmoked,
    #[serde(rename = "smokes")]
    Smokes,
}

impl SmokingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SmokingStatus::FormerlySmoked => "formerly smoked",
            SmokingStatus::NeverSmoked => "never smoked",
            SmokingStatus::Smokes => "smokes",
        }
    }
}

impl FromStr for SmokingStatus {
    type Err = RiskError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "formerly smoked" => Ok(SmokingStatus::FormerlySmoked),
            "never smoked" => Ok(SmokingStatus::NeverSmoked),
            "smokes" => Ok(SmokingStatus::Smokes),
            _ => Err(RiskError::UnknownCategory {
                field: "smoking_status",
                value: s.to_string(),
            }),
        }
    }
}

macro_rules! display_as_str {
    ($($t:ty),*) => {
        $(impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(Gender, ResidenceType, SmokingStatus);

/// How the BMI was entered on the form
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BmiEntry {
    Direct(f64),
    Measured { weight_kg: f64, height_cm: f64 },
}

/// Field values as entered, before range checks and category parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientForm {
    pub age: i64,
    pub gender: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    pub avg_glucose_level: f64,
    #[serde(default)]
    pub hypertension: bool,
    #[serde(default)]
    pub heart_disease: bool,
    #[serde(default)]
    pub ever_married: bool,
    pub work_type: String,
    pub residence_type: String,
    pub smoking_status: String,
}

/// Validated patient record. All numeric fields are inside their domains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientInput {
    pub age: u8,
    pub gender: Gender,
    pub bmi: f64,
    pub avg_glucose_level: f64,
    pub hypertension: bool,
    pub heart_disease: bool,
    pub ever_married: bool,
    pub work_type: String,
    pub residence_type: ResidenceType,
    pub smoking_status: SmokingStatus,
}

fn check_range(field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<f64> {
    if value.is_finite() && value >= min && value <= max {
        Ok(value)
    } else {
        Err(RiskError::OutOfRangeInput {
            field,
            value,
            min,
            max,
        })
    }
}

impl PatientForm {
    pub fn bmi_entry(&self) -> Result<BmiEntry> {
        match (self.bmi, self.weight_kg, self.height_cm) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => Err(RiskError::AmbiguousBmi),
            (Some(bmi), None, None) => Ok(BmiEntry::Direct(bmi)),
            (None, Some(weight_kg), Some(height_cm)) => Ok(BmiEntry::Measured {
                weight_kg,
                height_cm,
            }),
            _ => Err(RiskError::MissingBmi),
        }
    }

    /// Range-check numbers, resolve BMI and parse the fixed enums.
    ///
    /// `work_type` is only checked later, against the reference dataset.
    pub fn validate(&self) -> Result<PatientInput> {
        let (age_min, age_max) = AGE_RANGE;
        if self.age < i64::from(age_min) || self.age > i64::from(age_max) {
            return Err(RiskError::OutOfRangeInput {
                field: "age",
                value: self.age as f64,
                min: f64::from(age_min),
                max: f64::from(age_max),
            });
        }

        let bmi = match self.bmi_entry()? {
            BmiEntry::Direct(bmi) => check_range("bmi", bmi, BMI_RANGE)?,
            BmiEntry::Measured {
                weight_kg,
                height_cm,
            } => {
                let weight_kg = check_range("weight_kg", weight_kg, WEIGHT_RANGE)?;
                derive_bmi(weight_kg, height_cm)?
            }
        };

        Ok(PatientInput {
            age: self.age as u8,
            gender: self.gender.parse()?,
            bmi,
            avg_glucose_level: check_range(
                "avg_glucose_level",
                self.avg_glucose_level,
                GLUCOSE_RANGE,
            )?,
            hypertension: self.hypertension,
            heart_disease: self.heart_disease,
            ever_married: self.ever_married,
            work_type: self.work_type.clone(),
            residence_type: self.residence_type.parse()?,
            smoking_status: self.smoking_status.parse()?,
        })
    }
}
