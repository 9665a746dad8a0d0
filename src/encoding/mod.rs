//! Category encoding: reference dataset → code tables → numeric record for the classifier.

mod encoder;
mod table;

pub use encoder::CategoryEncoder;
pub use table::CodeTable;

use serde::Serialize;

/// Column order of the combined record, as the training set lays it out
/// once the id and label columns are dropped.
pub const DEFAULT_COLUMNS: [&str; 10] = [
    "gender",
    "age",
    "hypertension",
    "heart_disease",
    "ever_married",
    "work_type",
    "Residence_type",
    "avg_glucose_level",
    "bmi",
    "smoking_status",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CategoricalField {
    Gender,
    EverMarried,
    WorkType,
    ResidenceType,
    SmokingStatus,
}

impl CategoricalField {
    pub const ALL: [CategoricalField; 5] = [
        CategoricalField::Gender,
        CategoricalField::EverMarried,
        CategoricalField::WorkType,
        CategoricalField::ResidenceType,
        CategoricalField::SmokingStatus,
    ];

    /// Column header in the reference dataset
    pub fn column(&self) -> &'static str {
        match self {
            CategoricalField::Gender => "gender",
            CategoricalField::EverMarried => "ever_married",
            CategoricalField::WorkType => "work_type",
            CategoricalField::ResidenceType => "Residence_type",
            CategoricalField::SmokingStatus => "smoking_status",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// Numeric record: named columns, categorical fields replaced by their codes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EncodedRecord {
    pub columns: Vec<(&'static str, f32)>,
}

impl EncodedRecord {
    pub fn get(&self, name: &str) -> Option<f32> {
        self.columns
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
    }

    /// Reindex into `order`; columns this record does not carry are 0.
    pub fn to_columns<S: AsRef<str>>(&self, order: &[S]) -> Vec<f32> {
        order
            .iter()
            .map(|name| self.get(name.as_ref()).unwrap_or(0.0))
            .collect()
    }
}
