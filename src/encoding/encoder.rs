//! Builds code tables from the reference dataset and encodes validated patients.

use super::{CategoricalField, CodeTable, EncodedRecord};
use crate::error::{Result, RiskError};
use crate::patient::PatientInput;
use sha2::{Digest, Sha256};
use std::fmt::Write as _;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Smoking status the dataset uses for "not recorded"; such rows are excluded.
const UNKNOWN_SMOKING: &str = "Unknown";

/// Cell contents treated as missing (the usual CSV missing-value markers).
const NA_VALUES: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn is_missing(cell: &str) -> bool {
    NA_VALUES.contains(&cell.trim())
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Read-only code tables for every categorical field. Built once at startup.
#[derive(Debug, Clone)]
pub struct CategoryEncoder {
    tables: Vec<CodeTable>,
    work_types: Vec<String>,
}

impl CategoryEncoder {
    /// Load the reference dataset (CSV with header) from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let encoder = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            fingerprint = %encoder.fingerprint(),
            "reference dataset loaded"
        );
        Ok(encoder)
    }

    /// Rows with any missing cell, or with `Unknown` smoking status, are skipped.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::Reader::from_reader(reader);
        let headers = rdr.headers()?.clone();

        let mut positions = Vec::with_capacity(CategoricalField::ALL.len());
        for field in CategoricalField::ALL {
            let pos = headers
                .iter()
                .position(|h| h.trim() == field.column())
                .ok_or(RiskError::MissingColumn {
                    column: field.column(),
                })?;
            positions.push(pos);
        }
        let smoking_pos = positions[CategoricalField::SmokingStatus.index()];

        let mut observed: Vec<Vec<String>> = vec![Vec::new(); CategoricalField::ALL.len()];
        let mut kept = 0usize;
        let mut dropped = 0usize;
        for record in rdr.records() {
            let record = record?;
            if record.iter().any(is_missing) {
                dropped += 1;
                continue;
            }
            if record.get(smoking_pos).map(str::trim) == Some(UNKNOWN_SMOKING) {
                dropped += 1;
                continue;
            }
            kept += 1;
            for (values, &pos) in observed.iter_mut().zip(&positions) {
                if let Some(cell) = record.get(pos) {
                    let cell = cell.trim();
                    if !values.iter().any(|v| v == cell) {
                        values.push(cell.to_string());
                    }
                }
            }
        }
        debug!(kept, dropped, "reference rows filtered");

        let work_types = observed[CategoricalField::WorkType.index()].clone();
        let tables = CategoricalField::ALL
            .iter()
            .zip(observed)
            .map(|(field, values)| CodeTable::from_values(field.column(), values))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { tables, work_types })
    }

    pub fn table(&self, field: CategoricalField) -> &CodeTable {
        &self.tables[field.index()]
    }

    pub fn code(&self, field: CategoricalField, value: &str) -> Result<u32> {
        self.table(field).code(value)
    }

    /// Work types in the order they first appear in the dataset.
    pub fn work_types(&self) -> &[String] {
        &self.work_types
    }

    /// Encode a validated patient. Each categorical field uses its own code space.
    pub fn encode(&self, patient: &PatientInput) -> Result<EncodedRecord> {
        let gender = self.code(CategoricalField::Gender, patient.gender.as_str())?;
        let married = self.code(CategoricalField::EverMarried, yes_no(patient.ever_married))?;
        let work = self.code(CategoricalField::WorkType, &patient.work_type)?;
        let residence = self.code(
            CategoricalField::ResidenceType,
            patient.residence_type.as_str(),
        )?;
        let smoking = self.code(
            CategoricalField::SmokingStatus,
            patient.smoking_status.as_str(),
        )?;

        Ok(EncodedRecord {
            columns: vec![
                ("gender", gender as f32),
                ("age", f32::from(patient.age)),
                ("hypertension", f32::from(u8::from(patient.hypertension))),
                ("heart_disease", f32::from(u8::from(patient.heart_disease))),
                ("ever_married", married as f32),
                ("work_type", work as f32),
                ("Residence_type", residence as f32),
                ("avg_glucose_level", patient.avg_glucose_level as f32),
                ("bmi", patient.bmi as f32),
                ("smoking_status", smoking as f32),
            ],
        })
    }

    /// SHA-256 over every field's ordered values. Two encoders with the same
    /// fingerprint assign identical codes.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for table in &self.tables {
            hasher.update(table.field().as_bytes());
            hasher.update([0u8]);
            for value in table.values() {
                hasher.update(value.as_bytes());
                hasher.update([0x1fu8]);
            }
            hasher.update([0x1eu8]);
        }
        hasher
            .finalize()
            .iter()
            .fold(String::with_capacity(64), |mut out, b| {
                let _ = write!(out, "{:02x}", b);
                out
            })
    }
}
