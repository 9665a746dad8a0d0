//! Stroke risk — rule-based risk scoring over patient attributes.
//!
//! Modular structure:
//! - [`patient`] — Form values, validation, validated patient record
//! - [`encoding`] — Reference-dataset code tables and record encoding
//! - [`risk`] — Rule-based risk score, tiers, breakdown, BMI derivation
//! - [`model`] — Optional ONNX classifier over the encoded record
//! - [`assess`] — Encoding + scoring + prediction for one patient
//! - [`report`] — Display modes and text/JSON rendering
//! - [`logging`] — Structured logging

pub mod assess;
pub mod cli;
pub mod config;
pub mod encoding;
pub mod error;
pub mod logging;
pub mod model;
pub mod patient;
pub mod report;
pub mod risk;

pub use assess::{Assessment, Assessor};
pub use config::AppConfig;
pub use encoding::{CategoricalField, CategoryEncoder, CodeTable, EncodedRecord};
pub use error::{Result, RiskError};
pub use logging::StructuredLogger;
pub use model::{ModelManifest, ModelPrediction, StrokeClassifier};
pub use patient::{PatientForm, PatientInput};
pub use report::DisplayMode;
pub use risk::{RiskEngine, RiskResult, RiskTier};
