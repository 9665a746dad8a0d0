//! ONNX Runtime inference for the pre-trained stroke classifier.
//! Input: [1, n_columns] f32 in manifest order. Output 0: class label, output 1: class probabilities.
//! If the model file is missing, runs in disabled mode (`predict` returns `None`).

use super::ModelManifest;
use crate::encoding::EncodedRecord;
use crate::error::{Result, RiskError};
use ndarray::{Array2, CowArray};
use ort::{Environment, Session, SessionBuilder, Value};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

/// Advisory output of the classifier. Never changes the rule-based tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelPrediction {
    pub stroke: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probability: Option<f32>,
}

pub struct StrokeClassifier {
    session: Option<Session>,
    _env: Option<Arc<Environment>>,
    columns: Vec<String>,
}

impl StrokeClassifier {
    /// Load model from path. `fingerprint` is the current encoder's; it must match
    /// the manifest's when the manifest records one and the model file exists.
    pub fn load(path: &Path, manifest: ModelManifest, fingerprint: &str) -> Result<Self> {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "ONNX model not found; model prediction disabled");
            if let Err(e) = manifest.check_fingerprint(fingerprint) {
                tracing::warn!(error = %e, "stale model manifest");
            }
            return Ok(Self {
                session: None,
                _env: None,
                columns: manifest.columns,
            });
        }

        manifest.check_fingerprint(fingerprint)?;

        let env = Environment::builder()
            .with_name("stroke-risk")
            .build()?
            .into_arc();
        let session = SessionBuilder::new(&env)?.with_model_from_file(path)?;
        tracing::info!(
            path = %path.display(),
            columns = manifest.columns.len(),
            "ONNX model loaded"
        );

        Ok(Self {
            session: Some(session),
            _env: Some(env),
            columns: manifest.columns,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.session.is_some()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns `None` when disabled or when inference fails (failure is logged).
    pub fn predict(&self, record: &EncodedRecord) -> Option<ModelPrediction> {
        let session = self.session.as_ref()?;
        match self.run(session, record) {
            Ok(p) => Some(p),
            Err(e) => {
                tracing::warn!(error = %e, "model inference failed");
                None
            }
        }
    }

    fn run(&self, session: &Session, record: &EncodedRecord) -> Result<ModelPrediction> {
        let values = record.to_columns(&self.columns);
        let arr = Array2::from_shape_vec((1, values.len()), values)
            .map_err(|e| RiskError::Model(e.to_string()))?;
        let array = CowArray::from(arr).into_dyn();
        let input = Value::from_array(session.allocator(), &array)?;
        let outputs = session.run(vec![input])?;

        let label_out = outputs
            .first()
            .ok_or_else(|| RiskError::Model("model produced no outputs".to_string()))?;
        let labels = label_out.try_extract::<i64>()?;
        let label = labels
            .view()
            .iter()
            .next()
            .copied()
            .ok_or_else(|| RiskError::Model("empty label tensor".to_string()))?;

        // Probabilities are only usable as a plain [1, 2] tensor.
        let probability = outputs
            .get(1)
            .and_then(|out| out.try_extract::<f32>().ok())
            .and_then(|probs| probs.view().iter().nth(1).copied());

        Ok(ModelPrediction {
            stroke: label != 0,
            probability,
        })
    }
}
