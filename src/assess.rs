//! Composes encoding, rule-based scoring and optional model prediction.

use crate::encoding::CategoryEncoder;
use crate::error::Result;
use crate::model::{ModelPrediction, StrokeClassifier};
use crate::patient::{PatientForm, PatientInput};
use crate::risk::{RiskEngine, RiskResult};
use serde::Serialize;

/// Rule-based result (authoritative) and the classifier's output, side by side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub risk: RiskResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<ModelPrediction>,
}

pub struct Assessor {
    encoder: CategoryEncoder,
    engine: RiskEngine,
    classifier: Option<StrokeClassifier>,
}

impl Assessor {
    pub fn new(encoder: CategoryEncoder, classifier: Option<StrokeClassifier>) -> Self {
        Self {
            encoder,
            engine: RiskEngine::new(),
            classifier,
        }
    }

    pub fn model_enabled(&self) -> bool {
        self.classifier.as_ref().is_some_and(StrokeClassifier::is_enabled)
    }

    /// Encoding always runs, so unknown categories fail even with no model loaded.
    pub fn assess(&self, patient: &PatientInput) -> Result<Assessment> {
        let record = self.encoder.encode(patient)?;
        let risk = self.engine.score(patient);
        let model = self.classifier.as_ref().and_then(|c| c.predict(&record));
        tracing::debug!(
            score = risk.score,
            tier = %risk.tier,
            model_stroke = ?model.map(|m| m.stroke),
            "assessed"
        );
        Ok(Assessment { risk, model })
    }

    pub fn assess_form(&self, form: &PatientForm) -> Result<(PatientInput, Assessment)> {
        let patient = form.validate()?;
        let assessment = self.assess(&patient)?;
        Ok((patient, assessment))
    }
}
