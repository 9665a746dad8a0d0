//! Rendering of an assessment for a presentation layer. Display mode is chosen
//! by the caller per request.

use crate::assess::Assessment;
use crate::patient::PatientInput;
use crate::risk::{RiskTier, MAX_SCORE, SCORE_GUIDE};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Score, tier and advice
    #[default]
    Summary,
    /// Summary plus factor breakdown and score guide
    Detailed,
}

/// Serialisable envelope for one assessment
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport<'a> {
    pub id: String,
    pub assessed_at: DateTime<Utc>,
    pub patient: &'a PatientInput,
    #[serde(flatten)]
    pub assessment: &'a Assessment,
}

impl<'a> AssessmentReport<'a> {
    pub fn new(patient: &'a PatientInput, assessment: &'a Assessment) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            assessed_at: Utc::now(),
            patient,
            assessment,
        }
    }
}

fn tier_heading(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::High => "High Risk of Stroke!",
        RiskTier::Medium => "Medium Risk of Stroke",
        RiskTier::Low => "Low Risk of Stroke",
    }
}

pub fn render_text(assessment: &Assessment, mode: DisplayMode) -> String {
    let risk = &assessment.risk;
    let mut out = String::new();
    let _ = writeln!(out, "Risk Score: {}/{}", risk.score, MAX_SCORE);
    let _ = writeln!(out, "{}", tier_heading(risk.tier));
    let _ = writeln!(out, "{}", risk.tier.advice());

    if let Some(model) = assessment.model {
        let verdict = if model.stroke { "stroke" } else { "no stroke" };
        match model.probability {
            Some(p) => {
                let _ = writeln!(out, "Model prediction: {} (p = {:.2})", verdict, p);
            }
            None => {
                let _ = writeln!(out, "Model prediction: {}", verdict);
            }
        }
    }

    if mode == DisplayMode::Detailed {
        let _ = writeln!(out);
        let _ = writeln!(out, "Risk Factor Breakdown");
        for factor in &risk.breakdown {
            let _ = writeln!(out, "{}", factor);
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "Risk Score Guide");
        for (range, tier) in SCORE_GUIDE {
            let _ = writeln!(out, "{}: {} risk", range, tier);
        }
    }
    out
}
