//! Rule-based stroke risk: six independent sub-scores summed into 0..=10, then tiered.

use crate::patient::{PatientInput, SmokingStatus};
use serde::Serialize;
use std::fmt;

pub const MAX_SCORE: u8 = 10;
/// Lowest score in the Medium tier
pub const MEDIUM_FROM: u8 = 4;
/// Lowest score in the High tier
pub const HIGH_FROM: u8 = 7;

const GLUCOSE_THRESHOLD: f64 = 140.0;
const BMI_THRESHOLD: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn from_score(score: u8) -> Self {
        if score >= HIGH_FROM {
            RiskTier::High
        } else if score >= MEDIUM_FROM {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            RiskTier::Low => "Stay healthy and active!",
            RiskTier::Medium => "Keep monitoring health indicators.",
            RiskTier::High => "Please consult a medical professional urgently.",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Score ranges per tier, for display next to a detailed breakdown
pub const SCORE_GUIDE: [(&str, RiskTier); 3] = [
    ("0–3", RiskTier::Low),
    ("4–6", RiskTier::Medium),
    ("7–10", RiskTier::High),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Age,
    HeartDisease,
    Hypertension,
    Smoking,
    Glucose,
    Bmi,
}

impl Factor {
    pub fn label(&self) -> &'static str {
        match self {
            Factor::Age => "Age",
            Factor::HeartDisease => "Heart Disease",
            Factor::Hypertension => "Hypertension",
            Factor::Smoking => "Smoking",
            Factor::Glucose => "Glucose",
            Factor::Bmi => "BMI",
        }
    }
}

/// One line of the breakdown: which bucket the value fell into and what it added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskFactor {
    pub factor: Factor,
    pub contribution: u8,
    pub rationale: &'static str,
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "• {}: {} ({})",
            self.factor.label(),
            self.contribution,
            self.rationale
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskResult {
    pub score: u8,
    pub tier: RiskTier,
    pub breakdown: Vec<RiskFactor>,
}

impl RiskResult {
    pub fn contribution(&self, factor: Factor) -> Option<u8> {
        self.breakdown
            .iter()
            .find(|f| f.factor == factor)
            .map(|f| f.contribution)
    }
}

fn age_factor(age: u8) -> RiskFactor {
    let (contribution, rationale) = if age >= 60 {
        (2, "60+")
    } else if age >= 45 {
        (1, "45–59")
    } else {
        (0, "<45")
    };
    RiskFactor {
        factor: Factor::Age,
        contribution,
        rationale,
    }
}

fn flag_factor(factor: Factor, present: bool) -> RiskFactor {
    RiskFactor {
        factor,
        contribution: if present { 2 } else { 0 },
        rationale: if present { "yes" } else { "no" },
    }
}

fn smoking_factor(status: SmokingStatus) -> RiskFactor {
    let (contribution, rationale) = match status {
        SmokingStatus::Smokes => (2, "current"),
        SmokingStatus::FormerlySmoked => (1, "former"),
        SmokingStatus::NeverSmoked => (0, "never"),
    };
    RiskFactor {
        factor: Factor::Smoking,
        contribution,
        rationale,
    }
}

fn glucose_factor(glucose: f64) -> RiskFactor {
    let high = glucose > GLUCOSE_THRESHOLD;
    RiskFactor {
        factor: Factor::Glucose,
        contribution: u8::from(high),
        rationale: if high { ">140" } else { "≤140" },
    }
}

fn bmi_factor(bmi: f64) -> RiskFactor {
    let high = bmi > BMI_THRESHOLD;
    RiskFactor {
        factor: Factor::Bmi,
        contribution: u8::from(high),
        rationale: if high { ">30" } else { "≤30" },
    }
}

/// Stateless scorer; holds nothing between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskEngine;

impl RiskEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, patient: &PatientInput) -> RiskResult {
        let breakdown = vec![
            age_factor(patient.age),
            flag_factor(Factor::HeartDisease, patient.heart_disease),
            flag_factor(Factor::Hypertension, patient.hypertension),
            smoking_factor(patient.smoking_status),
            glucose_factor(patient.avg_glucose_level),
            bmi_factor(patient.bmi),
        ];
        let score: u8 = breakdown.iter().map(|f| f.contribution).sum();
        debug_assert!(score <= MAX_SCORE);
        RiskResult {
            score,
            tier: RiskTier::from_score(score),
            breakdown,
        }
    }
}
