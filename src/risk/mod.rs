//! Risk scoring: fixed weighted rules over patient attributes, plus BMI derivation.

mod bmi;
mod engine;

pub use bmi::derive_bmi;
pub use engine::{
    Factor, RiskEngine, RiskFactor, RiskResult, RiskTier, HIGH_FROM, MAX_SCORE, MEDIUM_FROM,
    SCORE_GUIDE,
};
