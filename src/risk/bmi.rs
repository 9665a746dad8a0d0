use crate::error::{Result, RiskError};

/// BMI from weight (kg) and height (cm), rounded to one decimal, ties to even.
pub fn derive_bmi(weight_kg: f64, height_cm: f64) -> Result<f64> {
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(RiskError::InvalidHeightForBmi { height_cm });
    }
    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    Ok((bmi * 10.0).round_ties_even() / 10.0)
}
