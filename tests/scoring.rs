use stroke_risk::patient::{Gender, PatientInput, ResidenceType, SmokingStatus};
use stroke_risk::risk::{derive_bmi, Factor, RiskEngine, RiskTier, MAX_SCORE};
use stroke_risk::RiskError;

fn patient(
    age: u8,
    hypertension: bool,
    heart_disease: bool,
    smoking_status: SmokingStatus,
    avg_glucose_level: f64,
    bmi: f64,
) -> PatientInput {
    PatientInput {
        age,
        gender: Gender::Female,
        bmi,
        avg_glucose_level,
        hypertension,
        heart_disease,
        ever_married: true,
        work_type: "Private".to_string(),
        residence_type: ResidenceType::Urban,
        smoking_status,
    }
}

#[test]
fn all_factors_high_scores_ten() {
    let engine = RiskEngine::new();
    let r = engine.score(&patient(65, true, true, SmokingStatus::Smokes, 150.0, 32.0));
    let contributions: Vec<u8> = r.breakdown.iter().map(|f| f.contribution).collect();
    assert_eq!(contributions, vec![2, 2, 2, 2, 1, 1]);
    assert_eq!(r.score, 10);
    assert_eq!(r.tier, RiskTier::High);
}

#[test]
fn healthy_young_patient_scores_zero() {
    let engine = RiskEngine::new();
    let r = engine.score(&patient(30, false, false, SmokingStatus::NeverSmoked, 100.0, 22.0));
    assert_eq!(r.score, 0);
    assert_eq!(r.tier, RiskTier::Low);
    assert!(r.breakdown.iter().all(|f| f.contribution == 0));
}

#[test]
fn middle_aged_hypertensive_former_smoker_is_medium() {
    let engine = RiskEngine::new();
    let r = engine.score(&patient(50, true, false, SmokingStatus::FormerlySmoked, 130.0, 28.0));
    assert_eq!(r.contribution(Factor::Age), Some(1));
    assert_eq!(r.contribution(Factor::HeartDisease), Some(0));
    assert_eq!(r.contribution(Factor::Hypertension), Some(2));
    assert_eq!(r.contribution(Factor::Smoking), Some(1));
    assert_eq!(r.contribution(Factor::Glucose), Some(0));
    assert_eq!(r.contribution(Factor::Bmi), Some(0));
    assert_eq!(r.score, 4);
    assert_eq!(r.tier, RiskTier::Medium);
}

#[test]
fn tier_boundaries() {
    assert_eq!(RiskTier::from_score(0), RiskTier::Low);
    assert_eq!(RiskTier::from_score(3), RiskTier::Low);
    assert_eq!(RiskTier::from_score(4), RiskTier::Medium);
    assert_eq!(RiskTier::from_score(6), RiskTier::Medium);
    assert_eq!(RiskTier::from_score(7), RiskTier::High);
    assert_eq!(RiskTier::from_score(10), RiskTier::High);
}

#[test]
fn thresholds_are_strict_for_glucose_and_bmi() {
    let engine = RiskEngine::new();
    let at = engine.score(&patient(30, false, false, SmokingStatus::NeverSmoked, 140.0, 30.0));
    assert_eq!(at.score, 0);
    let above = engine.score(&patient(30, false, false, SmokingStatus::NeverSmoked, 140.1, 30.1));
    assert_eq!(above.score, 2);
}

#[test]
fn age_steps_never_decrease_score() {
    let engine = RiskEngine::new();
    for (lo, hi) in [(44u8, 45u8), (59, 60)] {
        let a = engine.score(&patient(lo, false, true, SmokingStatus::Smokes, 100.0, 25.0));
        let b = engine.score(&patient(hi, false, true, SmokingStatus::Smokes, 100.0, 25.0));
        assert!(b.score >= a.score, "age {} -> {}", lo, hi);
        assert_eq!(b.score, a.score + 1);
    }
}

#[test]
fn score_stays_in_range_across_buckets() {
    let engine = RiskEngine::new();
    let smoking = [
        SmokingStatus::NeverSmoked,
        SmokingStatus::FormerlySmoked,
        SmokingStatus::Smokes,
    ];
    for age in [1u8, 44, 45, 59, 60, 100] {
        for flags in 0..4u8 {
            for status in smoking {
                for glucose in [60.0, 140.0, 141.0, 250.0] {
                    for bmi in [15.0, 30.0, 30.5, 50.0] {
                        let p = patient(age, flags & 1 == 1, flags & 2 == 2, status, glucose, bmi);
                        let r = engine.score(&p);
                        assert!(r.score <= MAX_SCORE);
                        assert_eq!(r.tier, RiskTier::from_score(r.score));
                        assert_eq!(r.breakdown.len(), 6);
                    }
                }
            }
        }
    }
}

#[test]
fn scoring_is_idempotent() {
    let engine = RiskEngine::new();
    let p = patient(52, true, false, SmokingStatus::Smokes, 180.0, 31.0);
    assert_eq!(engine.score(&p), engine.score(&p));
}

#[test]
fn breakdown_lines_name_bucket_and_contribution() {
    let engine = RiskEngine::new();
    let r = engine.score(&patient(65, true, false, SmokingStatus::FormerlySmoked, 150.0, 22.0));
    let lines: Vec<String> = r.breakdown.iter().map(|f| f.to_string()).collect();
    assert_eq!(
        lines,
        vec![
            "• Age: 2 (60+)",
            "• Heart Disease: 0 (no)",
            "• Hypertension: 2 (yes)",
            "• Smoking: 1 (former)",
            "• Glucose: 1 (>140)",
            "• BMI: 0 (≤30)",
        ]
    );
}

#[test]
fn bmi_from_weight_and_height() {
    assert_eq!(derive_bmi(70.0, 170.0).unwrap(), 24.2);
    assert_eq!(derive_bmi(100.0, 180.0).unwrap(), 30.9);
}

#[test]
fn bmi_exact_half_rounds_to_even() {
    assert_eq!(derive_bmi(97.0, 200.0).unwrap(), 24.2);
    assert_eq!(derive_bmi(121.0, 200.0).unwrap(), 30.2);
    assert_eq!(derive_bmi(99.0, 200.0).unwrap(), 24.8);
}

#[test]
fn bmi_needs_positive_height() {
    for h in [0.0, -170.0, f64::NAN] {
        match derive_bmi(70.0, h) {
            Err(RiskError::InvalidHeightForBmi { .. }) => {}
            other => panic!("height {}: unexpected {:?}", h, other),
        }
    }
}
