//! Scoring benchmark: validated patient → rule-based risk result.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stroke_risk::patient::{Gender, PatientForm, PatientInput, ResidenceType, SmokingStatus};
use stroke_risk::risk::RiskEngine;

fn make_patient(age: u8) -> PatientInput {
    PatientInput {
        age,
        gender: Gender::Male,
        bmi: 31.4,
        avg_glucose_level: 152.0,
        hypertension: true,
        heart_disease: false,
        ever_married: true,
        work_type: "Private".to_string(),
        residence_type: ResidenceType::Urban,
        smoking_status: SmokingStatus::FormerlySmoked,
    }
}

fn bench_score(c: &mut Criterion) {
    let engine = RiskEngine::new();
    let patient = make_patient(63);

    c.bench_function("risk_score_single", |b| {
        b.iter(|| engine.score(black_box(&patient)))
    });
}

fn bench_validate_and_score(c: &mut Criterion) {
    let engine = RiskEngine::new();
    let form = PatientForm {
        age: 63,
        gender: "Male".to_string(),
        bmi: None,
        weight_kg: Some(92.0),
        height_cm: Some(171.0),
        avg_glucose_level: 152.0,
        hypertension: true,
        heart_disease: false,
        ever_married: true,
        work_type: "Private".to_string(),
        residence_type: "Urban".to_string(),
        smoking_status: "formerly smoked".to_string(),
    };

    c.bench_function("validate_and_score", |b| {
        b.iter(|| {
            let patient = black_box(&form).validate().unwrap();
            black_box(engine.score(&patient))
        })
    });
}

criterion_group!(benches, bench_score, bench_validate_and_score);
criterion_main!(benches);
