//! stroke-risk entrypoint: loads the reference dataset once, then scores one
//! patient (`assess`) or a stream of NDJSON records (`batch`).

use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use stroke_risk::{
    assess::Assessor,
    cli::{BatchArgs, Cli, Commands, OutputArgs},
    config::AppConfig,
    encoding::{CategoricalField, CategoryEncoder},
    logging::StructuredLogger,
    model::{ModelManifest, StrokeClassifier},
    patient::{PatientForm, PatientInput},
    report::{render_text, AssessmentReport, DisplayMode},
    Assessment,
};
use tracing::{info, warn};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

fn build_assessor(
    encoder: CategoryEncoder,
    config: &AppConfig,
    no_model: bool,
) -> Result<Assessor, BoxError> {
    let classifier = if no_model || !config.model.enabled {
        None
    } else {
        let manifest = ModelManifest::load(&config.model.manifest_path)?;
        Some(StrokeClassifier::load(
            &config.model.model_path,
            manifest,
            &encoder.fingerprint(),
        )?)
    };
    Ok(Assessor::new(encoder, classifier))
}

fn write_assessment(
    out: &mut impl Write,
    patient: &PatientInput,
    assessment: &Assessment,
    output: &OutputArgs,
    default_mode: DisplayMode,
) -> io::Result<()> {
    if output.json {
        StructuredLogger::emit_json(&AssessmentReport::new(patient, assessment), out)
    } else {
        let mode = output.display.unwrap_or(default_mode);
        write!(out, "{}", render_text(assessment, mode))
    }
}

fn run_batch(assessor: &Assessor, args: &BatchArgs, default_mode: DisplayMode) -> Result<(), BoxError> {
    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut ok = 0usize;
    let mut failed = 0usize;
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let lineno = idx + 1;
        let result = serde_json::from_str::<PatientForm>(&line)
            .map_err(stroke_risk::RiskError::from)
            .and_then(|form| assessor.assess_form(&form));
        match result {
            Ok((patient, assessment)) => {
                ok += 1;
                write_assessment(&mut out, &patient, &assessment, &args.output, default_mode)?;
                if !args.output.json {
                    writeln!(out)?;
                }
            }
            Err(e) => {
                failed += 1;
                warn!(line = lineno, error = %e, "record rejected");
                if args.output.json {
                    let err = serde_json::json!({ "line": lineno, "error": e.to_string() });
                    StructuredLogger::emit_json(&err, &mut out)?;
                } else {
                    writeln!(out, "line {}: {}", lineno, e)?;
                    writeln!(out)?;
                }
            }
        }
    }
    info!(ok, failed, "batch complete");
    Ok(())
}

fn print_categories(encoder: &CategoryEncoder) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for field in CategoricalField::ALL {
        let table = encoder.table(field);
        writeln!(out, "{} ({} values)", table.field(), table.len())?;
        for (code, value) in table.iter() {
            writeln!(out, "  {}  {}", code, value)?;
        }
    }
    writeln!(out, "fingerprint {}", encoder.fingerprint())
}

fn main() -> Result<(), BoxError> {
    let cli = Cli::parse();
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from("config.json"));
    let config = AppConfig::load(&config_path);

    StructuredLogger::init(config.log.json, &config.log.level);

    let dataset = cli.dataset.clone().unwrap_or_else(|| config.dataset_path.clone());
    let encoder = CategoryEncoder::load(&dataset)?;

    match &cli.command {
        Commands::Categories => print_categories(&encoder)?,
        Commands::Assess(args) => {
            let assessor = build_assessor(encoder, &config, cli.no_model)?;
            let (patient, assessment) = assessor.assess_form(&args.to_form())?;
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_assessment(&mut out, &patient, &assessment, &args.output, config.display)?;
        }
        Commands::Batch(args) => {
            let assessor = build_assessor(encoder, &config, cli.no_model)?;
            run_batch(&assessor, args, config.display)?;
        }
    }

    Ok(())
}
