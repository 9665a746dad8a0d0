use crate::patient::PatientForm;
use crate::report::DisplayMode;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "stroke-risk", version, about = "Rule-based stroke risk scoring")]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "STROKE_RISK_CONFIG",
        help = "Config file (JSON)"
    )]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Reference dataset CSV (overrides config)")]
    pub dataset: Option<PathBuf>,

    #[arg(long, global = true, default_value_t = false, help = "Skip the classifier")]
    pub no_model: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score one patient from command-line fields
    Assess(AssessArgs),
    /// Score newline-delimited JSON patient records
    Batch(BatchArgs),
    /// Print the category code tables built from the reference dataset
    Categories,
}

#[derive(Debug, Clone, Args)]
pub struct OutputArgs {
    #[arg(long, value_enum, help = "Display mode (default from config)")]
    pub display: Option<DisplayMode>,

    #[arg(long, default_value_t = false, help = "Print one JSON report per line")]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct AssessArgs {
    #[arg(long)]
    pub age: i64,

    #[arg(long, help = "Male | Female | Other")]
    pub gender: String,

    #[arg(long, help = "BMI in kg/m² (or give --weight and --height)")]
    pub bmi: Option<f64>,

    #[arg(long, help = "Weight in kg")]
    pub weight: Option<f64>,

    #[arg(long, help = "Height in cm")]
    pub height: Option<f64>,

    #[arg(long, help = "Average glucose level (mg/dL)")]
    pub glucose: f64,

    #[arg(long, default_value_t = false)]
    pub hypertension: bool,

    #[arg(long, default_value_t = false)]
    pub heart_disease: bool,

    #[arg(long, default_value_t = false)]
    pub ever_married: bool,

    #[arg(long)]
    pub work_type: String,

    #[arg(long, help = "Urban | Rural")]
    pub residence: String,

    #[arg(long, help = "formerly smoked | never smoked | smokes")]
    pub smoking: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl AssessArgs {
    pub fn to_form(&self) -> PatientForm {
        PatientForm {
            age: self.age,
            gender: self.gender.clone(),
            bmi: self.bmi,
            weight_kg: self.weight,
            height_cm: self.height,
            avg_glucose_level: self.glucose,
            hypertension: self.hypertension,
            heart_disease: self.heart_disease,
            ever_married: self.ever_married,
            work_type: self.work_type.clone(),
            residence_type: self.residence.clone(),
            smoking_status: self.smoking.clone(),
        }
    }
}

#[derive(Debug, Args)]
pub struct BatchArgs {
    #[arg(long, help = "NDJSON file of patient records (default: stdin)")]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}
