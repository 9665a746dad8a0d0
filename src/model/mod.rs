//! Optional pre-trained classifier over the encoded record.

mod manifest;
mod onnx;

pub use manifest::ModelManifest;
pub use onnx::{ModelPrediction, StrokeClassifier};
