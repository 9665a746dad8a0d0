//! Column order (and code-table fingerprint) the classifier was trained with.

use crate::encoding::DEFAULT_COLUMNS;
use crate::error::{Result, RiskError};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelManifest {
    /// Feature columns in model input order
    pub columns: Vec<String>,
    /// Fingerprint of the code tables used at training time, if recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}

impl Default for ModelManifest {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS.iter().map(|c| c.to_string()).collect(),
            fingerprint: None,
        }
    }
}

impl ModelManifest {
    /// Read from JSON; a missing file means the default column order.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no model manifest; using default columns");
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Fails if a recorded fingerprint differs from the current encoder's.
    pub fn check_fingerprint(&self, fingerprint: &str) -> Result<()> {
        match self.fingerprint.as_deref() {
            Some(expected) if expected != fingerprint => Err(RiskError::ModelMismatch {
                expected: expected.to_string(),
                actual: fingerprint.to_string(),
            }),
            _ => Ok(()),
        }
    }
}
