// src/config.rs
//! Analyzer configuration: scoring weights, validation thresholds and
//! suggestion caps. Loaded from a TOML file when present, otherwise the
//! documented defaults apply.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub weights: ScoreWeights,
    pub validation: ValidationConfig,
    pub suggestions: SuggestionConfig,
}

/// Weights applied to the four sub-scores when deriving the overall score.
/// Must sum to 1.0.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub structure: f64,
    pub skills: f64,
    pub content: f64,
    pub ats: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            structure: 0.25,
            skills: 0.30,
            content: 0.25,
            ats: 0.20,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Evidence points a document must accumulate to count as a resume.
    pub resume_threshold: i32,
    /// Evidence ceiling under which non-resume indicators veto acceptance.
    pub non_resume_override_ceiling: i32,
    /// Documents shorter than this many characters are rejected outright.
    pub min_text_chars: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            resume_threshold: 18,
            non_resume_override_ceiling: 25,
            min_text_chars: 50,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    /// Maximum number of missing role keywords surfaced per analysis.
    pub max_keywords: usize,
    /// Maximum number of alternative roles surfaced per analysis.
    pub max_roles: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            max_keywords: 10,
            max_roles: 3,
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        info!("Loaded analyzer configuration from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let w = &self.weights;
        for (name, value) in [
            ("structure", w.structure),
            ("skills", w.skills),
            ("content", w.content),
            ("ats", w.ats),
        ] {
            if !(0.0..=1.0).contains(&value) {
                anyhow::bail!("Weight '{}' must be between 0 and 1, got {}", name, value);
            }
        }

        let sum = w.structure + w.skills + w.content + w.ats;
        if (sum - 1.0).abs() > 1e-6 {
            anyhow::bail!("Score weights must sum to 1.0, got {}", sum);
        }

        if self.validation.resume_threshold <= 0 {
            anyhow::bail!("resume_threshold must be positive");
        }

        Ok(())
    }
}
