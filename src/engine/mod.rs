// src/engine/mod.rs
//! The resume analysis engine: a pure, single-pass pipeline from extracted
//! text plus target job role to either a scored `Analysis` record or a
//! structured `Rejection`. Stateless apart from configuration; safe to call
//! concurrently.

pub mod catalog;
pub mod parser;
pub mod scorer;
pub mod validator;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::config::AnalyzerConfig;
use crate::types::{Analysis, Rejection};

pub struct AnalysisEngine {
    config: AnalyzerConfig,
}

impl AnalysisEngine {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Run the full pipeline: validate, parse, score. One atomic pass with
    /// no retries or intermediate states.
    pub fn analyze(
        &self,
        text: &str,
        job_role: &str,
        file_name: &str,
    ) -> Result<Analysis, Rejection> {
        validator::validate(text, &self.config.validation)?;

        let sections = parser::parse(text);
        let outcome = scorer::score(&sections, job_role, &self.config);

        info!(
            job_role,
            file_name,
            text_len = text.len(),
            overall_score = outcome.overall_score,
            "Resume analysis complete"
        );

        Ok(Analysis {
            id: Uuid::new_v4(),
            uploaded_file_name: file_name.to_string(),
            job_role: job_role.to_string(),
            uploaded_at: Utc::now(),
            overall_score: outcome.overall_score,
            score_breakdown: outcome.breakdown,
            sections,
            issues: outcome.issues,
            suggested_keywords: outcome.suggested_keywords,
            suggested_roles: outcome.suggested_roles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "\
John Smith
john.smith@email.com
(555) 123-4567

EDUCATION
B.S. Computer Science, Stanford University

EXPERIENCE
Software Engineer at Acme Corp
Developed billing services handling 2M requests per day

SKILLS
Python, Rust, Docker, Kubernetes, SQL
";

    #[test]
    fn accepted_resume_yields_consistent_record() {
        let engine = AnalysisEngine::new(AnalyzerConfig::default());
        let analysis = engine.analyze(RESUME, "Backend Developer", "resume.txt").unwrap();

        assert_eq!(analysis.uploaded_file_name, "resume.txt");
        assert_eq!(analysis.job_role, "Backend Developer");
        assert!(analysis.overall_score <= 100);
        assert_eq!(
            analysis.overall_score,
            scorer::overall_score(&analysis.score_breakdown, engine.config())
        );
    }

    #[test]
    fn repeated_analysis_is_identical_modulo_id_and_timestamp() {
        let engine = AnalysisEngine::new(AnalyzerConfig::default());
        let a = engine.analyze(RESUME, "Backend Developer", "resume.txt").unwrap();
        let b = engine.analyze(RESUME, "Backend Developer", "resume.txt").unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(a.sections, b.sections);
        assert_eq!(a.score_breakdown, b.score_breakdown);
        assert_eq!(a.overall_score, b.overall_score);
        assert_eq!(a.issues, b.issues);
        assert_eq!(a.suggested_keywords, b.suggested_keywords);
        assert_eq!(a.suggested_roles, b.suggested_roles);
    }

    #[test]
    fn rejected_document_produces_no_record() {
        let engine = AnalysisEngine::new(AnalyzerConfig::default());
        let rejection = engine.analyze("just a note", "Backend Developer", "note.txt");
        assert!(rejection.is_err());
    }
}
