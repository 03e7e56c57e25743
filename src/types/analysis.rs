// src/types/analysis.rs
//! Analysis record types shared by the engine, the store and the web layer.
//!
//! Wire names are camelCase with `_id` for the record identifier, matching
//! what the frontend consumes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Contact details extracted from the top of a resume. Any field may be
/// absent; presence of `email`/`phone` implies the value matched the
/// corresponding pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Structured sections of a resume. Sequences are empty when the section was
/// not detected; `skills` is deduplicated case-insensitively preserving
/// first-seen casing and order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sections {
    pub contact_info: ContactInfo,
    pub skills: Vec<String>,
    pub education: Vec<String>,
    pub experience: Vec<String>,
    pub projects: Vec<String>,
    pub certifications: Vec<String>,
}

/// The four sub-scores, each 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub structure_score: u8,
    pub skills_score: u8,
    pub content_score: u8,
    pub ats_compatibility: u8,
}

/// A persisted analysis record. Created once per accepted upload and
/// immutable thereafter. `overall_score` is derived from `score_breakdown`
/// via the configured weights and is never set independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub uploaded_file_name: String,
    pub job_role: String,
    pub uploaded_at: DateTime<Utc>,
    pub overall_score: u8,
    pub score_breakdown: ScoreBreakdown,
    pub sections: Sections,
    pub issues: Vec<String>,
    pub suggested_keywords: Vec<String>,
    pub suggested_roles: Vec<String>,
}

/// Why a document was not accepted for scoring. This is a user-facing
/// result, not a server fault; the web layer maps it to a 400 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl Rejection {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
            suggestions: Vec::new(),
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }
}
