// src/web/types.rs
//! Request and response types for the HTTP API.

use rocket::form::FromForm;
use rocket::fs::TempFile;
use rocket::serde::Serialize;

use crate::types::{Analysis, Rejection};

#[derive(FromForm)]
pub struct ResumeUploadForm<'f> {
    pub file: TempFile<'f>,
    #[field(name = "jobRole")]
    pub job_role: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct AnalysisResponse {
    pub success: bool,
    pub message: String,
    pub data: Analysis,
}

impl AnalysisResponse {
    pub fn new(analysis: Analysis) -> Self {
        Self {
            success: true,
            message: "Resume analyzed successfully".to_string(),
            data: analysis,
        }
    }
}

/// 400 body for uploads that fail validation or basic input checks.
#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct RejectionResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl RejectionResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            details: None,
            suggestions: Vec::new(),
        }
    }

    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }
}

impl From<Rejection> for RejectionResponse {
    fn from(rejection: Rejection) -> Self {
        Self {
            success: false,
            message: rejection.message,
            details: rejection.details,
            suggestions: rejection.suggestions,
        }
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "OK",
            message: "Resume analysis service is running",
        }
    }
}
