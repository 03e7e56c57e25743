// src/web/handlers.rs
//! Handler bodies for the API routes. Routes themselves live in `mod.rs`.

use rocket::form::Form;
use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::engine::AnalysisEngine;
use crate::extract;
use crate::store::AnalysisStore;
use crate::utils::display_file_name;
use crate::web::types::{
    AnalysisResponse, MessageResponse, RejectionResponse, ResumeUploadForm,
};

const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;
const MAX_JOB_ROLE_CHARS: usize = 100;

type UploadResult = Result<Json<AnalysisResponse>, Custom<Json<RejectionResponse>>>;

fn bad_request(body: RejectionResponse) -> Custom<Json<RejectionResponse>> {
    Custom(Status::BadRequest, Json(body))
}

pub async fn upload_resume_handler(
    mut upload: Form<ResumeUploadForm<'_>>,
    engine: &State<AnalysisEngine>,
    store: &State<Box<dyn AnalysisStore>>,
) -> UploadResult {
    let job_role = upload.job_role.trim().to_string();
    if job_role.is_empty() {
        return Err(bad_request(RejectionResponse::new("Job role is required")));
    }
    if job_role.chars().count() > MAX_JOB_ROLE_CHARS {
        return Err(bad_request(RejectionResponse::new(
            "Job role must be less than 100 characters",
        )));
    }

    let file_size = upload.file.len();
    if file_size == 0 {
        return Err(bad_request(RejectionResponse::new("No file uploaded")));
    }
    if file_size > MAX_UPLOAD_BYTES {
        return Err(bad_request(
            RejectionResponse::new("File size exceeds 10MB limit").with_suggestions(vec![
                "Compress your resume file".to_string(),
                "Use a smaller file (max 10MB)".to_string(),
            ]),
        ));
    }

    let file_name = upload
        .file
        .raw_name()
        .and_then(|n| n.as_str())
        .map(display_file_name)
        .unwrap_or_else(|| "resume.txt".to_string());

    // Spool the upload to a temp path so the bytes can be read regardless of
    // whether Rocket buffered them in memory or on disk.
    let temp_path =
        std::env::temp_dir().join(format!("cvscan_upload_{}", Uuid::new_v4()));

    if let Err(e) = upload.file.persist_to(&temp_path).await {
        error!(
            job_role = %job_role,
            file_name = %file_name,
            "Failed to persist uploaded file: {}", e
        );
        return Err(Custom(
            Status::InternalServerError,
            Json(RejectionResponse::new("Failed to process uploaded file")),
        ));
    }

    let bytes = match tokio::fs::read(&temp_path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            let _ = tokio::fs::remove_file(&temp_path).await;
            error!(
                job_role = %job_role,
                file_name = %file_name,
                "Failed to read uploaded file: {}", e
            );
            return Err(Custom(
                Status::InternalServerError,
                Json(RejectionResponse::new("Failed to process uploaded file")),
            ));
        }
    };
    let _ = tokio::fs::remove_file(&temp_path).await;

    let text = match extract::extract_text(&file_name, &bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!(
                job_role = %job_role,
                file_name = %file_name,
                "Text extraction failed: {}", e
            );
            let suggestions = e.suggestions();
            return Err(bad_request(
                RejectionResponse::new(e.to_string()).with_suggestions(suggestions),
            ));
        }
    };

    match engine.analyze(&text, &job_role, &file_name) {
        Ok(analysis) => {
            let id = store.create(analysis.clone()).await;
            info!(
                %id,
                job_role = %job_role,
                file_name = %file_name,
                overall_score = analysis.overall_score,
                "Stored resume analysis"
            );
            Ok(Json(AnalysisResponse::new(analysis)))
        }
        Err(rejection) => {
            info!(
                job_role = %job_role,
                file_name = %file_name,
                text_len = text.len(),
                "Upload rejected: {}", rejection.message
            );
            Err(bad_request(RejectionResponse::from(rejection)))
        }
    }
}

pub async fn get_analysis_handler(
    id: Uuid,
    store: &State<Box<dyn AnalysisStore>>,
) -> Result<Json<AnalysisResponse>, Custom<Json<MessageResponse>>> {
    match store.get(id).await {
        Some(analysis) => Ok(Json(AnalysisResponse {
            success: true,
            message: "Analysis retrieved".to_string(),
            data: analysis,
        })),
        None => Err(Custom(
            Status::NotFound,
            Json(MessageResponse::error("Analysis not found")),
        )),
    }
}
