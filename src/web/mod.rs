// src/web/mod.rs
//! Rocket service layer: routes, CORS, error catchers and server startup.
//! All scoring semantics live in the engine; this layer only maps HTTP to
//! engine and store calls.

pub mod handlers;
pub mod types;

use anyhow::Result;
use rocket::data::{Limits, ToByteUnit};
use rocket::fairing::{Fairing, Info, Kind};
use rocket::form::Form;
use rocket::http::{Header, Status};
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Request, Response, State};
use tracing::info;
use uuid::Uuid;

use crate::config::AnalyzerConfig;
use crate::engine::AnalysisEngine;
use crate::store::{AnalysisStore, InMemoryStore};
use types::{AnalysisResponse, HealthResponse, MessageResponse, RejectionResponse, ResumeUploadForm};

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
        response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
    }
}

#[post("/resume/upload", data = "<upload>")]
pub async fn upload_resume(
    upload: Form<ResumeUploadForm<'_>>,
    engine: &State<AnalysisEngine>,
    store: &State<Box<dyn AnalysisStore>>,
) -> Result<Json<AnalysisResponse>, Custom<Json<RejectionResponse>>> {
    handlers::upload_resume_handler(upload, engine, store).await
}

#[get("/resume/analysis/<id>")]
pub async fn get_analysis(
    id: Uuid,
    store: &State<Box<dyn AnalysisStore>>,
) -> Result<Json<AnalysisResponse>, Custom<Json<MessageResponse>>> {
    handlers::get_analysis_handler(id, store).await
}

#[get("/health")]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers

#[rocket::catch(400)]
pub fn bad_request() -> Json<MessageResponse> {
    Json(MessageResponse::error("Invalid request format"))
}

#[rocket::catch(404)]
pub fn not_found() -> Json<MessageResponse> {
    Json(MessageResponse::error("Resource not found"))
}

#[rocket::catch(422)]
pub fn unprocessable() -> Json<MessageResponse> {
    Json(MessageResponse::error(
        "Invalid form data: expected multipart fields 'file' and 'jobRole'",
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<MessageResponse> {
    Json(MessageResponse::error("Internal server error"))
}

/// Build and launch the API server with the default in-memory store.
pub async fn start_web_server(config: AnalyzerConfig, port: u16) -> Result<()> {
    let engine = AnalysisEngine::new(config);
    let store: Box<dyn AnalysisStore> = Box::new(InMemoryStore::new());

    info!("Starting resume analysis API server on port {}", port);

    // Allow uploads up to the 10MB cap enforced by the handler, with some
    // headroom for the rest of the multipart body.
    let limits = Limits::default()
        .limit("file", 10.mebibytes())
        .limit("data-form", 12.mebibytes());

    let figment = rocket::Config::figment()
        .merge(("port", port))
        .merge(("limits", limits));

    rocket::custom(figment)
        .attach(Cors)
        .manage(engine)
        .manage(store)
        .register(
            "/api",
            catchers![bad_request, not_found, unprocessable, internal_error],
        )
        .mount(
            "/api",
            routes![upload_resume, get_analysis, health, options],
        )
        .launch()
        .await?;

    Ok(())
}
