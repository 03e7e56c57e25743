// src/lib.rs
//! Resume upload-and-scoring service. The core is a deterministic analysis
//! engine (validate, parse, score); around it sit a Rocket API, an injected
//! analysis store and a text-extraction collaborator.

pub mod config;
pub mod engine;
pub mod extract;
pub mod store;
pub mod types;
pub mod utils;
pub mod web;

pub use config::AnalyzerConfig;
pub use engine::AnalysisEngine;
pub use store::{AnalysisStore, InMemoryStore};
pub use types::{Analysis, Rejection};
pub use web::start_web_server;
