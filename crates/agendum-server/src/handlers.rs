//! Request handlers.
//!
//! Handlers are thin: scheduling is delegated to agendum-core, content
//! generation to the generator client. Generator failures are not HTTP
//! errors -- the fallback payload comes back with a 200 so a computed
//! schedule is never discarded because the model endpoint was down.

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use agendum_core::{compute_schedule, export_invite, AgendaRequest, Language, Schedule};

use crate::error::AppError;
use crate::state::AppState;

/// One attachment, already decoded to text by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct SlotsRequest {
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateAgendaRequest {
    pub topic: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub language: Option<Language>,
    #[serde(default)]
    pub email_content: Option<String>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Serialize)]
pub struct GenerateAgendaResponse {
    pub agenda: String,
}

#[derive(Debug, Deserialize)]
pub struct RefineTextRequest {
    pub text: String,
    #[serde(default)]
    pub instruction: Option<String>,
    #[serde(default)]
    pub language: Option<Language>,
}

#[derive(Debug, Serialize)]
pub struct RefineTextResponse {
    pub refined_text: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateIcsRequest {
    pub topic: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub location: Option<String>,
    pub agenda_content: String,
}

pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({"status": "ok"}))
}

/// Expose the deterministic scheduler directly.
pub async fn compute_slots(
    Json(request): Json<SlotsRequest>,
) -> Result<Json<Schedule>, AppError> {
    let schedule = compute_schedule(&request.start_time, &request.end_time)?;
    Ok(Json(schedule))
}

pub async fn generate_agenda(
    State(state): State<AppState>,
    Json(request): Json<GenerateAgendaRequest>,
) -> Result<Json<GenerateAgendaResponse>, AppError> {
    let schedule = compute_schedule(&request.start_time, &request.end_time)?;
    info!(topic = %request.topic, kind = ?schedule.kind, "generating agenda");

    let agenda_request = AgendaRequest {
        topic: request.topic,
        schedule,
        language: request.language.unwrap_or(state.defaults.language),
        email_content: request.email_content,
        attachments: request
            .attachments
            .into_iter()
            .map(|attachment| attachment.content)
            .collect(),
    };

    let agenda = state.generator.generate(&agenda_request).await;
    Ok(Json(GenerateAgendaResponse { agenda }))
}

pub async fn refine_text(
    State(state): State<AppState>,
    Json(request): Json<RefineTextRequest>,
) -> Result<Json<RefineTextResponse>, AppError> {
    let language = request.language.unwrap_or(state.defaults.language);
    let instruction = request
        .instruction
        .unwrap_or_else(|| default_refine_instruction(language).to_string());

    let refined_text = state.generator.refine(&request.text, &instruction).await;
    Ok(Json(RefineTextResponse { refined_text }))
}

pub async fn create_ics(
    State(state): State<AppState>,
    Json(request): Json<CreateIcsRequest>,
) -> Result<Response, AppError> {
    ics_response(&state, request)
}

/// Query-parameter twin of [`create_ics`], for direct browser links.
pub async fn create_ics_query(
    State(state): State<AppState>,
    Query(request): Query<CreateIcsRequest>,
) -> Result<Response, AppError> {
    ics_response(&state, request)
}

fn ics_response(state: &AppState, request: CreateIcsRequest) -> Result<Response, AppError> {
    let location = request
        .location
        .unwrap_or_else(|| state.defaults.location.clone());

    let export = export_invite(
        &request.topic,
        &request.start_time,
        &request.end_time,
        &location,
        &request.agenda_content,
    )?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/calendar".to_string()),
            (header::CONTENT_DISPOSITION, content_disposition(&export.filename)),
            (header::CACHE_CONTROL, "no-cache".to_string()),
        ],
        export.payload,
    )
        .into_response())
}

pub fn default_refine_instruction(language: Language) -> &'static str {
    match language {
        Language::German => "Please keep the text in German.",
        Language::English => "Keep the text in English.",
    }
}

fn content_disposition(filename: &str) -> String {
    // Quotes and control characters would break the header.
    let safe: String = filename
        .chars()
        .filter(|c| *c != '"' && !c.is_control())
        .collect();
    format!("inline; filename=\"{safe}\"")
}
