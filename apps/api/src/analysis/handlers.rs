//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, Query, State},
    http::{header, HeaderMap},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::advisor::{self, AdvisorAnswer};
use crate::analysis::report::{analyze_text, AnalysisResult};
use crate::analysis::roadmap::{roadmap_for_track, RoadmapStep};
use crate::analysis::scoring::{rank_tracks, RankedTrack};
use crate::catalog::{self, RoleEntry};
use crate::errors::AppError;
use crate::resume::{allowed_file, extract_text_from_pdf};
use crate::session::{session_cookie, MaybeSession};
use crate::state::AppState;

const RESUME_FIELD: &str = "resume";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Role triple selecting one catalog track.
#[derive(Debug, Deserialize)]
pub struct TrackQuery {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub track: String,
}

impl TrackQuery {
    /// Resolves the triple against the catalog; surrounding whitespace is ignored.
    pub fn resolve(&self) -> Result<RoleEntry, AppError> {
        catalog::lookup(self.role.trim(), self.category.trim(), self.track.trim()).ok_or_else(
            || {
                AppError::NotFound(format!(
                    "Unknown role track {} / {} / {}",
                    self.role, self.category, self.track
                ))
            },
        )
    }
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub session_id: Uuid,
    pub analysis: AnalysisResult,
}

#[derive(Debug, Serialize)]
pub struct SuitableResponse {
    pub current: AnalysisResult,
    pub top: Vec<RankedTrack>,
}

#[derive(Debug, Serialize)]
pub struct RoadmapResponse {
    pub current: AnalysisResult,
    pub steps: Vec<RoadmapStep>,
}

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub q: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze?role=&category=&track=
///
/// Multipart upload with a `resume` PDF field. Detects skills, scores them
/// against the track blueprint, and stores the result as the session's
/// current analysis.
pub async fn handle_analyze(
    State(state): State<AppState>,
    session: MaybeSession,
    Query(query): Query<TrackQuery>,
    multipart: Multipart,
) -> Result<(HeaderMap, Json<AnalyzeResponse>), AppError> {
    let entry = query.resolve()?;

    let (filename, data) = read_resume_field(multipart).await?;
    if !allowed_file(&filename) {
        return Err(AppError::Validation("Only PDF files are allowed.".to_string()));
    }

    let text = extract_text_from_pdf(data).await;
    let analysis = analyze_text(&entry, &text);

    let session_id = session.or_new();
    state.store.save(session_id, &analysis).await?;

    info!(
        "Analyzed resume for {} (session {session_id}): score={} detected={}",
        analysis.title,
        analysis.score,
        analysis.detected.len()
    );

    let mut headers = HeaderMap::new();
    if let Some(cookie) = session_cookie(session_id, state.config.session_ttl_secs) {
        headers.insert(header::SET_COOKIE, cookie);
    }

    Ok((
        headers,
        Json(AnalyzeResponse {
            session_id,
            analysis,
        }),
    ))
}

/// GET /api/v1/analysis
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    session: MaybeSession,
) -> Result<Json<AnalysisResult>, AppError> {
    Ok(Json(current_analysis(&state, session).await?))
}

/// GET /api/v1/suitable
///
/// Ranks every catalog track against the current detected skills.
pub async fn handle_suitable(
    State(state): State<AppState>,
    session: MaybeSession,
) -> Result<Json<SuitableResponse>, AppError> {
    let current = current_analysis(&state, session).await?;
    if current.detected.is_empty() {
        return Err(AppError::NoAnalysis);
    }

    let top = rank_tracks(&current.detected);
    Ok(Json(SuitableResponse { current, top }))
}

/// GET /api/v1/roadmap
pub async fn handle_roadmap(
    State(state): State<AppState>,
    session: MaybeSession,
) -> Result<Json<RoadmapResponse>, AppError> {
    let current = current_analysis(&state, session).await?;
    let steps = roadmap_for_track(
        &current.role,
        &current.category,
        &current.track,
        &current.detected,
        &state.tiers,
    );
    Ok(Json(RoadmapResponse { current, steps }))
}

/// POST /api/v1/ask
pub async fn handle_ask(
    State(state): State<AppState>,
    session: MaybeSession,
    Json(request): Json<AskRequest>,
) -> Result<Json<AdvisorAnswer>, AppError> {
    let current = current_analysis(&state, session).await?;
    let answer = advisor::ask(state.chat.as_deref(), &current, &request.q).await?;
    Ok(Json(answer))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

async fn current_analysis(
    state: &AppState,
    session: MaybeSession,
) -> Result<AnalysisResult, AppError> {
    let Some(session_id) = session.0 else {
        return Err(AppError::NoAnalysis);
    };
    state
        .store
        .load(session_id)
        .await?
        .ok_or(AppError::NoAnalysis)
}

/// Returns the filename and bytes of the non-empty `resume` field.
async fn read_resume_field(mut multipart: Multipart) -> Result<(String, bytes::Bytes), AppError> {
    let missing = || AppError::Validation("Please upload a PDF resume.".to_string());

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            return Err(missing());
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Invalid file upload: {e}")))?;
        return Ok((filename, data));
    }

    Err(missing())
}
