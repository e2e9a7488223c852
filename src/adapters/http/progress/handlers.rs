//! HTTP handlers for progress endpoints.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{GetProgressQuery, SetItemStatusCommand, StartProgressCommand};
use crate::domain::foundation::{CurriculumItemId, EnrollmentId, ProgramId};

use super::super::{ApiError, AppState};
use super::dto::{ProgressResponse, SetStatusRequest, SetStatusResponse, StartProgressRequest};

/// POST /api/enrollments/:id/progress - Start tracking progress for an enrollment
pub async fn start_progress(
    State(state): State<AppState>,
    Path(enrollment_id): Path<String>,
    Json(request): Json<StartProgressRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = StartProgressCommand {
        enrollment_id: EnrollmentId::new(enrollment_id)?,
        program_id: ProgramId::new(request.program_id)?,
    };

    let progress = state.start_progress_handler().handle(cmd).await?;

    Ok((StatusCode::CREATED, Json(ProgressResponse::from(progress))))
}

/// GET /api/enrollments/:id/progress - Progress copy and summary
pub async fn get_progress(
    State(state): State<AppState>,
    Path(enrollment_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetProgressQuery {
        enrollment_id: EnrollmentId::new(enrollment_id)?,
    };

    let view = state.get_progress_handler().handle(query).await?;

    Ok(Json(ProgressResponse::from(view)))
}

/// PUT /api/enrollments/:id/progress/items/:item_id - Set one item's status
pub async fn set_item_status(
    State(state): State<AppState>,
    Path((enrollment_id, item_id)): Path<(String, String)>,
    Json(request): Json<SetStatusRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = SetItemStatusCommand {
        enrollment_id: EnrollmentId::new(enrollment_id)?,
        item_id: CurriculumItemId::new(item_id)?,
        status: request.status,
    };

    let result = state.set_item_status_handler().handle(cmd).await?;

    Ok(Json(SetStatusResponse::from(result)))
}
