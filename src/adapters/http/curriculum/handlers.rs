//! HTTP handlers for curriculum endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use axum::extract::{Json, Path, State};
use axum::http::{header, HeaderName, HeaderValue, StatusCode};
use axum::response::IntoResponse;

use crate::application::handlers::{
    AddCurriculumItemCommand, AttachContentCommand, DeleteCurriculumItemCommand,
    ExportCurriculumQuery, GetCurriculumQuery, ImportCurriculumCommand, RemoveContentCommand,
    UpdateCurriculumItemCommand,
};
use crate::domain::curriculum::{ContentKind, ItemPatch};
use crate::domain::foundation::{ContentId, CurriculumItemId, ProgramId};
use crate::domain::interchange::template_document;

use super::super::{ApiError, AppState};
use super::dto::{
    AddItemRequest, AttachContentRequest, AttachContentResponse, CurriculumResponse,
    DeleteItemResponse, ImportResponse, ItemResponse, TreeResponse,
};

const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";
const TEMPLATE_FILE_NAME: &str = "curriculum_template.csv";

/// Set on exports whose titles repeat; the value is how many titles do.
pub const DUPLICATE_TITLES_HEADER: &str = "x-duplicate-titles";

fn csv_download(file_name: &str, content: String) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, CSV_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        content,
    )
}

// ════════════════════════════════════════════════════════════════════════════════
// Queries (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/programs/:id/curriculum - Program with its nested tree
pub async fn get_curriculum(
    State(state): State<AppState>,
    Path(program_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetCurriculumQuery {
        program_id: ProgramId::new(program_id)?,
    };
    let program = state.get_curriculum_handler().handle(query).await?;
    Ok(Json(CurriculumResponse::from(program)))
}

/// GET /api/programs/:id/curriculum/export - Download the tree as a document
pub async fn export_curriculum(
    State(state): State<AppState>,
    Path(program_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let query = ExportCurriculumQuery {
        program_id: ProgramId::new(program_id)?,
    };
    let document = state.export_handler().handle(query).await?;

    let mut response = csv_download(&document.file_name, document.content).into_response();
    if !document.duplicate_titles.is_empty() {
        response.headers_mut().insert(
            HeaderName::from_static(DUPLICATE_TITLES_HEADER),
            HeaderValue::from(document.duplicate_titles.len()),
        );
    }
    Ok(response)
}

/// GET /api/curriculum/template - Download the starter document
pub async fn get_template() -> impl IntoResponse {
    csv_download(TEMPLATE_FILE_NAME, template_document())
}

// ════════════════════════════════════════════════════════════════════════════════
// Commands
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/programs/:id/curriculum/items - Add a Chapter, Topic or Sub-Topic
pub async fn add_item(
    State(state): State<AppState>,
    Path(program_id): Path<String>,
    Json(request): Json<AddItemRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let parent_id = request.parent_id.map(CurriculumItemId::new).transpose()?;
    let cmd = AddCurriculumItemCommand {
        program_id: ProgramId::new(program_id)?,
        parent_id,
        item_type: request.item_type,
        title: request.title,
    };

    let result = state.add_item_handler().handle(cmd).await?;

    let response = ItemResponse {
        item: result.item,
        curriculum: result.curriculum,
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// PATCH /api/programs/:id/curriculum/items/:item_id - Merge fields into an item
pub async fn update_item(
    State(state): State<AppState>,
    Path((program_id, item_id)): Path<(String, String)>,
    Json(patch): Json<ItemPatch>,
) -> Result<impl IntoResponse, ApiError> {
    if patch.is_empty() {
        return Err(ApiError::bad_request("Update must change at least one field"));
    }
    let cmd = UpdateCurriculumItemCommand {
        program_id: ProgramId::new(program_id)?,
        item_id: CurriculumItemId::new(item_id)?,
        patch,
    };

    let result = state.update_item_handler().handle(cmd).await?;

    Ok(Json(ItemResponse {
        item: result.item,
        curriculum: result.curriculum,
    }))
}

/// DELETE /api/programs/:id/curriculum/items/:item_id - Remove an item and its subtree
pub async fn delete_item(
    State(state): State<AppState>,
    Path((program_id, item_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = DeleteCurriculumItemCommand {
        program_id: ProgramId::new(program_id)?,
        item_id: CurriculumItemId::new(item_id)?,
    };

    let result = state.delete_item_handler().handle(cmd).await?;

    Ok(Json(DeleteItemResponse {
        removed: result.removed,
        curriculum: result.curriculum,
    }))
}

/// POST /api/programs/:id/curriculum/items/:item_id/content - Attach a resource or assignment
pub async fn attach_content(
    State(state): State<AppState>,
    Path((program_id, item_id)): Path<(String, String)>,
    Json(request): Json<AttachContentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = AttachContentCommand {
        program_id: ProgramId::new(program_id)?,
        item_id: CurriculumItemId::new(item_id)?,
        content: request.into(),
    };

    let result = state.attach_content_handler().handle(cmd).await?;

    let response = AttachContentResponse {
        content_id: result.content_id,
        kind: result.kind,
        curriculum: result.curriculum,
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// DELETE /api/programs/:id/curriculum/items/:item_id/content/:kind/:content_id
pub async fn remove_content(
    State(state): State<AppState>,
    Path((program_id, item_id, kind, content_id)): Path<(String, String, String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let kind: ContentKind = kind.parse()?;
    let cmd = RemoveContentCommand {
        program_id: ProgramId::new(program_id)?,
        item_id: CurriculumItemId::new(item_id)?,
        kind,
        content_id: ContentId::new(content_id)?,
    };

    let curriculum = state.remove_content_handler().handle(cmd).await?;

    Ok(Json(TreeResponse { curriculum }))
}

/// POST /api/programs/:id/curriculum/import - Replace the tree from a document body
pub async fn import_curriculum(
    State(state): State<AppState>,
    Path(program_id): Path<String>,
    document: String,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = ImportCurriculumCommand {
        program_id: ProgramId::new(program_id)?,
        document,
    };

    let result = state.import_handler().handle(cmd).await?;

    Ok(Json(ImportResponse::new(
        result.item_count,
        &result.warnings,
        result.curriculum,
    )))
}
