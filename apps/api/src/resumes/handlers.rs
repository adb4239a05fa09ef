use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use mongodb::bson::oid::ObjectId;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::resume::{Resume, ResumeSchema};
use crate::resumes::store;
use crate::resumes::validation::{validate_owner, validate_resume_content};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: String,
}

/// Create payload: the transport shape plus the owning user identity.
#[derive(Deserialize)]
pub struct CreateResumeRequest {
    pub user_id: String,
    #[serde(flatten)]
    pub resume: ResumeSchema,
}

// Document ids are storage-assigned, so a string that cannot be an
// ObjectId cannot name an existing document.
fn parse_resume_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::NotFound(format!("Resume {id} not found")))
}

/// POST /api/v1/resumes
pub async fn handle_create_resume(
    State(state): State<AppState>,
    Json(req): Json<CreateResumeRequest>,
) -> Result<(StatusCode, Json<Resume>), AppError> {
    let mut errors = validate_owner(&req.user_id);
    errors.extend(validate_resume_content(&req.resume));
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let resume = Resume::new(req.resume, req.user_id);
    let resume = store::insert_resume(&state.resumes, resume).await?;
    tracing::info!(user_id = %resume.user_id, "resume created");
    Ok((StatusCode::CREATED, Json(resume)))
}

/// GET /api/v1/resumes?user_id=<id>
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<Resume>>, AppError> {
    let resumes = store::list_resumes_for_user(&state.resumes, &params.user_id).await?;
    Ok(Json(resumes))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Resume>, AppError> {
    let oid = parse_resume_id(&id)?;
    let resume = store::find_resume(&state.resumes, oid)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;
    Ok(Json(resume))
}

/// PUT /api/v1/resumes/:id
/// Full content replacement. The envelope survives: owner and creation
/// time are preserved, `updated_at` is refreshed.
pub async fn handle_replace_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(content): Json<ResumeSchema>,
) -> Result<Json<Resume>, AppError> {
    let oid = parse_resume_id(&id)?;

    let errors = validate_resume_content(&content);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let existing = store::find_resume(&state.resumes, oid)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;

    let replacement = existing.with_content(content);
    store::replace_resume(&state.resumes, oid, &replacement).await?;
    tracing::info!(user_id = %replacement.user_id, "resume replaced");
    Ok(Json(replacement))
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let oid = parse_resume_id(&id)?;
    if store::delete_resume(&state.resumes, oid).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Resume {id} not found")))
    }
}
