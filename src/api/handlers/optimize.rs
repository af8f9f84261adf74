use crate::api::error::AppError;
use crate::models::UploadedFile;
use crate::utils::validation::{UNNAMED_FILE, sanitize_filename};
use axum::{
    Json,
    extract::{Multipart, State},
};
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct OptimizeResponse {
    pub status: String,
    pub original_file: String,
    pub optimized_result: String,
}

#[utoipa::path(
    post,
    path = "/api/optimize",
    request_body(content = String, description = "Multipart form with a `file` field", content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "File optimized", body = OptimizeResponse),
        (status = 400, description = "No file field in the request"),
        (status = 500, description = "Storage or decoding failure")
    ),
    tag = "optimizer"
)]
pub async fn optimize_file(
    State(state): State<crate::AppState>,
    mut multipart: Multipart,
) -> Result<Json<OptimizeResponse>, AppError> {
    let mut upload: Option<UploadedFile> = None;
    let mut original_file = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        original_file = field.file_name().unwrap_or(UNNAMED_FILE).to_string();
        let content = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        info!("📁 Received file: {} ({} bytes)", original_file, content.len());

        upload = Some(UploadedFile {
            filename: sanitize_filename(&original_file),
            content,
        });
    }

    let upload = upload.ok_or_else(|| AppError::BadRequest("No file provided".to_string()))?;

    // Persist first; a storage failure aborts before any transformation
    let artifact = state.storage.store(&upload).await?;
    let source = String::from_utf8(state.storage.read(&artifact).await?)?;
    let optimized = state.optimizer.run(&source);

    info!(
        "⚙️  Pass '{}' finished for artifact {}",
        state.optimizer.name(),
        artifact.id
    );

    Ok(Json(OptimizeResponse {
        status: "success".to_string(),
        original_file,
        optimized_result: optimized,
    }))
}
