//! CV File Handlers
//!
//! Direct filesystem passthrough: uploads are validated for type and size,
//! stored under a generated name, and downloads stream back by filename.

use axum::{
    extract::{Multipart, Path, State},
    http::header,
    response::IntoResponse,
    Json,
};

use crate::application::dto::response::FileUploadResponse;
use crate::application::services::{content_type_for, ALLOWED_CONTENT_TYPES};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Upload a CV (public endpoint, PDF/DOC/DOCX up to the configured limit)
pub async fn upload_cv(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<FileUploadResponse>, AppError> {
    let mut file: Option<(String, String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("cv").to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Could not read file: {}", e)))?;

        file = Some((file_name, content_type, bytes.to_vec()));
        break;
    }

    let Some((file_name, content_type, bytes)) = file else {
        return Err(AppError::BadRequest("File is empty".to_string()));
    };

    if bytes.is_empty() {
        return Err(AppError::BadRequest("File is empty".to_string()));
    }

    if !ALLOWED_CONTENT_TYPES.contains(&content_type.as_str()) {
        return Err(AppError::BadRequest(
            "Only PDF and Word documents are allowed".to_string(),
        ));
    }

    if bytes.len() > state.settings.upload.max_size_bytes {
        return Err(AppError::BadRequest(
            "File size must not exceed 5MB".to_string(),
        ));
    }

    let file_path = state.file_storage.store(&file_name, &bytes).await?;

    Ok(Json(FileUploadResponse {
        file_path,
        message: "File uploaded successfully",
    }))
}

/// Download a stored CV by filename, inline so browsers can preview PDFs
pub async fn download_cv(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let path = state.file_storage.resolve(&file_name)?;

    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(AppError::NotFound(format!("File not found: {}", file_name)));
        }
        Err(e) => {
            return Err(AppError::Internal(format!("Could not read file: {}", e)));
        }
    };

    let headers = [
        (
            header::CONTENT_TYPE,
            content_type_for(&file_name).to_string(),
        ),
        (
            header::CONTENT_DISPOSITION,
            format!("inline; filename=\"{}\"", file_name),
        ),
    ];

    Ok((headers, bytes))
}
