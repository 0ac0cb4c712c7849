//! CV File Storage
//!
//! Filesystem passthrough for uploaded CVs: files land under a configured
//! directory with a generated unique name and are served back by filename.

use std::path::PathBuf;

use crate::shared::error::AppError;

/// URL prefix under which stored CVs are exposed
pub const PUBLIC_PREFIX: &str = "/uploads/cv";

/// Content types accepted by the CV upload endpoint
pub const ALLOWED_CONTENT_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// Filesystem-backed CV store
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create the store, ensuring the storage directory exists.
    pub fn new(dir: &str) -> std::io::Result<Self> {
        let root = PathBuf::from(dir);
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Store a file under a generated unique name, keeping the original
    /// extension. Returns the public path clients use to reference the file.
    pub async fn store(&self, original_name: &str, bytes: &[u8]) -> Result<String, AppError> {
        if original_name.contains("..") {
            return Err(AppError::BadRequest(format!(
                "Filename contains an invalid path sequence: {}",
                original_name
            )));
        }

        let extension = original_name
            .rsplit_once('.')
            .map(|(_, ext)| format!(".{}", ext))
            .unwrap_or_default();
        let file_name = format!("{}{}", uuid::Uuid::new_v4(), extension);

        let target = self.root.join(&file_name);
        tokio::fs::write(&target, bytes)
            .await
            .map_err(|e| AppError::Internal(format!("Could not store file: {}", e)))?;

        tracing::debug!(file = %file_name, size = bytes.len(), "CV stored");

        Ok(format!("{}/{}", PUBLIC_PREFIX, file_name))
    }

    /// Resolve a stored file by name, rejecting path traversal.
    pub fn resolve(&self, file_name: &str) -> Result<PathBuf, AppError> {
        if file_name.contains("..") || file_name.contains('/') || file_name.contains('\\') {
            return Err(AppError::BadRequest(format!(
                "Invalid file name: {}",
                file_name
            )));
        }

        Ok(self.root.join(file_name))
    }

    /// Remove a stored file if it exists.
    pub async fn delete(&self, file_name: &str) -> Result<(), AppError> {
        let path = self.resolve(file_name)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Internal(format!("Could not delete file: {}", e))),
        }
    }
}

/// Content type inferred from the file extension; unknown extensions fall
/// back to a generic binary stream.
pub fn content_type_for(file_name: &str) -> &'static str {
    let lower = file_name.to_lowercase();
    if lower.ends_with(".pdf") {
        "application/pdf"
    } else if lower.ends_with(".doc") {
        "application/msword"
    } else if lower.ends_with(".docx") {
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    } else {
        "application/octet-stream"
    }
}
