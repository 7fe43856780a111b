use crate::api::{ApiClient, ApiError, ExtractionResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

pub async fn upload(api: &ApiClient, request: UploadRequest) -> Result<ExtractionResult, ApiError> {
    log::info!(
        "uploading {} ({} bytes)",
        request.file_name,
        request.bytes.len()
    );
    api.upload_document(&request.file_name, request.bytes).await
}
