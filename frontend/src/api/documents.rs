use reqwest::{
    multipart::{Form, Part},
    Method,
};

use super::{
    client::{encode_segment, ApiClient, AuthPolicy},
    error::ApiError,
    types::{Document, DocumentUpdate, ExtractionResult, MessageResponse},
};

impl ApiClient {
    pub async fn list_documents(&self) -> Result<Vec<Document>, ApiError> {
        self.get_json("/extract/documents", &[]).await
    }

    pub async fn recent_documents(&self) -> Result<Vec<Document>, ApiError> {
        self.get_json("/extract/documents/recent", &[]).await
    }

    /// Accepts either the numeric id or the `docId`.
    pub async fn get_document(&self, id: &str) -> Result<Document, ApiError> {
        self.get_json(&format!("/extract/documents/{}", encode_segment(id)), &[])
            .await
    }

    pub async fn update_document(
        &self,
        id: i64,
        update: &DocumentUpdate,
    ) -> Result<Document, ApiError> {
        self.send_json(
            Method::PUT,
            &format!("/extract/documents/{}", id),
            update,
            AuthPolicy::Protected,
        )
        .await
    }

    pub async fn delete_document(&self, doc_id: &str) -> Result<MessageResponse, ApiError> {
        let value = self
            .request(
                Method::DELETE,
                &format!("/extract/documents/{}", encode_segment(doc_id)),
                &[],
                None,
            )
            .await?;
        Ok(serde_json::from_value(value).unwrap_or_default())
    }

    pub async fn delete_documents(&self, doc_ids: &[String]) -> Result<MessageResponse, ApiError> {
        if doc_ids.is_empty() {
            return Err(ApiError::validation("삭제할 문서 ID가 필요합니다"));
        }
        self.send_json(
            Method::DELETE,
            "/extract/documents",
            doc_ids,
            AuthPolicy::Protected,
        )
        .await
    }

    pub async fn delete_all_documents(&self) -> Result<MessageResponse, ApiError> {
        let value = self
            .request(Method::DELETE, "/extract/documents/all", &[], None)
            .await?;
        Ok(serde_json::from_value(value).unwrap_or_default())
    }

    pub async fn reprocess_document(&self, id: i64) -> Result<MessageResponse, ApiError> {
        let value = self
            .request(
                Method::POST,
                &format!("/extract/documents/{}/reprocess", id),
                &[],
                None,
            )
            .await?;
        Ok(serde_json::from_value(value).unwrap_or_default())
    }

    pub async fn document_pdf(&self, id: i64) -> Result<Vec<u8>, ApiError> {
        self.get_bytes(&format!("/extract/documents/{}/pdf", id))
            .await
    }

    pub async fn export_document_excel(&self, doc_id: &str) -> Result<Vec<u8>, ApiError> {
        self.get_bytes(&format!(
            "/extract/documents/{}/export/excel",
            encode_segment(doc_id)
        ))
        .await
    }

    /// Sends the PDF as multipart field `file`.
    pub async fn upload_document(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<ExtractionResult, ApiError> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("application/pdf")
            .map_err(ApiError::network)?;
        let form = Form::new().part("file", part);
        self.post_multipart("/extract/upload", form).await
    }
}
