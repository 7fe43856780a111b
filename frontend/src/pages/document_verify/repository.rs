use crate::api::{ApiClient, ApiError, Document, DocumentUpdate, MessageResponse};

#[derive(Clone)]
pub struct VerifyRepository {
    client: ApiClient,
}

impl VerifyRepository {
    pub fn new_with_client(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub async fn load(&self, id: &str) -> Result<Document, ApiError> {
        self.client.get_document(id).await
    }

    pub async fn pdf(&self, id: i64) -> Result<Vec<u8>, ApiError> {
        self.client.document_pdf(id).await
    }

    pub async fn reprocess(&self, id: i64) -> Result<MessageResponse, ApiError> {
        self.client.reprocess_document(id).await
    }

    pub async fn finalize(&self, id: i64, update: &DocumentUpdate) -> Result<Document, ApiError> {
        self.client.update_document(id, update).await
    }

    pub async fn excel(&self, document: &Document) -> Result<Vec<u8>, ApiError> {
        self.client.export_document_excel(&document.key()).await
    }
}
