use crate::api::{ApiClient, ApiError, Document, MessageResponse};

#[derive(Clone)]
pub struct DocumentsRepository {
    client: ApiClient,
}

impl DocumentsRepository {
    pub fn new_with_client(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub async fn fetch_all(&self) -> Result<Vec<Document>, ApiError> {
        self.client.list_documents().await
    }

    pub async fn delete_one(&self, doc_id: &str) -> Result<MessageResponse, ApiError> {
        self.client.delete_document(doc_id).await
    }

    pub async fn delete_many(&self, doc_ids: &[String]) -> Result<MessageResponse, ApiError> {
        self.client.delete_documents(doc_ids).await
    }

    pub async fn delete_all(&self) -> Result<MessageResponse, ApiError> {
        self.client.delete_all_documents().await
    }
}
