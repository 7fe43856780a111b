#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use std::rc::Rc;

    use crate::api::{ApiClient, AuditLogEntry, Document, Role, UserAccount};
    use crate::state::session::{MemorySessionStore, Session};
    use crate::utils::navigation::RecordingNavigator;

    pub fn session_with_role(role: Role) -> Session {
        Session {
            token: "test-token".into(),
            username: "tester".into(),
            email: Some("tester@securedoc.io".into()),
            role,
        }
    }

    pub struct TestClient {
        pub api: ApiClient,
        pub store: Rc<MemorySessionStore>,
        pub navigator: Rc<RecordingNavigator>,
    }

    pub fn test_client(base_url: Option<String>, session: Option<Session>) -> TestClient {
        test_client_with_answers(base_url, session, &[])
    }

    /// `answers` feed the navigator's confirm prompts in order.
    pub fn test_client_with_answers(
        base_url: Option<String>,
        session: Option<Session>,
        answers: &[bool],
    ) -> TestClient {
        let store = Rc::new(match &session {
            Some(session) => MemorySessionStore::with_session(session),
            None => MemorySessionStore::new(),
        });
        let navigator = Rc::new(RecordingNavigator::with_answers(answers));
        let api = ApiClient::with_parts(base_url, store.clone(), navigator.clone());
        TestClient {
            api,
            store,
            navigator,
        }
    }

    pub fn document(id: i64, doc_id: &str, file_name: &str) -> Document {
        Document {
            id,
            doc_id: Some(doc_id.into()),
            file_name: Some(file_name.into()),
            filename: Some(file_name.into()),
            contractor_a: Some("주식회사 갑".into()),
            contractor_b: Some("을 상사".into()),
            contract_amount: Some("1,000,000".into()),
            confidence: Some(92.0),
            status: Some("completed".into()),
            created_at: Some("2025-01-02T10:00:00".into()),
            ..Document::default()
        }
    }

    pub fn audit_entry(id: i64, action: &str) -> AuditLogEntry {
        AuditLogEntry {
            id,
            username: Some("admin".into()),
            action: Some(action.into()),
            resource: Some("/api/extract/upload".into()),
            details: Some("contract.pdf".into()),
            ip_address: Some("10.0.0.1".into()),
            timestamp: Some("2025-01-02T10:00:00".into()),
            status: Some("SUCCESS".into()),
            ..AuditLogEntry::default()
        }
    }

    pub fn user_account(id: i64, username: &str, role: Role, enabled: bool) -> UserAccount {
        UserAccount {
            id,
            username: username.into(),
            email: Some(format!("{}@securedoc.io", username)),
            role,
            enabled,
            created_at: Some("2025-01-01T00:00:00".into()),
        }
    }
}
