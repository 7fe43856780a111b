use std::rc::Rc;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{
    api::error::ApiError,
    config,
    state::session::{self, SessionStore},
    utils::navigation::{self, Navigator},
};

pub const LOGIN_PATH: &str = "/login";

const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

/// Whether a 401/403 ends the session. Login and register answer 401 for bad credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AuthPolicy {
    Protected,
    Public,
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: Rc<dyn SessionStore>,
    navigator: Rc<dyn Navigator>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_parts(
            None,
            session::default_session_store(),
            navigation::default_navigator(),
        )
    }

    pub fn with_parts(
        base_url: Option<String>,
        session: Rc<dyn SessionStore>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.map(|url| config::normalize_base_url(&url)),
            session,
            navigator,
        }
    }

    pub fn session_store(&self) -> Rc<dyn SessionStore> {
        Rc::clone(&self.session)
    }

    pub fn navigator(&self) -> Rc<dyn Navigator> {
        Rc::clone(&self.navigator)
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(base) => base.clone(),
            None => config::await_api_base_url().await,
        }
    }

    async fn url(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match session::get_token(self.session.as_ref()) {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Clears every session field and sends the user to the login page.
    pub fn force_logout(&self) {
        session::clear_session(self.session.as_ref());
        self.navigator.redirect(LOGIN_PATH);
    }

    async fn dispatch(
        &self,
        builder: RequestBuilder,
        policy: AuthPolicy,
    ) -> Result<Response, ApiError> {
        let response = self
            .authorize(builder)
            .send()
            .await
            .map_err(ApiError::network)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if policy == AuthPolicy::Protected
            && (status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN)
        {
            log::warn!("{} returned {}, ending session", response.url().path(), status);
            self.force_logout();
            return Err(ApiError::Unauthorized {
                status: status.as_u16(),
            });
        }
        let body = response.text().await.unwrap_or_default();
        let error = ApiError::from_body(status.as_u16(), &body);
        log::error!("request failed with {}: {}", status, error);
        Err(error)
    }

    async fn read_json(response: Response) -> Result<Value, ApiError> {
        let text = response.text().await.map_err(ApiError::network)?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(ApiError::decode)
    }

    /// Generic JSON request. Empty bodies decode to `Value::Null`.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        self.request_with(method, path, query, body, AuthPolicy::Protected)
            .await
    }

    pub(crate) async fn request_with(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
        policy: AuthPolicy,
    ) -> Result<Value, ApiError> {
        let url = self.url(path).await;
        let mut builder = self.client.request(method, url);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let response = self.dispatch(builder, policy).await?;
        Self::read_json(response).await
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let value = self.request(Method::GET, path, query, None).await?;
        serde_json::from_value(value).map_err(ApiError::decode)
    }

    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        policy: AuthPolicy,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body).map_err(ApiError::decode)?;
        let value = self
            .request_with(method, path, &[], Some(&body), policy)
            .await?;
        serde_json::from_value(value).map_err(ApiError::decode)
    }

    pub(crate) async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        let url = self.url(path).await;
        let response = self
            .dispatch(self.client.get(url), AuthPolicy::Protected)
            .await?;
        let bytes = response.bytes().await.map_err(ApiError::network)?;
        Ok(bytes.to_vec())
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiError> {
        let url = self.url(path).await;
        let response = self
            .dispatch(self.client.post(url).multipart(form), AuthPolicy::Protected)
            .await?;
        let value = Self::read_json(response).await?;
        serde_json::from_value(value).map_err(ApiError::decode)
    }
}

#[cfg(test)]
mod tests {
    use super::encode_segment;

    #[test]
    fn encode_segment_escapes_reserved_characters() {
        assert_eq!(encode_segment("DOC-1_a.b~c"), "DOC-1_a.b~c");
        assert_eq!(encode_segment("a/b c"), "a%2Fb%20c");
        assert_eq!(encode_segment("계약"), "%EA%B3%84%EC%95%BD");
    }
}
