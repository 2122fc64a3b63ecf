use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::OnceCell;
use tower_sessions::Session;

use school::config::ApiConfig;
use school::{ApiError, PageQuery};

use super::config::get_config;
use super::error::BackendError;
use crate::auth::SESSION_TOKEN_KEY;

static HTTP: OnceCell<reqwest::Client> = OnceCell::const_new();

async fn http() -> &'static reqwest::Client {
    HTTP.get_or_init(|| async { reqwest::Client::new() }).await
}

/// Request builder for the remote API, optionally carrying a bearer token.
#[derive(Clone, Debug)]
pub struct BackendClient {
    http: reqwest::Client,
    api: ApiConfig,
    token: Option<String>,
}

impl BackendClient {
    /// Client for public endpoints (login, entrance survey).
    pub async fn anonymous() -> Self {
        Self {
            http: http().await.clone(),
            api: get_config().await.api.clone(),
            token: None,
        }
    }

    /// Client authenticated with the token stored in `session`.
    pub async fn for_session(session: &Session) -> Result<Self, BackendError> {
        let token: Option<String> = session
            .get(SESSION_TOKEN_KEY)
            .await
            .map_err(|e| BackendError::Session(e.to_string()))?;
        let Some(token) = token else {
            return Err(BackendError::Unauthenticated);
        };
        let mut client = Self::anonymous().await;
        client.token = Some(token);
        Ok(client)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .http
            .request(method, self.api.endpoint(path))
            .timeout(self.api.timeout());
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// GET one page of a list endpoint.
    pub async fn list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &PageQuery,
    ) -> Result<school::Page<T>, BackendError> {
        tracing::debug!("GET {} page {} keyword {:?}", path, query.page, query.keyword);
        let response = self
            .request(Method::GET, path)
            .query(&query.to_pairs())
            .send()
            .await?;
        read(response).await
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let response = self.request(Method::GET, path).send().await?;
        read(response).await
    }

    /// POST `body`. `None` when the backend answered without a body.
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<T>, BackendError> {
        let response = self.request(Method::POST, path).json(body).send().await?;
        read_optional(response).await
    }

    /// PUT `body`. `None` when the backend answered without a body.
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<T>, BackendError> {
        let response = self.request(Method::PUT, path).json(body).send().await?;
        read_optional(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), BackendError> {
        let response = self.request(Method::DELETE, path).send().await?;
        read_optional::<serde_json::Value>(response).await.map(|_| ())
    }
}

/// Decode a success body that must be present.
async fn read<T: DeserializeOwned>(response: Response) -> Result<T, BackendError> {
    read_optional(response).await?.ok_or(BackendError::EmptyBody)
}

/// Decode a success body, or turn an error body into [`ApiError`].
async fn read_optional<T: DeserializeOwned>(response: Response) -> Result<Option<T>, BackendError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(BackendError::Api(ApiError::from_response(status.as_u16(), &body)));
    }
    let bytes = response.bytes().await?;
    Ok(decode_body(&bytes)?)
}

/// An empty or whitespace-only body decodes as `None`.
fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<Option<T>, serde_json::Error> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(bytes).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use school::Room;

    #[test]
    fn test_empty_body_is_none() {
        assert_eq!(decode_body::<Room>(b"").unwrap(), None);
        assert_eq!(decode_body::<Room>(b" \n").unwrap(), None);
    }

    #[test]
    fn test_body_decodes() {
        let room: Option<Room> = decode_body(
            br#"{"id":4,"name":"Chopin","capacity":6,"status":"Opened"}"#,
        )
        .unwrap();
        assert_eq!(room.map(|r| r.name), Some("Chopin".to_string()));
        assert!(decode_body::<Room>(b"not json").is_err());
    }
}
