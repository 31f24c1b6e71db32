//! REST client for the Epic Character Dictionary API.
//!
//! The base URL points at the `/api` mount, e.g. `http://localhost:3000/api`.
//! When a token is set every request carries `Authorization: Bearer <token>`.

use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::types::{
    Account, Character, Created, Dictionary, Message, NewCharacter, NewDictionary, PlanSummary,
    RegisterRequest,
};

/// Environment variable holding the API base URL.
pub const BASE_URL_ENV: &str = "EPICDICT_API_BASE_URL";

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Reuse an existing [`reqwest::Client`] for connection pooling.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            token: None,
        }
    }

    /// Read the base URL from `EPICDICT_API_BASE_URL`.
    pub fn from_env() -> Result<Self, ClientError> {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Ok(Self::new(url.trim())),
            _ => Err(ClientError::MissingBaseUrl),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Attach a bearer token to all subsequent requests.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.set_token(token);
        self
    }

    // ---- auth / account ----

    pub async fn register_user(&self, user: &RegisterRequest) -> Result<Message, ClientError> {
        self.send_json(self.request(reqwest::Method::POST, "/auth/register").json(user))
            .await
    }

    pub async fn get_account(&self) -> Result<Account, ClientError> {
        self.send_json(self.request(reqwest::Method::GET, "/account")).await
    }

    pub async fn get_plans(&self) -> Result<Vec<PlanSummary>, ClientError> {
        self.send_json(self.request(reqwest::Method::GET, "/plans")).await
    }

    // ---- dictionaries ----

    pub async fn get_dictionaries(&self) -> Result<Vec<Dictionary>, ClientError> {
        self.send_json(self.request(reqwest::Method::GET, "/dictionaries")).await
    }

    /// Create a dictionary and return its id.
    pub async fn create_dictionary(&self, dictionary: &NewDictionary) -> Result<i64, ClientError> {
        let created: Created = self
            .send_json(
                self.request(reqwest::Method::POST, "/dictionaries")
                    .json(dictionary),
            )
            .await?;
        Ok(created.id)
    }

    pub async fn get_dictionary(&self, id: i64) -> Result<Dictionary, ClientError> {
        self.send_json(self.request(reqwest::Method::GET, &format!("/dictionaries/{id}")))
            .await
    }

    pub async fn delete_dictionary(&self, id: i64) -> Result<(), ClientError> {
        self.send(self.request(reqwest::Method::DELETE, &format!("/dictionaries/{id}")))
            .await
    }

    // ---- characters ----

    pub async fn get_characters(&self, dictionary_id: i64) -> Result<Vec<Character>, ClientError> {
        self.send_json(self.request(
            reqwest::Method::GET,
            &format!("/characters/{dictionary_id}"),
        ))
        .await
    }

    /// List characters filtered server-side by `?search=` and `?tag=`.
    pub async fn search_characters(
        &self,
        dictionary_id: i64,
        search: &str,
        tag: &str,
    ) -> Result<Vec<Character>, ClientError> {
        let request = self
            .request(reqwest::Method::GET, &format!("/characters/{dictionary_id}"))
            .query(&[("search", search), ("tag", tag)]);
        self.send_json(request).await
    }

    /// Add a character. Fails with a 403 [`ClientError::Api`] once the
    /// dictionary is full; see [`ClientError::is_limit_reached`].
    pub async fn create_character(
        &self,
        dictionary_id: i64,
        character: &NewCharacter,
    ) -> Result<Message, ClientError> {
        self.send_json(
            self.request(reqwest::Method::POST, &format!("/characters/{dictionary_id}"))
                .json(character),
        )
        .await
    }

    pub async fn get_character(
        &self,
        dictionary_id: i64,
        id: i64,
    ) -> Result<Character, ClientError> {
        self.send_json(self.request(
            reqwest::Method::GET,
            &format!("/characters/{dictionary_id}/{id}"),
        ))
        .await
    }

    pub async fn delete_character(&self, dictionary_id: i64, id: i64) -> Result<(), ClientError> {
        self.send(self.request(
            reqwest::Method::DELETE,
            &format!("/characters/{dictionary_id}/{id}"),
        ))
        .await
    }

    // ---- private helpers ----

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let builder = self
            .client
            .request(method, format!("{}{path}", self.base_url));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send the request and map a non-2xx status to [`ClientError::Api`].
    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        tracing::debug!(status = status.as_u16(), %body, "API request failed");
        Err(ClientError::from_body(status.as_u16(), &body))
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        Ok(self.execute(request).await?.json::<T>().await?)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<(), ClientError> {
        self.execute(request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:3000/api/");
        assert_eq!(client.base_url(), "http://localhost:3000/api");
    }

    #[test]
    fn token_can_be_set_and_cleared() {
        let mut client = ApiClient::new("http://localhost:3000/api").with_token("abc");
        assert_eq!(client.token.as_deref(), Some("abc"));
        client.clear_token();
        assert!(client.token.is_none());
    }
}
