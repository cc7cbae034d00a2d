use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    api::types::{ApiError, ServerMessage},
    config,
    state::session::SessionStore,
};

#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) use mock_transport::{register_mock, MockResponse, TestResponder};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(session: SessionStore) -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            session,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>, session: SessionStore) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            session,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        let base = match &self.base_url {
            Some(base) => base.clone(),
            None => config::await_api_base_url().await,
        };
        base.trim_end_matches('/').to_string()
    }

    pub(crate) async fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    fn bearer_token(&self) -> Result<String, ApiError> {
        self.session
            .token()
            .filter(|token| !token.trim().is_empty())
            .ok_or(ApiError::Unauthenticated)
    }

    /// Sends without credentials. Used by the auth endpoints.
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = request
            .build()
            .map_err(|e| ApiError::transport(e.to_string()))?;
        log::debug!("{} {}", request.method(), request.url());

        #[cfg(all(test, not(target_arch = "wasm32")))]
        if let Some(responder) = mock_transport::lookup(request.url().as_str()) {
            return responder.respond(&request)?.into_response();
        }

        self.client.execute(request).await.map_err(|e| {
            log::error!("request failed: {}", e);
            ApiError::transport(e.to_string())
        })
    }

    /// Attaches the bearer token; a missing token fails before anything is sent.
    pub(crate) async fn send_authorized(
        &self,
        request: RequestBuilder,
    ) -> Result<Response, ApiError> {
        let token = self.bearer_token()?;
        let response = self.send(request.bearer_auth(token)).await?;
        self.handle_unauthorized_status(response.status());
        Ok(response)
    }

    fn handle_unauthorized_status(&self, status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            log::warn!("server rejected the session token, clearing it");
            self.session.clear_token();
        }
    }

    pub(crate) async fn map_json_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, ApiError> {
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        response.json::<T>().await.map_err(|e| {
            log::error!("failed to decode response body: {}", e);
            ApiError::Decode(e.to_string())
        })
    }

    pub(crate) async fn map_empty_response(&self, response: Response) -> Result<(), ApiError> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::rejection(response).await)
        }
    }

    async fn rejection(response: Response) -> ApiError {
        let status = response.status();
        let message = response
            .text()
            .await
            .ok()
            .and_then(|body| serde_json::from_str::<ServerMessage>(&body).ok())
            .and_then(|body| body.message);
        if status == StatusCode::UNAUTHORIZED && message.is_none() {
            return ApiError::Unauthenticated;
        }
        log::warn!("request rejected with status {}", status);
        ApiError::rejected(status.as_u16(), message)
    }
}
