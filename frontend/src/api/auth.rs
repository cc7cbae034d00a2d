use super::{
    client::ApiClient,
    types::{ApiError, LoginRequest, LoginResponse, RegisterRequest},
};

impl ApiClient {
    /// Exchanges credentials for a token and stores it in the session.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.endpoint("/auth/login").await;
        let response = self
            .send(self.http_client().post(url).json(request))
            .await?;
        let login_response: LoginResponse = self.map_json_response(response).await?;
        self.session().set_token(&login_response.token)?;
        Ok(login_response)
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let url = self.endpoint("/auth/register").await;
        let response = self
            .send(self.http_client().post(url).json(request))
            .await?;
        self.map_empty_response(response).await
    }
}
