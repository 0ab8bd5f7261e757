//! Typed client for the user RPC service

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use user_proto::{Code, Empty, Method, Status, UserList, UserRequest, UserResponse};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:50051";

#[derive(Error, Debug)]
pub enum ClientError {
    /// The server answered with an error status.
    #[error("{0}")]
    Status(Status),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    pub fn code(&self) -> Code {
        match self {
            ClientError::Status(status) => status.code,
            ClientError::Transport(_) => Code::Unavailable,
        }
    }
}

#[derive(Clone, Debug)]
pub struct UserServiceClient {
    endpoint: String,
    http: reqwest::Client,
}

impl UserServiceClient {
    /// Plain-HTTP channel to `endpoint`, e.g. `http://localhost:50051`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        phone_number: &str,
        is_active: bool,
    ) -> Result<UserResponse, ClientError> {
        let request = UserRequest {
            id: 0,
            name: name.to_string(),
            email: email.to_string(),
            phone_number: phone_number.to_string(),
            is_active,
        };
        self.call(Method::CreateUser, &request).await
    }

    pub async fn get_user(&self, id: i32) -> Result<UserResponse, ClientError> {
        self.call(Method::GetUser, &UserRequest::with_id(id)).await
    }

    pub async fn update_user(
        &self,
        id: i32,
        name: &str,
        email: &str,
        phone_number: &str,
        is_active: bool,
    ) -> Result<UserResponse, ClientError> {
        let request = UserRequest {
            id,
            name: name.to_string(),
            email: email.to_string(),
            phone_number: phone_number.to_string(),
            is_active,
        };
        self.call(Method::UpdateUser, &request).await
    }

    /// Returns the acknowledgement; only its `id` is meaningful.
    pub async fn delete_user(&self, id: i32) -> Result<UserResponse, ClientError> {
        self.call(Method::DeleteUser, &UserRequest::with_id(id)).await
    }

    pub async fn list_users(&self) -> Result<UserList, ClientError> {
        self.call(Method::ListUsers, &Empty {}).await
    }

    async fn call<Req, Resp>(&self, method: Method, request: &Req) -> Result<Resp, ClientError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let url = format!("{}{}", self.endpoint, method.path());
        let response = self.http.post(url).json(request).send().await?;

        if response.status().is_success() {
            return Ok(response.json::<Resp>().await?);
        }

        let http_status = response.status().as_u16();
        let body = response.text().await?;
        // Fall back to the HTTP status when the body is not a status message
        let status = serde_json::from_str::<Status>(&body).unwrap_or_else(|_| {
            Status::new(Code::from_http_status(http_status), body)
        });
        Err(ClientError::Status(status))
    }
}
