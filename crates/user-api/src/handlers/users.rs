// ============================================================================
// User API - UserService RPC Handlers
// File: crates/user-api/src/handlers/users.rs
// ============================================================================
//! One handler per RPC method, each `POST /rpc/UserService/{Method}`

use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    http::{Method as HttpMethod, Uri},
    Json,
};
use tracing::debug;

use user_core::domain::{User, UserFields};
use user_proto::{UserList, UserRequest, UserResponse};

use crate::error::ApiError;
use crate::state::AppState;

type RpcResult<T> = Result<Json<T>, ApiError>;

fn to_response(user: User) -> UserResponse {
    UserResponse {
        id: user.id,
        name: user.name,
        email: user.email,
        phone_number: user.phone_number,
        is_active: user.is_active,
    }
}

fn to_fields(req: UserRequest) -> UserFields {
    UserFields {
        name: req.name,
        email: req.email,
        phone_number: req.phone_number,
        is_active: req.is_active,
    }
}

/// CreateUser - no validation, id assigned by storage
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> RpcResult<UserResponse> {
    let Json(req) = payload?;
    debug!("CreateUser name={}", req.name);

    let user = state.user_service.create_user(to_fields(req)).await?;
    Ok(Json(to_response(user)))
}

/// GetUser - NOT_FOUND when the id is absent
pub async fn get_user(
    State(state): State<AppState>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> RpcResult<UserResponse> {
    let Json(req) = payload?;
    debug!("GetUser id={}", req.id);

    let user = state.user_service.get_user(req.id).await?;
    Ok(Json(to_response(user)))
}

/// UpdateUser - overwrites all four mutable fields
pub async fn update_user(
    State(state): State<AppState>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> RpcResult<UserResponse> {
    let Json(req) = payload?;
    debug!("UpdateUser id={}", req.id);

    let id = req.id;
    let user = state.user_service.update_user(id, to_fields(req)).await?;
    Ok(Json(to_response(user)))
}

/// DeleteUser - acknowledges with the id only
pub async fn delete_user(
    State(state): State<AppState>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> RpcResult<UserResponse> {
    let Json(req) = payload?;
    debug!("DeleteUser id={}", req.id);

    let id = state.user_service.delete_user(req.id).await?;
    Ok(Json(UserResponse::deleted(id)))
}

/// ListUsers - the request body is ignored
pub async fn list_users(State(state): State<AppState>) -> RpcResult<UserList> {
    let users = state.user_service.list_users().await?;
    Ok(Json(UserList {
        users: users.into_iter().map(to_response).collect(),
    }))
}

pub async fn unknown_method(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("Unknown method {}", uri.path()))
}

pub async fn method_not_allowed(method: HttpMethod, uri: Uri) -> ApiError {
    ApiError::InvalidArgument(format!("Method {} not allowed for {}", method, uri.path()))
}
