//! Authentication handlers

use axum::{extract::State, http::StatusCode, Extension, Json};
use tracing::{error, info};

use super::dto::{SetRoleRequest, UserDto};
use crate::domain::{DomainError, DomainResult, User, UserRepository, UserRole};
use crate::interfaces::http::common::response::{api_error, bad_request, not_found, or_fail};
use crate::interfaces::http::common::{ApiResult, ApiState, ErrorResponse, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Failed to fetch user", body = ErrorResponse)
    )
)]
pub async fn get_current_user(
    State(state): State<ApiState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> ApiResult<Json<UserDto>> {
    match state.repos.users().get_user(&auth.user_id).await {
        Ok(Some(user)) => Ok(Json(UserDto::from(user))),
        Ok(None) => Err(not_found("User not found")),
        Err(e) => {
            error!("Error fetching user {}: {}", auth.user_id, e);
            Err(api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch user",
            ))
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/user/role",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    request_body = SetRoleRequest,
    responses(
        (status = 200, description = "Role updated", body = UserDto),
        (status = 400, description = "Invalid role", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Failed to update role", body = ErrorResponse)
    )
)]
pub async fn set_role(
    State(state): State<ApiState>,
    Extension(auth): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<SetRoleRequest>,
) -> ApiResult<Json<UserDto>> {
    let role = request
        .requested_role()
        .ok_or_else(|| bad_request("Invalid role"))?;

    match apply_role(state.repos.users(), &auth.user_id, role).await {
        Ok(user) => {
            info!("User {} selected role {}", user.id, role);
            Ok(Json(UserDto::from(user)))
        }
        Err(DomainError::NotFound { .. }) => Err(not_found("User not found")),
        Err(e) => {
            error!("Error updating role for {}: {}", auth.user_id, e);
            Err(api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to update role",
            ))
        }
    }
}

async fn apply_role(
    users: &dyn UserRepository,
    user_id: &str,
    role: UserRole,
) -> DomainResult<User> {
    users.update_user_role(user_id, role).await?;
    // Dealers and drivers wait for an administrator
    if role.requires_approval() {
        users.update_user_approval(user_id, false).await?;
    }
    users
        .get_user(user_id)
        .await?
        .ok_or_else(|| DomainError::not_found("User", "id", user_id))
}

#[utoipa::path(
    post,
    path = "/api/auth/session",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "User record created or refreshed from the token", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 409, description = "Email already used by another account", body = ErrorResponse)
    )
)]
pub async fn sync_session(
    State(state): State<ApiState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> ApiResult<Json<UserDto>> {
    let user = state
        .repos
        .users()
        .upsert_user(auth.claims.to_upsert())
        .await
        .map_err(or_fail("Failed to sync session"))?;
    Ok(Json(UserDto::from(user)))
}
