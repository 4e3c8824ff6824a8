//! Admin handlers
//!
//! Every handler here requires the caller's subject to be configured as an
//! administrator.

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use tracing::info;

use super::dto::{UpdateApprovalRequest, UsersByRoleParams};
use crate::domain::UserRole;
use crate::interfaces::http::common::access::{current_user, require_admin};
use crate::interfaces::http::common::response::{bad_request, not_found, or_fail};
use crate::interfaces::http::common::{ApiResult, ApiState, ErrorResponse, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;
use crate::interfaces::http::modules::auth::UserDto;
use crate::interfaces::http::modules::bookings::BookingDto;

#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = "Admin",
    security(("bearer_auth" = [])),
    params(UsersByRoleParams),
    responses(
        (status = 200, description = "Users holding the role", body = Vec<UserDto>),
        (status = 400, description = "Invalid role", body = ErrorResponse),
        (status = 403, description = "Administrator access required", body = ErrorResponse)
    )
)]
pub async fn users_by_role(
    State(state): State<ApiState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Query(params): Query<UsersByRoleParams>,
) -> ApiResult<Json<Vec<UserDto>>> {
    current_user(&state, &auth).await?;
    require_admin(&auth)?;
    let role: UserRole = params.role.parse().map_err(|_| bad_request("Invalid role"))?;

    let users = state
        .repos
        .users()
        .get_users_by_role(role)
        .await
        .map_err(or_fail("Failed to fetch users"))?;
    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

#[utoipa::path(
    put,
    path = "/api/admin/users/{id}/approval",
    tag = "Admin",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "User ID")),
    request_body = UpdateApprovalRequest,
    responses(
        (status = 200, description = "Refreshed user", body = UserDto),
        (status = 403, description = "Administrator access required", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn update_approval(
    State(state): State<ApiState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateApprovalRequest>,
) -> ApiResult<Json<UserDto>> {
    current_user(&state, &auth).await?;
    require_admin(&auth)?;

    let users = state.repos.users();
    users
        .update_user_approval(&id, request.is_approved)
        .await
        .map_err(or_fail("Failed to update approval"))?;
    info!(
        "Admin {} set approval of {} to {}",
        auth.user_id, id, request.is_approved
    );

    users
        .get_user(&id)
        .await
        .map_err(or_fail("Failed to update approval"))?
        .map(|u| Json(UserDto::from(u)))
        .ok_or_else(|| not_found("User not found"))
}

#[utoipa::path(
    get,
    path = "/api/admin/bookings",
    tag = "Admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Every booking, newest first", body = Vec<BookingDto>),
        (status = 403, description = "Administrator access required", body = ErrorResponse)
    )
)]
pub async fn all_bookings(
    State(state): State<ApiState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> ApiResult<Json<Vec<BookingDto>>> {
    current_user(&state, &auth).await?;
    require_admin(&auth)?;

    let bookings = state
        .repos
        .bookings()
        .get_all_bookings()
        .await
        .map_err(or_fail("Failed to fetch bookings"))?;
    Ok(Json(bookings.into_iter().map(BookingDto::from).collect()))
}

#[cfg(test)]
mod tests {
    use crate::infrastructure::database::entities::user::UserRole as DbRole;
    use crate::infrastructure::database::test_support::{insert_booking, insert_user};
    use crate::interfaces::http::test_support::{TestApp, ADMIN};
    use axum::http::StatusCode;
    use serde_json::json;

    async fn app() -> TestApp {
        let app = TestApp::new().await;
        insert_user(&app.db, ADMIN, DbRole::Customer, true).await;
        insert_user(&app.db, "drv", DbRole::Driver, false).await;
        insert_user(&app.db, "cust", DbRole::Customer, true).await;
        app
    }

    #[tokio::test]
    async fn non_admins_are_forbidden() {
        let app = app().await;
        for uri in ["/api/admin/users?role=driver", "/api/admin/bookings"] {
            let (status, _) = app.get(uri, "cust").await;
            assert_eq!(status, StatusCode::FORBIDDEN);
        }
        let (status, _) = app
            .put("/api/admin/users/drv/approval", "cust", json!({ "isApproved": true }))
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn approve_pending_driver() {
        let app = app().await;

        let (status, drivers) = app.get("/api/admin/users?role=driver", ADMIN).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(drivers.as_array().unwrap().len(), 1);
        assert_eq!(drivers[0]["isApproved"], false);

        let (status, user) = app
            .put("/api/admin/users/drv/approval", ADMIN, json!({ "isApproved": true }))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(user["isApproved"], true);
        assert_eq!(user["role"], "driver");

        let (status, _) = app
            .put("/api/admin/users/ghost/approval", ADMIN, json!({ "isApproved": true }))
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn invalid_role_filter_is_400() {
        let app = app().await;
        let (status, body) = app.get("/api/admin/users?role=admin", ADMIN).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid role");
    }

    #[tokio::test]
    async fn lists_every_booking() {
        let app = app().await;
        insert_booking(&app.db, "b-1", "cust", "pending", None).await;
        insert_booking(&app.db, "b-2", "cust", "assigned", Some("drv")).await;
        let (status, all) = app.get("/api/admin/bookings", ADMIN).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(all.as_array().unwrap().len(), 2);
    }
}
