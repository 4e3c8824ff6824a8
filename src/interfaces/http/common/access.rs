//! Caller lookup and role/approval gates shared by the marketplace handlers

use crate::domain::{User, UserRole};
use crate::interfaces::http::middleware::AuthenticatedUser;

use super::response::{forbidden, not_found, or_fail, ApiResult};
use super::ApiState;

/// The caller's user record, or 404 when they never signed in
pub async fn current_user(state: &ApiState, auth: &AuthenticatedUser) -> ApiResult<User> {
    state
        .repos
        .users()
        .get_user(&auth.user_id)
        .await
        .map_err(or_fail("Failed to fetch user"))?
        .ok_or_else(|| not_found("User not found"))
}

pub fn require_role(user: &User, role: UserRole) -> ApiResult<()> {
    if user.role == role {
        Ok(())
    } else {
        Err(forbidden(format!("Requires role {}", role)))
    }
}

/// Role check plus the approval gate for dealers and drivers
pub fn require_active_role(user: &User, role: UserRole) -> ApiResult<()> {
    require_role(user, role)?;
    if user.is_active_in_role() {
        Ok(())
    } else {
        Err(forbidden("Account awaiting approval"))
    }
}

pub fn require_admin(auth: &AuthenticatedUser) -> ApiResult<()> {
    if auth.is_admin {
        Ok(())
    } else {
        Err(forbidden("Administrator access required"))
    }
}
