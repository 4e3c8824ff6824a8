//! Dealer handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use tracing::info;

use super::dto::{CreateDealerRequest, DealerDto, UpdateSubscriptionRequest};
use crate::domain::{NewDealer, UserRole};
use crate::interfaces::http::common::access::{current_user, require_admin, require_role};
use crate::interfaces::http::common::response::{conflict, not_found, or_fail};
use crate::interfaces::http::common::{ApiResult, ApiState, ErrorResponse, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

#[utoipa::path(
    post,
    path = "/api/dealers",
    tag = "Dealers",
    security(("bearer_auth" = [])),
    request_body = CreateDealerRequest,
    responses(
        (status = 201, description = "Dealer profile created", body = DealerDto),
        (status = 403, description = "Caller is not a dealer", body = ErrorResponse),
        (status = 409, description = "Caller already owns a dealer profile", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    )
)]
pub async fn create_dealer(
    State(state): State<ApiState>,
    Extension(auth): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<CreateDealerRequest>,
) -> ApiResult<(StatusCode, Json<DealerDto>)> {
    let user = current_user(&state, &auth).await?;
    require_role(&user, UserRole::Dealer)?;

    let dealers = state.repos.dealers();
    if dealers
        .get_dealer_by_user_id(&user.id)
        .await
        .map_err(or_fail("Failed to create dealer"))?
        .is_some()
    {
        return Err(conflict("Dealer profile already exists"));
    }

    let dealer = dealers
        .create_dealer(NewDealer {
            user_id: user.id,
            business_name: request.business_name,
            address: request.address,
            phone: request.phone,
        })
        .await
        .map_err(or_fail("Failed to create dealer"))?;

    Ok((StatusCode::CREATED, Json(DealerDto::from(dealer))))
}

#[utoipa::path(
    get,
    path = "/api/dealers/me",
    tag = "Dealers",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller's dealer profile", body = DealerDto),
        (status = 404, description = "No dealer profile", body = ErrorResponse)
    )
)]
pub async fn my_dealer(
    State(state): State<ApiState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> ApiResult<Json<DealerDto>> {
    let user = current_user(&state, &auth).await?;
    state
        .repos
        .dealers()
        .get_dealer_by_user_id(&user.id)
        .await
        .map_err(or_fail("Failed to fetch dealer"))?
        .map(|d| Json(DealerDto::from(d)))
        .ok_or_else(|| not_found("Dealer not found"))
}

#[utoipa::path(
    get,
    path = "/api/dealers",
    tag = "Dealers",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All dealers", body = Vec<DealerDto>)
    )
)]
pub async fn list_dealers(
    State(state): State<ApiState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> ApiResult<Json<Vec<DealerDto>>> {
    current_user(&state, &auth).await?;
    let dealers = state
        .repos
        .dealers()
        .get_all_dealers()
        .await
        .map_err(or_fail("Failed to fetch dealers"))?;
    Ok(Json(dealers.into_iter().map(DealerDto::from).collect()))
}

#[utoipa::path(
    put,
    path = "/api/dealers/{id}/subscription",
    tag = "Dealers",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Dealer ID")),
    request_body = UpdateSubscriptionRequest,
    responses(
        (status = 204, description = "Subscription updated"),
        (status = 403, description = "Administrator access required", body = ErrorResponse),
        (status = 404, description = "Dealer not found", body = ErrorResponse)
    )
)]
pub async fn update_subscription(
    State(state): State<ApiState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateSubscriptionRequest>,
) -> ApiResult<StatusCode> {
    current_user(&state, &auth).await?;
    require_admin(&auth)?;

    state
        .repos
        .dealers()
        .update_dealer_subscription(&id, &request.subscription_type, request.expires_at)
        .await
        .map_err(or_fail("Failed to update subscription"))?;

    info!("Admin {} set dealer {} subscription", auth.user_id, id);
    Ok(StatusCode::NO_CONTENT)
}
