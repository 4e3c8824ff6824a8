//! Tyre handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{CreateTyreRequest, TyreDto, TyreSearchParams, UpdateStockRequest};
use crate::domain::{Dealer, NewTyre, User, UserRole};
use crate::interfaces::http::common::access::{current_user, require_active_role};
use crate::interfaces::http::common::response::{forbidden, not_found, or_fail};
use crate::interfaces::http::common::{ApiResult, ApiState, ErrorResponse, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

/// Approved dealer with a dealer profile
async fn acting_dealer(state: &ApiState, user: &User) -> ApiResult<Dealer> {
    require_active_role(user, UserRole::Dealer)?;
    state
        .repos
        .dealers()
        .get_dealer_by_user_id(&user.id)
        .await
        .map_err(or_fail("Failed to fetch dealer"))?
        .ok_or_else(|| forbidden("Dealer profile required"))
}

#[utoipa::path(
    get,
    path = "/api/tyres",
    tag = "Tyres",
    security(("bearer_auth" = [])),
    params(TyreSearchParams),
    responses(
        (status = 200, description = "Tyres, optionally of one brand", body = Vec<TyreDto>)
    )
)]
pub async fn list_tyres(
    State(state): State<ApiState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Query(params): Query<TyreSearchParams>,
) -> ApiResult<Json<Vec<TyreDto>>> {
    current_user(&state, &auth).await?;
    let tyres = state.repos.tyres();
    let found = match params.brand.as_deref().filter(|b| !b.is_empty()) {
        Some(brand) => tyres.get_tyres_by_brand(brand).await,
        None => tyres.get_all_tyres().await,
    }
    .map_err(or_fail("Failed to fetch tyres"))?;
    Ok(Json(found.into_iter().map(TyreDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/dealers/{id}/tyres",
    tag = "Tyres",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Dealer ID")),
    responses(
        (status = 200, description = "The dealer's tyres", body = Vec<TyreDto>),
        (status = 404, description = "Dealer not found", body = ErrorResponse)
    )
)]
pub async fn dealer_tyres(
    State(state): State<ApiState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(dealer_id): Path<String>,
) -> ApiResult<Json<Vec<TyreDto>>> {
    current_user(&state, &auth).await?;
    state
        .repos
        .dealers()
        .get_dealer(&dealer_id)
        .await
        .map_err(or_fail("Failed to fetch tyres"))?
        .ok_or_else(|| not_found("Dealer not found"))?;

    let tyres = state
        .repos
        .tyres()
        .get_tyres_by_dealer_id(&dealer_id)
        .await
        .map_err(or_fail("Failed to fetch tyres"))?;
    Ok(Json(tyres.into_iter().map(TyreDto::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/tyres",
    tag = "Tyres",
    security(("bearer_auth" = [])),
    request_body = CreateTyreRequest,
    responses(
        (status = 201, description = "Tyre listed", body = TyreDto),
        (status = 403, description = "Not an approved dealer with a profile", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    )
)]
pub async fn create_tyre(
    State(state): State<ApiState>,
    Extension(auth): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<CreateTyreRequest>,
) -> ApiResult<(StatusCode, Json<TyreDto>)> {
    let user = current_user(&state, &auth).await?;
    let dealer = acting_dealer(&state, &user).await?;

    let tyre = state
        .repos
        .tyres()
        .create_tyre(NewTyre {
            dealer_id: dealer.id,
            brand: request.brand,
            model: request.model,
            size: request.size,
            price: request.price,
            stock: request.stock,
        })
        .await
        .map_err(or_fail("Failed to create tyre"))?;

    Ok((StatusCode::CREATED, Json(TyreDto::from(tyre))))
}

#[utoipa::path(
    put,
    path = "/api/tyres/{id}/stock",
    tag = "Tyres",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Tyre ID")),
    request_body = UpdateStockRequest,
    responses(
        (status = 204, description = "Stock updated"),
        (status = 403, description = "Tyre belongs to another dealer", body = ErrorResponse),
        (status = 404, description = "Tyre not found", body = ErrorResponse)
    )
)]
pub async fn update_stock(
    State(state): State<ApiState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateStockRequest>,
) -> ApiResult<StatusCode> {
    let user = current_user(&state, &auth).await?;
    let dealer = acting_dealer(&state, &user).await?;

    let tyre = state
        .repos
        .tyres()
        .get_tyre(&id)
        .await
        .map_err(or_fail("Failed to update stock"))?
        .ok_or_else(|| not_found("Tyre not found"))?;
    if tyre.dealer_id != dealer.id {
        return Err(forbidden("Tyre belongs to another dealer"));
    }

    state
        .repos
        .tyres()
        .update_tyre_stock(&id, request.stock)
        .await
        .map_err(or_fail("Failed to update stock"))?;
    Ok(StatusCode::NO_CONTENT)
}
