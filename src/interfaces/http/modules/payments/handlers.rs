//! Payment handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use tracing::info;

use super::dto::{CreatePaymentRequest, PaymentDto, UpdatePaymentStatusRequest};
use crate::domain::{NewPayment, PaymentStatus};
use crate::interfaces::http::common::access::{current_user, require_admin};
use crate::interfaces::http::common::response::{forbidden, not_found, or_fail};
use crate::interfaces::http::common::{ApiResult, ApiState, ErrorResponse, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

#[utoipa::path(
    post,
    path = "/api/payments",
    tag = "Payments",
    security(("bearer_auth" = [])),
    request_body = CreatePaymentRequest,
    responses(
        (status = 201, description = "Payment recorded as pending", body = PaymentDto),
        (status = 403, description = "Booking belongs to another customer", body = ErrorResponse),
        (status = 404, description = "Booking not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    )
)]
pub async fn create_payment(
    State(state): State<ApiState>,
    Extension(auth): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<CreatePaymentRequest>,
) -> ApiResult<(StatusCode, Json<PaymentDto>)> {
    let user = current_user(&state, &auth).await?;

    if let Some(booking_id) = request.booking_id.as_deref() {
        let booking = state
            .repos
            .bookings()
            .get_booking(booking_id)
            .await
            .map_err(or_fail("Failed to create payment"))?
            .ok_or_else(|| not_found("Booking not found"))?;
        if booking.customer_id != user.id {
            return Err(forbidden("Booking belongs to another customer"));
        }
    }

    let payment = state
        .repos
        .payments()
        .create_payment(NewPayment {
            user_id: user.id,
            booking_id: request.booking_id,
            amount: request.amount,
            currency: request.currency,
        })
        .await
        .map_err(or_fail("Failed to create payment"))?;

    Ok((StatusCode::CREATED, Json(PaymentDto::from(payment))))
}

#[utoipa::path(
    get,
    path = "/api/payments/mine",
    tag = "Payments",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller's payments, newest first", body = Vec<PaymentDto>)
    )
)]
pub async fn my_payments(
    State(state): State<ApiState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> ApiResult<Json<Vec<PaymentDto>>> {
    let user = current_user(&state, &auth).await?;
    let payments = state
        .repos
        .payments()
        .get_payments_by_user_id(&user.id)
        .await
        .map_err(or_fail("Failed to fetch payments"))?;
    Ok(Json(payments.into_iter().map(PaymentDto::from).collect()))
}

#[utoipa::path(
    put,
    path = "/api/payments/{id}/status",
    tag = "Payments",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Payment ID")),
    request_body = UpdatePaymentStatusRequest,
    responses(
        (status = 204, description = "Status updated"),
        (status = 400, description = "Unknown status", body = ErrorResponse),
        (status = 403, description = "Administrator access required", body = ErrorResponse),
        (status = 404, description = "Payment not found", body = ErrorResponse)
    )
)]
pub async fn update_payment_status(
    State(state): State<ApiState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdatePaymentStatusRequest>,
) -> ApiResult<StatusCode> {
    current_user(&state, &auth).await?;
    require_admin(&auth)?;
    let status: PaymentStatus = request
        .status
        .parse()
        .map_err(or_fail("Failed to update payment"))?;

    state
        .repos
        .payments()
        .update_payment_status(&id, status, request.external_payment_id.as_deref())
        .await
        .map_err(or_fail("Failed to update payment"))?;

    info!("Payment {} marked {} by {}", id, status, auth.user_id);
    Ok(StatusCode::NO_CONTENT)
}
