//! Booking handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use tracing::info;

use super::dto::{BookingDto, CompleteBookingRequest, CreateBookingRequest, UpdateBookingStatusRequest};
use crate::domain::{Booking, BookingStatus, NewBooking, User, UserRole};
use crate::interfaces::http::common::access::{current_user, require_active_role, require_role};
use crate::interfaces::http::common::response::{
    bad_request, conflict, forbidden, not_found, or_fail,
};
use crate::interfaces::http::common::{ApiResult, ApiState, ErrorResponse, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;
use crate::interfaces::http::modules::feedback::FeedbackDto;

async fn find_booking(state: &ApiState, id: &str) -> ApiResult<Booking> {
    state
        .repos
        .bookings()
        .get_booking(id)
        .await
        .map_err(or_fail("Failed to fetch booking"))?
        .ok_or_else(|| not_found("Booking not found"))
}

/// Assigned driver or administrator
fn require_handler(auth: &AuthenticatedUser, user: &User, booking: &Booking) -> ApiResult<()> {
    if auth.is_admin || booking.is_assigned_to(&user.id) {
        Ok(())
    } else {
        Err(forbidden("Booking is not assigned to you"))
    }
}

fn to_dtos(bookings: Vec<Booking>) -> Json<Vec<BookingDto>> {
    Json(bookings.into_iter().map(BookingDto::from).collect())
}

#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = "Bookings",
    security(("bearer_auth" = [])),
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking created", body = BookingDto),
        (status = 403, description = "Caller is not a customer", body = ErrorResponse),
        (status = 404, description = "Tyre not found", body = ErrorResponse)
    )
)]
pub async fn create_booking(
    State(state): State<ApiState>,
    Extension(auth): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<CreateBookingRequest>,
) -> ApiResult<(StatusCode, Json<BookingDto>)> {
    let user = current_user(&state, &auth).await?;
    require_role(&user, UserRole::Customer)?;

    if let Some(tyre_id) = request.tyre_id.as_deref() {
        state
            .repos
            .tyres()
            .get_tyre(tyre_id)
            .await
            .map_err(or_fail("Failed to create booking"))?
            .ok_or_else(|| not_found("Tyre not found"))?;
    }

    let booking = state
        .repos
        .bookings()
        .create_booking(NewBooking {
            customer_id: user.id,
            tyre_id: request.tyre_id,
            pickup_address: request.pickup_address,
            dropoff_address: request.dropoff_address,
        })
        .await
        .map_err(or_fail("Failed to create booking"))?;

    Ok((StatusCode::CREATED, Json(BookingDto::from(booking))))
}

#[utoipa::path(
    get,
    path = "/api/bookings/mine",
    tag = "Bookings",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Customer's own bookings or driver's assigned bookings", body = Vec<BookingDto>),
        (status = 403, description = "Role has no bookings", body = ErrorResponse)
    )
)]
pub async fn my_bookings(
    State(state): State<ApiState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> ApiResult<Json<Vec<BookingDto>>> {
    let user = current_user(&state, &auth).await?;
    let bookings = state.repos.bookings();
    let found = match user.role {
        UserRole::Customer => bookings.get_bookings_by_customer_id(&user.id).await,
        UserRole::Driver => bookings.get_bookings_by_driver_id(&user.id).await,
        _ => return Err(forbidden("Only customers and drivers have bookings")),
    }
    .map_err(or_fail("Failed to fetch bookings"))?;
    Ok(to_dtos(found))
}

#[utoipa::path(
    get,
    path = "/api/bookings/pending",
    tag = "Bookings",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Bookings waiting for a driver", body = Vec<BookingDto>),
        (status = 403, description = "Not an approved driver", body = ErrorResponse)
    )
)]
pub async fn pending_bookings(
    State(state): State<ApiState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> ApiResult<Json<Vec<BookingDto>>> {
    let user = current_user(&state, &auth).await?;
    require_active_role(&user, UserRole::Driver)?;

    let pending = state
        .repos
        .bookings()
        .get_pending_bookings()
        .await
        .map_err(or_fail("Failed to fetch bookings"))?;
    Ok(to_dtos(pending))
}

#[utoipa::path(
    post,
    path = "/api/bookings/{id}/assign",
    tag = "Bookings",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Booking ID")),
    responses(
        (status = 204, description = "Booking assigned to the caller"),
        (status = 403, description = "Not an approved driver", body = ErrorResponse),
        (status = 404, description = "Booking not found", body = ErrorResponse),
        (status = 409, description = "Booking is no longer pending", body = ErrorResponse)
    )
)]
pub async fn assign_booking(
    State(state): State<ApiState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let user = current_user(&state, &auth).await?;
    require_active_role(&user, UserRole::Driver)?;

    let booking = find_booking(&state, &id).await?;
    if booking.status != BookingStatus::Pending {
        return Err(conflict("Booking is not pending"));
    }

    state
        .repos
        .bookings()
        .update_booking_status(&id, BookingStatus::Assigned, Some(&user.id))
        .await
        .map_err(or_fail("Failed to assign booking"))?;

    info!("Booking {} assigned to driver {}", id, user.id);
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    put,
    path = "/api/bookings/{id}/status",
    tag = "Bookings",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Booking ID")),
    request_body = UpdateBookingStatusRequest,
    responses(
        (status = 204, description = "Status updated"),
        (status = 400, description = "Unknown status, or completion requested here", body = ErrorResponse),
        (status = 403, description = "Not the assigned driver", body = ErrorResponse),
        (status = 404, description = "Booking not found", body = ErrorResponse),
        (status = 409, description = "Booking already completed or cancelled", body = ErrorResponse)
    )
)]
pub async fn update_booking_status(
    State(state): State<ApiState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateBookingStatusRequest>,
) -> ApiResult<StatusCode> {
    let status: BookingStatus = request
        .status
        .parse()
        .map_err(or_fail("Failed to update booking"))?;
    // Completion carries a fare and a timestamp
    if status == BookingStatus::Completed {
        return Err(bad_request("Use /api/bookings/{id}/complete to complete a booking"));
    }

    let user = current_user(&state, &auth).await?;
    let booking = find_booking(&state, &id).await?;
    require_handler(&auth, &user, &booking)?;
    if booking.status.is_terminal() {
        return Err(conflict(format!("Booking is already {}", booking.status)));
    }

    state
        .repos
        .bookings()
        .update_booking_status(&id, status, None)
        .await
        .map_err(or_fail("Failed to update booking"))?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/bookings/{id}/complete",
    tag = "Bookings",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Booking ID")),
    request_body = CompleteBookingRequest,
    responses(
        (status = 204, description = "Booking completed"),
        (status = 403, description = "Not the assigned driver", body = ErrorResponse),
        (status = 404, description = "Booking not found", body = ErrorResponse),
        (status = 422, description = "Negative fare", body = ErrorResponse)
    )
)]
pub async fn complete_booking(
    State(state): State<ApiState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<CompleteBookingRequest>,
) -> ApiResult<StatusCode> {
    let user = current_user(&state, &auth).await?;
    let booking = find_booking(&state, &id).await?;
    require_handler(&auth, &user, &booking)?;

    state
        .repos
        .bookings()
        .complete_booking(&id, request.fare)
        .await
        .map_err(or_fail("Failed to complete booking"))?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/bookings/{id}/feedback",
    tag = "Bookings",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Feedback left for the booking", body = FeedbackDto),
        (status = 404, description = "No feedback", body = ErrorResponse)
    )
)]
pub async fn booking_feedback(
    State(state): State<ApiState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> ApiResult<Json<FeedbackDto>> {
    current_user(&state, &auth).await?;
    state
        .repos
        .feedback()
        .get_feedback_by_booking_id(&id)
        .await
        .map_err(or_fail("Failed to fetch feedback"))?
        .map(|f| Json(FeedbackDto::from(f)))
        .ok_or_else(|| not_found("Feedback not found"))
}
