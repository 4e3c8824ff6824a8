//! Feedback handlers

use axum::{extract::State, http::StatusCode, Extension, Json};

use super::dto::{CreateFeedbackRequest, FeedbackDto};
use crate::domain::{BookingStatus, NewFeedback, UserRole};
use crate::interfaces::http::common::access::{current_user, require_role};
use crate::interfaces::http::common::response::{conflict, forbidden, not_found, or_fail};
use crate::interfaces::http::common::{ApiResult, ApiState, ErrorResponse, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

#[utoipa::path(
    post,
    path = "/api/feedback",
    tag = "Feedback",
    security(("bearer_auth" = [])),
    request_body = CreateFeedbackRequest,
    responses(
        (status = 201, description = "Feedback recorded", body = FeedbackDto),
        (status = 403, description = "Booking belongs to another customer", body = ErrorResponse),
        (status = 404, description = "Booking not found", body = ErrorResponse),
        (status = 409, description = "Booking not completed, or feedback already left", body = ErrorResponse),
        (status = 422, description = "Rating out of range", body = ErrorResponse)
    )
)]
pub async fn create_feedback(
    State(state): State<ApiState>,
    Extension(auth): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<CreateFeedbackRequest>,
) -> ApiResult<(StatusCode, Json<FeedbackDto>)> {
    let user = current_user(&state, &auth).await?;
    require_role(&user, UserRole::Customer)?;

    let booking = state
        .repos
        .bookings()
        .get_booking(&request.booking_id)
        .await
        .map_err(or_fail("Failed to leave feedback"))?
        .ok_or_else(|| not_found("Booking not found"))?;
    if booking.customer_id != user.id {
        return Err(forbidden("Booking belongs to another customer"));
    }
    if booking.status != BookingStatus::Completed {
        return Err(conflict("Only completed bookings can be rated"));
    }

    let feedback = state.repos.feedback();
    if feedback
        .get_feedback_by_booking_id(&booking.id)
        .await
        .map_err(or_fail("Failed to leave feedback"))?
        .is_some()
    {
        return Err(conflict("Feedback already left for this booking"));
    }

    let created = feedback
        .create_feedback(NewFeedback {
            booking_id: booking.id,
            customer_id: user.id,
            rating: request.rating,
            comment: request.comment,
        })
        .await
        .map_err(or_fail("Failed to leave feedback"))?;

    Ok((StatusCode::CREATED, Json(FeedbackDto::from(created))))
}

#[cfg(test)]
mod tests {
    use crate::infrastructure::database::entities::user::UserRole as DbRole;
    use crate::infrastructure::database::test_support::{insert_booking, insert_user};
    use crate::interfaces::http::test_support::TestApp;
    use axum::http::StatusCode;
    use serde_json::json;

    async fn app() -> TestApp {
        let app = TestApp::new().await;
        insert_user(&app.db, "cust", DbRole::Customer, true).await;
        insert_user(&app.db, "other", DbRole::Customer, true).await;
        insert_booking(&app.db, "b-1", "cust", "completed", None).await;
        app
    }

    #[tokio::test]
    async fn owner_rates_once() {
        let app = app().await;
        let body = json!({ "bookingId": "b-1", "rating": 5, "comment": "On time" });

        let (status, created) = app.post("/api/feedback", "cust", body.clone()).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["rating"], 5);

        let (status, _) = app.post("/api/feedback", "cust", body).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, found) = app.get("/api/bookings/b-1/feedback", "other").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(found["comment"], "On time");
    }

    #[tokio::test]
    async fn open_bookings_cannot_be_rated() {
        let app = app().await;
        insert_booking(&app.db, "b-2", "cust", "pending", None).await;
        let (status, body) = app
            .post("/api/feedback", "cust", json!({ "bookingId": "b-2", "rating": 4 }))
            .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["message"], "Only completed bookings can be rated");

        let (status, _) = app.get("/api/bookings/b-2/feedback", "cust").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn rating_must_be_in_range() {
        let app = app().await;
        for rating in [0, 6] {
            let (status, _) = app
                .post("/api/feedback", "cust", json!({ "bookingId": "b-1", "rating": rating }))
                .await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        }
    }

    #[tokio::test]
    async fn strangers_cannot_rate() {
        let app = app().await;
        let (status, _) = app
            .post("/api/feedback", "other", json!({ "bookingId": "b-1", "rating": 1 }))
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _) = app
            .post("/api/feedback", "cust", json!({ "bookingId": "nope", "rating": 3 }))
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
