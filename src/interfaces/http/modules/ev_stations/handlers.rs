//! EV station handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{CreateEvStationRequest, EvStationDto, UpdateAvailabilityRequest};
use crate::domain::{NewEvStation, UserRole};
use crate::interfaces::http::common::access::{current_user, require_role};
use crate::interfaces::http::common::response::{conflict, forbidden, not_found, or_fail};
use crate::interfaces::http::common::{ApiResult, ApiState, ErrorResponse, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

#[utoipa::path(
    post,
    path = "/api/ev-stations",
    tag = "EV Stations",
    security(("bearer_auth" = [])),
    request_body = CreateEvStationRequest,
    responses(
        (status = 201, description = "Station registered", body = EvStationDto),
        (status = 403, description = "Caller is not a station operator", body = ErrorResponse),
        (status = 409, description = "Caller already operates a station", body = ErrorResponse)
    )
)]
pub async fn create_ev_station(
    State(state): State<ApiState>,
    Extension(auth): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<CreateEvStationRequest>,
) -> ApiResult<(StatusCode, Json<EvStationDto>)> {
    let user = current_user(&state, &auth).await?;
    require_role(&user, UserRole::EvStation)?;

    let stations = state.repos.ev_stations();
    if stations
        .get_ev_station_by_user_id(&user.id)
        .await
        .map_err(or_fail("Failed to register station"))?
        .is_some()
    {
        return Err(conflict("Station already registered"));
    }

    let station = stations
        .create_ev_station(NewEvStation {
            user_id: user.id,
            name: request.name,
            address: request.address,
        })
        .await
        .map_err(or_fail("Failed to register station"))?;

    Ok((StatusCode::CREATED, Json(EvStationDto::from(station))))
}

#[utoipa::path(
    get,
    path = "/api/ev-stations",
    tag = "EV Stations",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All stations", body = Vec<EvStationDto>)
    )
)]
pub async fn list_ev_stations(
    State(state): State<ApiState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> ApiResult<Json<Vec<EvStationDto>>> {
    current_user(&state, &auth).await?;
    let stations = state
        .repos
        .ev_stations()
        .get_all_ev_stations()
        .await
        .map_err(or_fail("Failed to fetch stations"))?;
    Ok(Json(stations.into_iter().map(EvStationDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/ev-stations/me",
    tag = "EV Stations",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller's station", body = EvStationDto),
        (status = 404, description = "No station registered", body = ErrorResponse)
    )
)]
pub async fn my_ev_station(
    State(state): State<ApiState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> ApiResult<Json<EvStationDto>> {
    let user = current_user(&state, &auth).await?;
    state
        .repos
        .ev_stations()
        .get_ev_station_by_user_id(&user.id)
        .await
        .map_err(or_fail("Failed to fetch station"))?
        .map(|s| Json(EvStationDto::from(s)))
        .ok_or_else(|| not_found("EV station not found"))
}

#[utoipa::path(
    put,
    path = "/api/ev-stations/{id}/availability",
    tag = "EV Stations",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Station ID")),
    request_body = UpdateAvailabilityRequest,
    responses(
        (status = 204, description = "Availability updated"),
        (status = 403, description = "Caller does not operate this station", body = ErrorResponse),
        (status = 404, description = "Station not found", body = ErrorResponse)
    )
)]
pub async fn update_availability(
    State(state): State<ApiState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateAvailabilityRequest>,
) -> ApiResult<StatusCode> {
    let user = current_user(&state, &auth).await?;
    let stations = state.repos.ev_stations();

    let station = stations
        .get_ev_station(&id)
        .await
        .map_err(or_fail("Failed to update station"))?
        .ok_or_else(|| not_found("EV station not found"))?;
    if station.user_id != user.id {
        return Err(forbidden("Station belongs to another operator"));
    }

    stations
        .update_ev_station_availability(&id, &request.availability)
        .await
        .map_err(or_fail("Failed to update station"))?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::infrastructure::database::entities::user::UserRole as DbRole;
    use crate::infrastructure::database::test_support::insert_user;
    use crate::interfaces::http::test_support::TestApp;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn operator_registers_and_updates_station() {
        let app = TestApp::new().await;
        insert_user(&app.db, "op", DbRole::EvStation, true).await;
        insert_user(&app.db, "op-2", DbRole::EvStation, true).await;
        insert_user(&app.db, "cust", DbRole::Customer, true).await;
        let body = json!({ "name": "Volt Stop", "address": "NH 44" });

        let (status, _) = app.post("/api/ev-stations", "cust", body.clone()).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, station) = app.post("/api/ev-stations", "op", body.clone()).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(station["availability"], "available");

        let (status, _) = app.post("/api/ev-stations", "op", body).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let uri = format!("/api/ev-stations/{}/availability", station["id"].as_str().unwrap());
        let (status, _) = app.put(&uri, "op-2", json!({ "availability": "offline" })).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        let (status, _) = app.put(&uri, "op", json!({ "availability": "busy" })).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, mine) = app.get("/api/ev-stations/me", "op").await;
        assert_eq!(mine["availability"], "busy");
        let (_, all) = app.get("/api/ev-stations", "cust").await;
        assert_eq!(all.as_array().unwrap().len(), 1);

        let (status, _) = app.get("/api/ev-stations/me", "op-2").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
