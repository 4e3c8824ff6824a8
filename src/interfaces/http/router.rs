//! API Router with Swagger UI

use std::sync::Arc;

use axum::{
    extract::FromRef,
    middleware,
    routing::{get, post, put},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::domain::RepositoryProvider;
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::interfaces::http::common::{ApiState, ErrorResponse};
use crate::interfaces::http::middleware::{auth_middleware, AuthState};

use super::modules::{
    admin, auth, bookings, dealers, ev_stations, feedback, health, payments, request_id, tyres,
};

/// Router-wide state; each handler extracts its slice via `FromRef`.
#[derive(Clone)]
pub struct AppState {
    pub api: ApiState,
    pub health: health::HealthState,
    pub auth: AuthState,
}

impl FromRef<AppState> for ApiState {
    fn from_ref(s: &AppState) -> Self {
        s.api.clone()
    }
}

impl FromRef<AppState> for health::HealthState {
    fn from_ref(s: &AppState) -> Self {
        s.health.clone()
    }
}

impl FromRef<AppState> for AuthState {
    fn from_ref(s: &AppState) -> Self {
        s.auth.clone()
    }
}

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Session token from the identity provider"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Auth
        auth::get_current_user,
        auth::set_role,
        auth::sync_session,
        // Admin
        admin::users_by_role,
        admin::update_approval,
        admin::all_bookings,
        // Dealers
        dealers::create_dealer,
        dealers::my_dealer,
        dealers::list_dealers,
        dealers::update_subscription,
        // Tyres
        tyres::list_tyres,
        tyres::dealer_tyres,
        tyres::create_tyre,
        tyres::update_stock,
        // Bookings
        bookings::create_booking,
        bookings::my_bookings,
        bookings::pending_bookings,
        bookings::assign_booking,
        bookings::update_booking_status,
        bookings::complete_booking,
        bookings::booking_feedback,
        // Payments
        payments::create_payment,
        payments::my_payments,
        payments::update_payment_status,
        // Feedback
        feedback::create_feedback,
        // EV stations
        ev_stations::create_ev_station,
        ev_stations::list_ev_stations,
        ev_stations::my_ev_station,
        ev_stations::update_availability,
    ),
    components(
        schemas(
            ErrorResponse,
            health::HealthResponse,
            health::ComponentHealth,
            auth::UserDto,
            auth::SetRoleRequest,
            admin::UpdateApprovalRequest,
            dealers::DealerDto,
            dealers::CreateDealerRequest,
            dealers::UpdateSubscriptionRequest,
            tyres::TyreDto,
            tyres::CreateTyreRequest,
            tyres::UpdateStockRequest,
            bookings::BookingDto,
            bookings::CreateBookingRequest,
            bookings::UpdateBookingStatusRequest,
            bookings::CompleteBookingRequest,
            payments::PaymentDto,
            payments::CreatePaymentRequest,
            payments::UpdatePaymentStatusRequest,
            feedback::FeedbackDto,
            feedback::CreateFeedbackRequest,
            ev_stations::EvStationDto,
            ev_stations::CreateEvStationRequest,
            ev_stations::UpdateAvailabilityRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service and database health"),
        (name = "Authentication", description = "Current user, role selection and session sync"),
        (name = "Admin", description = "Approval of dealers and drivers, marketplace oversight"),
        (name = "Dealers", description = "Dealer profiles and subscriptions"),
        (name = "Tyres", description = "Tyre catalogue and stock"),
        (name = "Bookings", description = "Tyre delivery and fitting bookings"),
        (name = "Payments", description = "Payment records and gateway references"),
        (name = "Feedback", description = "Customer ratings for completed bookings"),
        (name = "EV Stations", description = "EV charging station listings"),
    ),
    info(
        title = "TyreHub Marketplace API",
        version = "1.0.0",
        description = "Tyre sales, booking and delivery marketplace with dealers, drivers, customers and EV charging stations",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    db: DatabaseConnection,
    jwt_config: JwtConfig,
    admin_subjects: Vec<String>,
) -> Router {
    let state = AppState {
        api: ApiState { repos },
        health: health::HealthState::new(db),
        auth: AuthState::new(jwt_config, admin_subjects),
    };

    let api_routes = Router::new()
        // Auth
        .route("/auth/user", get(auth::get_current_user))
        .route("/auth/session", post(auth::sync_session))
        .route("/user/role", post(auth::set_role))
        // Admin
        .route("/admin/users", get(admin::users_by_role))
        .route("/admin/users/{id}/approval", put(admin::update_approval))
        .route("/admin/bookings", get(admin::all_bookings))
        // Dealers
        .route(
            "/dealers",
            get(dealers::list_dealers).post(dealers::create_dealer),
        )
        .route("/dealers/me", get(dealers::my_dealer))
        .route(
            "/dealers/{id}/subscription",
            put(dealers::update_subscription),
        )
        .route("/dealers/{id}/tyres", get(tyres::dealer_tyres))
        // Tyres
        .route("/tyres", get(tyres::list_tyres).post(tyres::create_tyre))
        .route("/tyres/{id}/stock", put(tyres::update_stock))
        // Bookings
        .route("/bookings", post(bookings::create_booking))
        .route("/bookings/mine", get(bookings::my_bookings))
        .route("/bookings/pending", get(bookings::pending_bookings))
        .route("/bookings/{id}/assign", post(bookings::assign_booking))
        .route("/bookings/{id}/status", put(bookings::update_booking_status))
        .route("/bookings/{id}/complete", post(bookings::complete_booking))
        .route("/bookings/{id}/feedback", get(bookings::booking_feedback))
        // Payments
        .route("/payments", post(payments::create_payment))
        .route("/payments/mine", get(payments::my_payments))
        .route(
            "/payments/{id}/status",
            put(payments::update_payment_status),
        )
        // Feedback
        .route("/feedback", post(feedback::create_feedback))
        // EV stations
        .route(
            "/ev-stations",
            get(ev_stations::list_ev_stations).post(ev_stations::create_ev_station),
        )
        .route("/ev-stations/me", get(ev_stations::my_ev_station))
        .route(
            "/ev-stations/{id}/availability",
            put(ev_stations::update_availability),
        )
        .layer(middleware::from_fn_with_state(
            state.auth.clone(),
            auth_middleware,
        ));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .route("/health", get(health::health_check))
        .nest("/api", api_routes)
        .with_state(state)
        .layer(middleware::from_fn(request_id::request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
