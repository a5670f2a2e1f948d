// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use clap::Parser;
use serde::Deserialize;
use std::str::FromStr;
use std::sync::Arc;
use time::PrimitiveDateTime;
use time::macros::format_description;
use tracing::{error, info};

use navalha_api::{ApiError, available_slots, translate_domain_error};
use navalha_domain::{
    AppointmentId, BarberId, ClientContact, DomainError, NewAppointment, Role, ServiceId,
    ServiceRating, ShopSchedule, SlotGranularity,
};
use navalha_providers::http::wire::{
    AppointmentDto, BarberDto, ContactDto, CreateAppointmentRequest, ErrorResponse,
    RateAppointmentRequest, ScheduleDto, ServiceDto, SlotDto, kind,
};
use navalha_providers::{
    AppointmentStore, CatalogProvider, MemoryProfile, MemoryStore, ScheduleProvider, UserProfile,
    fixtures,
};

/// Navalha Server - HTTP backend for the Navalha booking system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Minutes between bookable slots
    #[arg(short, long, default_value_t = 60)]
    slot_minutes: u16,
}

/// Application state shared across handlers.
///
/// All providers are injected as trait objects; the binary wires the
/// in-memory implementations seeded with the demo fixtures.
#[derive(Clone)]
struct AppState {
    /// The barber and service catalog.
    catalog: Arc<dyn CatalogProvider>,
    /// The shop schedule.
    schedule: Arc<dyn ScheduleProvider>,
    /// The appointment store.
    store: Arc<dyn AppointmentStore>,
    /// The user profile holding contact prefill.
    profile: Arc<dyn UserProfile>,
    /// The slot spacing policy.
    granularity: SlotGranularity,
}

/// Query parameter carrying a calendar date.
#[derive(Debug, Clone, Deserialize)]
struct DateQuery {
    /// The date (`YYYY-MM-DD`).
    date: String,
}

/// Query parameter carrying the caller's current instant.
#[derive(Debug, Clone, Deserialize)]
struct NowQuery {
    /// The instant (`YYYY-MM-DDTHH:MM`).
    now: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The machine-readable error kind.
    kind: String,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            kind: self.kind,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::Conflict { .. } | ApiError::SubmissionInProgress => StatusCode::CONFLICT,
            ApiError::InvalidState { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Transport { .. } => StatusCode::BAD_GATEWAY,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            kind: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<navalha_providers::ProviderError> for HttpError {
    fn from(err: navalha_providers::ProviderError) -> Self {
        Self::from(ApiError::from(err))
    }
}

impl From<DomainError> for HttpError {
    fn from(err: DomainError) -> Self {
        Self::from(translate_domain_error(err))
    }
}

/// Parses the caller's role from the `x-role` header.
///
/// Absent header means guest.
fn caller_role(headers: &HeaderMap) -> Result<Role, HttpError> {
    let Some(value) = headers.get("x-role") else {
        return Ok(Role::Guest);
    };
    let role_str: &str = value.to_str().map_err(|_| HttpError {
        status: StatusCode::BAD_REQUEST,
        kind: kind::VALIDATION.to_string(),
        message: String::from("x-role header is not valid UTF-8"),
    })?;
    Role::from_str(role_str).map_err(HttpError::from)
}

/// Handler for GET `/barbers`.
async fn handle_list_barbers(
    AxumState(state): AxumState<AppState>,
) -> Result<Json<Vec<BarberDto>>, HttpError> {
    let barbers = state.catalog.list_barbers().await?;
    Ok(Json(barbers.into_iter().map(BarberDto::from).collect()))
}

/// Handler for GET `/barbers/{id}`.
async fn handle_get_barber(
    AxumState(state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BarberDto>, HttpError> {
    let barber = state
        .catalog
        .barber(&BarberId::new(&id))
        .await?
        .ok_or_else(|| HttpError::from(DomainError::BarberNotFound(id)))?;
    Ok(Json(BarberDto::from(barber)))
}

/// Handler for GET `/services`.
async fn handle_list_services(
    AxumState(state): AxumState<AppState>,
) -> Result<Json<Vec<ServiceDto>>, HttpError> {
    let services = state.catalog.list_services().await?;
    Ok(Json(services.into_iter().map(ServiceDto::from).collect()))
}

/// Handler for GET `/services/{id}`.
async fn handle_get_service(
    AxumState(state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ServiceDto>, HttpError> {
    let service = state
        .catalog
        .service(&ServiceId::new(&id))
        .await?
        .ok_or_else(|| HttpError::from(DomainError::ServiceNotFound(id)))?;
    Ok(Json(ServiceDto::from(service)))
}

/// Handler for GET `/schedule`.
async fn handle_get_schedule(
    AxumState(state): AxumState<AppState>,
) -> Result<Json<ScheduleDto>, HttpError> {
    let schedule: ShopSchedule = state.schedule.shop_schedule().await?;
    Ok(Json(ScheduleDto {
        weekday_open: schedule.weekdays().open().to_string(),
        weekday_close: schedule.weekdays().close().to_string(),
        saturday_open: schedule.saturday().open().to_string(),
        saturday_close: schedule.saturday().close().to_string(),
        is_open: schedule.is_open(),
    }))
}

/// Handler for GET `/barbers/{id}/slots?date=`.
async fn handle_get_slots(
    AxumState(state): AxumState<AppState>,
    Path(id): Path<String>,
    Query(query): Query<DateQuery>,
) -> Result<Json<Vec<SlotDto>>, HttpError> {
    let date: time::Date = navalha_domain::parse_date(&query.date)?;
    let slots = available_slots(
        state.catalog.as_ref(),
        state.schedule.as_ref(),
        state.store.as_ref(),
        &BarberId::new(&id),
        date,
        state.granularity,
    )
    .await
    .map_err(HttpError::from)?;
    Ok(Json(slots.into_iter().map(SlotDto::from).collect()))
}

/// Handler for GET `/barbers/{id}/booked-times?date=`.
async fn handle_booked_times(
    AxumState(state): AxumState<AppState>,
    Path(id): Path<String>,
    Query(query): Query<DateQuery>,
) -> Result<Json<Vec<String>>, HttpError> {
    let date: time::Date = navalha_domain::parse_date(&query.date)?;
    let times = state.store.booked_times(&BarberId::new(&id), date).await?;
    Ok(Json(times.iter().map(ToString::to_string).collect()))
}

/// Handler for POST `/appointments`.
async fn handle_create_appointment(
    AxumState(state): AxumState<AppState>,
    Json(request): Json<CreateAppointmentRequest>,
) -> Result<Json<AppointmentDto>, HttpError> {
    info!(
        barber = %request.barber_id,
        date = %request.date,
        time = %request.time,
        "Handling create_appointment request"
    );

    let draft: NewAppointment = NewAppointment::try_from(request)?;

    // The draft must reference a known barber and service before it
    // reaches the store.
    if state.catalog.barber(&draft.barber_id).await?.is_none() {
        return Err(HttpError::from(DomainError::BarberNotFound(
            draft.barber_id.value().to_string(),
        )));
    }
    if state.catalog.service(&draft.service_id).await?.is_none() {
        return Err(HttpError::from(DomainError::ServiceNotFound(
            draft.service_id.value().to_string(),
        )));
    }

    let appointment = state.store.create(draft).await?;
    Ok(Json(AppointmentDto::from(appointment)))
}

/// Handler for GET `/appointments`.
async fn handle_list_appointments(
    AxumState(state): AxumState<AppState>,
) -> Result<Json<Vec<AppointmentDto>>, HttpError> {
    let appointments = state.store.list().await?;
    Ok(Json(
        appointments.into_iter().map(AppointmentDto::from).collect(),
    ))
}

/// Handler for GET `/appointments/next?now=`.
async fn handle_next_appointment(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<NowQuery>,
) -> Result<Json<Option<AppointmentDto>>, HttpError> {
    let format = format_description!("[year]-[month]-[day]T[hour]:[minute]");
    let now: PrimitiveDateTime =
        PrimitiveDateTime::parse(&query.now, &format).map_err(|e| HttpError {
            status: StatusCode::BAD_REQUEST,
            kind: kind::VALIDATION.to_string(),
            message: format!("Failed to parse 'now' parameter '{}': {e}", query.now),
        })?;
    let next = state.store.next_scheduled(now).await?;
    Ok(Json(next.map(AppointmentDto::from)))
}

/// Handler for POST `/appointments/{id}/cancel`.
async fn handle_cancel_appointment(
    AxumState(state): AxumState<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<AppointmentDto>, HttpError> {
    let appointment = state.store.cancel(AppointmentId::new(id)).await?;
    Ok(Json(AppointmentDto::from(appointment)))
}

/// Handler for POST `/appointments/{id}/complete`.
async fn handle_complete_appointment(
    AxumState(state): AxumState<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<AppointmentDto>, HttpError> {
    let appointment = state.store.complete(AppointmentId::new(id)).await?;
    Ok(Json(AppointmentDto::from(appointment)))
}

/// Handler for POST `/appointments/{id}/rate`.
async fn handle_rate_appointment(
    AxumState(state): AxumState<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<RateAppointmentRequest>,
) -> Result<Json<AppointmentDto>, HttpError> {
    let rating: ServiceRating = ServiceRating::new(request.rating)?;
    let appointment = state.store.rate(AppointmentId::new(id), rating).await?;
    Ok(Json(AppointmentDto::from(appointment)))
}

/// Handler for GET `/profile`.
async fn handle_get_profile(
    AxumState(state): AxumState<AppState>,
) -> Result<Json<Option<ContactDto>>, HttpError> {
    let contact = state.profile.user_info().await?;
    Ok(Json(contact.map(ContactDto::from)))
}

/// Handler for PUT `/profile`.
async fn handle_put_profile(
    AxumState(state): AxumState<AppState>,
    Json(dto): Json<ContactDto>,
) -> Result<Json<ContactDto>, HttpError> {
    let contact: ClientContact = dto.clone().into();
    state.profile.set_user_info(contact).await?;
    Ok(Json(dto))
}

/// Handler for GET `/admin/appointments`.
///
/// Gated on the caller's role: only shop and platform operators may view
/// the shop-wide appointment list.
async fn handle_admin_appointments(
    AxumState(state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<AppointmentDto>>, HttpError> {
    let role: Role = caller_role(&headers)?;
    if !role.can_view_admin_dashboard() {
        return Err(HttpError {
            status: StatusCode::FORBIDDEN,
            kind: kind::FORBIDDEN.to_string(),
            message: format!("Role '{role}' may not view the admin dashboard"),
        });
    }

    let appointments = state.store.list().await?;
    Ok(Json(
        appointments.into_iter().map(AppointmentDto::from).collect(),
    ))
}

/// Builds the application router.
fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/barbers", get(handle_list_barbers))
        .route("/barbers/{id}", get(handle_get_barber))
        .route("/barbers/{id}/slots", get(handle_get_slots))
        .route("/barbers/{id}/booked-times", get(handle_booked_times))
        .route("/services", get(handle_list_services))
        .route("/services/{id}", get(handle_get_service))
        .route("/schedule", get(handle_get_schedule))
        .route("/appointments", post(handle_create_appointment))
        .route("/appointments", get(handle_list_appointments))
        .route("/appointments/next", get(handle_next_appointment))
        .route("/appointments/{id}/cancel", post(handle_cancel_appointment))
        .route(
            "/appointments/{id}/complete",
            post(handle_complete_appointment),
        )
        .route("/appointments/{id}/rate", post(handle_rate_appointment))
        .route("/profile", get(handle_get_profile))
        .route("/profile", put(handle_put_profile))
        .route("/admin/appointments", get(handle_admin_appointments))
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Navalha Server");

    let granularity: SlotGranularity = SlotGranularity::new(args.slot_minutes)?;

    let app_state: AppState = AppState {
        catalog: Arc::new(fixtures::demo_catalog()),
        schedule: Arc::new(fixtures::demo_schedule()),
        store: Arc::new(MemoryStore::new()),
        profile: Arc::new(MemoryProfile::new()),
        granularity,
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use tower::ServiceExt;

    /// Helper to create test app state with an empty store.
    fn create_test_app_state() -> AppState {
        AppState {
            catalog: Arc::new(fixtures::demo_catalog()),
            schedule: Arc::new(fixtures::demo_schedule()),
            store: Arc::new(MemoryStore::new()),
            profile: Arc::new(MemoryProfile::new()),
            granularity: SlotGranularity::ONE_HOUR,
        }
    }

    fn create_test_request_body() -> CreateAppointmentRequest {
        CreateAppointmentRequest {
            barber_id: String::from("jardel"),
            service_id: String::from("corte"),
            date: String::from("2024-06-03"),
            time: String::from("10:00"),
            client_name: String::from("Ana Souza"),
            client_phone: String::from("(11) 99999-9999"),
        }
    }

    fn post_appointment(request: &CreateAppointmentRequest) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/appointments")
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::to_vec(request).expect("Failed to serialize request"),
            ))
            .expect("Failed to build request")
    }

    #[tokio::test]
    async fn test_list_barbers_returns_demo_catalog() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/barbers")
                    .body(Body::empty())
                    .expect("Failed to build request"),
            )
            .await
            .expect("Request failed");

        assert_eq!(response.status(), HttpStatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let barbers: Vec<BarberDto> =
            serde_json::from_slice(&bytes).expect("Failed to parse body");
        assert_eq!(barbers.len(), 3);
        assert_eq!(barbers[0].name, "Jardel");
    }

    #[tokio::test]
    async fn test_slots_for_unknown_barber_returns_404() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/barbers/zico/slots?date=2024-06-03")
                    .body(Body::empty())
                    .expect("Failed to build request"),
            )
            .await
            .expect("Request failed");

        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_double_booking_returns_409() {
        let app: Router = build_router(create_test_app_state());
        let request = create_test_request_body();

        let first = app
            .clone()
            .oneshot(post_appointment(&request))
            .await
            .expect("Request failed");
        assert_eq!(first.status(), HttpStatusCode::OK);

        let second = app
            .oneshot(post_appointment(&request))
            .await
            .expect("Request failed");
        assert_eq!(second.status(), HttpStatusCode::CONFLICT);

        let bytes = axum::body::to_bytes(second.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body: ErrorResponse = serde_json::from_slice(&bytes).expect("Failed to parse body");
        assert_eq!(body.kind, kind::CONFLICT);
    }

    #[tokio::test]
    async fn test_cancel_twice_returns_422() {
        let app: Router = build_router(create_test_app_state());
        let request = create_test_request_body();

        app.clone()
            .oneshot(post_appointment(&request))
            .await
            .expect("Request failed");

        let cancel = || {
            Request::builder()
                .method("POST")
                .uri("/appointments/1/cancel")
                .body(Body::empty())
                .expect("Failed to build request")
        };

        let first = app
            .clone()
            .oneshot(cancel())
            .await
            .expect("Request failed");
        assert_eq!(first.status(), HttpStatusCode::OK);

        let second = app.oneshot(cancel()).await.expect("Request failed");
        assert_eq!(second.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_admin_listing_requires_admin_role() {
        let app: Router = build_router(create_test_app_state());

        let forbidden = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/admin/appointments")
                    .header("x-role", "client")
                    .body(Body::empty())
                    .expect("Failed to build request"),
            )
            .await
            .expect("Request failed");
        assert_eq!(forbidden.status(), HttpStatusCode::FORBIDDEN);

        let allowed = app
            .oneshot(
                Request::builder()
                    .uri("/admin/appointments")
                    .header("x-role", "barber_admin")
                    .body(Body::empty())
                    .expect("Failed to build request"),
            )
            .await
            .expect("Request failed");
        assert_eq!(allowed.status(), HttpStatusCode::OK);
    }

    #[tokio::test]
    async fn test_next_appointment_honors_now_parameter() {
        let app: Router = build_router(create_test_app_state());
        app.clone()
            .oneshot(post_appointment(&create_test_request_body()))
            .await
            .expect("Request failed");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/appointments/next?now=2024-06-03T09:00")
                    .body(Body::empty())
                    .expect("Failed to build request"),
            )
            .await
            .expect("Request failed");

        assert_eq!(response.status(), HttpStatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let next: Option<AppointmentDto> =
            serde_json::from_slice(&bytes).expect("Failed to parse body");
        assert_eq!(next.expect("Expected an appointment").time, "10:00");
    }
}
