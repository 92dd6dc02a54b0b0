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
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use lens_book_api::{
    ApiError, AuthenticatedActor, AvailabilityResponse, BookingInfo, ClientBookingsResponse,
    CreateBookingRequest, PhotographerBookingsResponse, Role, authenticate_stub, cancel_booking,
    create_booking, delete_booking, get_availability, get_booking, list_client_bookings,
    list_photographer_bookings, transition_booking,
};
use lens_book_domain::BookingStatus;
use lens_book_notify::{LogNotifier, Notifier};
use lens_book_persistence::SqlitePersistence;

/// Lens Book Server - HTTP server for the Lens Booking System
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access, plus the notification channel.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for booking records.
    persistence: Arc<Mutex<SqlitePersistence>>,
    /// The notification delivery channel.
    notifier: Arc<dyn Notifier>,
}

/// API request for creating a booking.
///
/// This includes authentication information in addition to the booking data.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateBookingApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
    /// The requesting client's reference.
    client_id: String,
    /// The photographer's reference.
    photographer_id: String,
    /// The kind of event.
    event_type: String,
    /// The event date (`YYYY-MM-DD`).
    event_date: String,
    /// The requested slot time (e.g. "10:00 AM"), if picked.
    event_time: Option<String>,
    /// Where the event takes place.
    event_location: String,
    /// Advisory duration hint.
    duration_hint: Option<String>,
    /// The total amount in whole currency units.
    total_amount: i64,
    /// The deposit amount; defaults to 0 when omitted.
    deposit_amount: Option<i64>,
    /// Optional free-form notes.
    notes: Option<String>,
}

/// API request for transitioning a booking's status.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct TransitionBookingApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
    /// The target status (`confirmed`, `declined`, or `cancelled`).
    target_status: String,
}

/// API request carrying only actor attribution (cancel, delete).
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ActorApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
}

/// Query parameters for the availability endpoint.
#[derive(Debug, Deserialize)]
struct AvailabilityQuery {
    /// The date to query (`YYYY-MM-DD`).
    date: String,
}

/// Query parameters for listing a photographer's bookings.
#[derive(Debug, Deserialize)]
struct ListBookingsQuery {
    /// Restrict to one lifecycle status when present.
    status: Option<String>,
}

/// API response for delete operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DeleteResponse {
    /// Success indicator.
    success: bool,
    /// The deleted booking's ID.
    booking_id: i64,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// A human-readable error message.
    message: String,
}

/// HTTP error wrapper carrying a status code and message.
struct HttpError {
    status: StatusCode,
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::SlotAlreadyBooked { .. } | ApiError::DomainRuleViolation { .. } => {
                StatusCode::CONFLICT
            }
            ApiError::StoreUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Parses a role string into a Role enum.
fn parse_role(role_str: &str) -> Result<Role, HttpError> {
    match role_str.to_lowercase().as_str() {
        "client" => Ok(Role::Client),
        "photographer" => Ok(Role::Photographer),
        "admin" => Ok(Role::Admin),
        _ => Err(HttpError {
            status: StatusCode::BAD_REQUEST,
            message: format!(
                "Invalid role: '{role_str}'. Must be 'client', 'photographer', or 'admin'"
            ),
        }),
    }
}

/// Parses a status string into a `BookingStatus`.
fn parse_status(status_str: &str) -> Result<BookingStatus, HttpError> {
    BookingStatus::from_str(status_str).map_err(|e| HttpError {
        status: StatusCode::BAD_REQUEST,
        message: e.to_string(),
    })
}

/// Authenticates the actor attribution carried on a request.
fn authenticate(actor_id: String, role_str: &str) -> Result<AuthenticatedActor, HttpError> {
    let role: Role = parse_role(role_str)?;
    authenticate_stub(actor_id, role).map_err(|e| HttpError {
        status: StatusCode::UNAUTHORIZED,
        message: e.to_string(),
    })
}

/// Handler for POST `/bookings` endpoint.
///
/// Creates a new booking request.
async fn handle_create_booking(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateBookingApiRequest>,
) -> Result<Json<BookingInfo>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        role = %req.actor_role,
        photographer_id = %req.photographer_id,
        event_date = %req.event_date,
        "Handling create_booking request"
    );

    let actor: AuthenticatedActor = authenticate(req.actor_id.clone(), &req.actor_role)?;

    let create_request: CreateBookingRequest = CreateBookingRequest {
        client_id: req.client_id,
        photographer_id: req.photographer_id,
        event_type: req.event_type,
        event_date: req.event_date,
        event_time: req.event_time,
        event_location: req.event_location,
        duration_hint: req.duration_hint,
        total_amount: req.total_amount,
        deposit_amount: req.deposit_amount,
        notes: req.notes,
    };

    let mut persistence = app_state.persistence.lock().await;
    let booking: BookingInfo = create_booking(
        &mut persistence,
        app_state.notifier.as_ref(),
        create_request,
        &actor,
    )?;
    drop(persistence);

    Ok(Json(booking))
}

/// Handler for GET `/bookings/{id}` endpoint.
async fn handle_get_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<i64>,
) -> Result<Json<BookingInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let booking: BookingInfo = get_booking(&mut persistence, booking_id)?;
    drop(persistence);

    Ok(Json(booking))
}

/// Handler for POST `/bookings/{id}/transition` endpoint.
///
/// Transitions a booking to a target status. The `pending → confirmed`
/// edge re-checks slot occupancy; a lost race returns 409.
async fn handle_transition_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<i64>,
    Json(req): Json<TransitionBookingApiRequest>,
) -> Result<Json<BookingInfo>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        role = %req.actor_role,
        booking_id,
        target = %req.target_status,
        "Handling transition_booking request"
    );

    let actor: AuthenticatedActor = authenticate(req.actor_id.clone(), &req.actor_role)?;
    let target: BookingStatus = parse_status(&req.target_status)?;

    let mut persistence = app_state.persistence.lock().await;
    let booking: BookingInfo = transition_booking(
        &mut persistence,
        app_state.notifier.as_ref(),
        booking_id,
        target,
        &actor,
    )?;
    drop(persistence);

    Ok(Json(booking))
}

/// Handler for POST `/bookings/{id}/cancel` endpoint.
async fn handle_cancel_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<i64>,
    Json(req): Json<ActorApiRequest>,
) -> Result<Json<BookingInfo>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        role = %req.actor_role,
        booking_id,
        "Handling cancel_booking request"
    );

    let actor: AuthenticatedActor = authenticate(req.actor_id.clone(), &req.actor_role)?;

    let mut persistence = app_state.persistence.lock().await;
    let booking: BookingInfo = cancel_booking(
        &mut persistence,
        app_state.notifier.as_ref(),
        booking_id,
        &actor,
    )?;
    drop(persistence);

    Ok(Json(booking))
}

/// Handler for DELETE `/bookings/{id}` endpoint.
///
/// The cancellation-as-deletion path: owning client or admin only.
async fn handle_delete_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<i64>,
    Json(req): Json<ActorApiRequest>,
) -> Result<Json<DeleteResponse>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        role = %req.actor_role,
        booking_id,
        "Handling delete_booking request"
    );

    let actor: AuthenticatedActor = authenticate(req.actor_id.clone(), &req.actor_role)?;

    let mut persistence = app_state.persistence.lock().await;
    delete_booking(
        &mut persistence,
        app_state.notifier.as_ref(),
        booking_id,
        &actor,
    )?;
    drop(persistence);

    Ok(Json(DeleteResponse {
        success: true,
        booking_id,
    }))
}

/// Handler for GET `/photographers/{id}/availability` endpoint.
///
/// Returns the slot catalog annotated with per-slot availability,
/// recomputed from live booking rows on every call.
async fn handle_get_availability(
    AxumState(app_state): AxumState<AppState>,
    Path(photographer_id): Path<String>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let availability: AvailabilityResponse =
        get_availability(&mut persistence, &photographer_id, &query.date)?;
    drop(persistence);

    Ok(Json(availability))
}

/// Handler for GET `/photographers/{id}/bookings` endpoint.
async fn handle_list_photographer_bookings(
    AxumState(app_state): AxumState<AppState>,
    Path(photographer_id): Path<String>,
    Query(query): Query<ListBookingsQuery>,
) -> Result<Json<PhotographerBookingsResponse>, HttpError> {
    let status_filter: Option<BookingStatus> = query
        .status
        .as_deref()
        .map(parse_status)
        .transpose()?;

    let mut persistence = app_state.persistence.lock().await;
    let listed: PhotographerBookingsResponse =
        list_photographer_bookings(&mut persistence, &photographer_id, status_filter)?;
    drop(persistence);

    Ok(Json(listed))
}

/// Handler for GET `/clients/{id}/bookings` endpoint.
async fn handle_list_client_bookings(
    AxumState(app_state): AxumState<AppState>,
    Path(client_id): Path<String>,
) -> Result<Json<ClientBookingsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let listed: ClientBookingsResponse = list_client_bookings(&mut persistence, &client_id)?;
    drop(persistence);

    Ok(Json(listed))
}

/// Builds the application router.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/bookings", post(handle_create_booking))
        .route("/bookings/{id}", get(handle_get_booking))
        .route("/bookings/{id}", delete(handle_delete_booking))
        .route("/bookings/{id}/transition", post(handle_transition_booking))
        .route("/bookings/{id}/cancel", post(handle_cancel_booking))
        .route(
            "/photographers/{id}/availability",
            get(handle_get_availability),
        )
        .route(
            "/photographers/{id}/bookings",
            get(handle_list_photographer_bookings),
        )
        .route("/clients/{id}/bookings", get(handle_list_client_bookings))
        .with_state(app_state)
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

    info!("Initializing Lens Book Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: SqlitePersistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        SqlitePersistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        SqlitePersistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        notifier: Arc::new(LogNotifier::new()),
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

    /// Helper to create test app state with in-memory persistence.
    fn create_test_app_state() -> AppState {
        let persistence: SqlitePersistence =
            SqlitePersistence::new_in_memory().expect("Failed to create in-memory persistence");
        AppState {
            persistence: Arc::new(Mutex::new(persistence)),
            notifier: Arc::new(LogNotifier::new()),
        }
    }

    /// Helper to create a test booking request body.
    fn create_test_booking_request(
        client_id: &str,
        photographer_id: &str,
        event_time: Option<&str>,
    ) -> CreateBookingApiRequest {
        CreateBookingApiRequest {
            actor_id: client_id.to_string(),
            actor_role: String::from("client"),
            client_id: client_id.to_string(),
            photographer_id: photographer_id.to_string(),
            event_type: String::from("wedding"),
            event_date: String::from("2024-06-15"),
            event_time: event_time.map(ToString::to_string),
            event_location: String::from("Riverside Park"),
            duration_hint: Some(String::from("2 hours")),
            total_amount: 150,
            deposit_amount: Some(50),
            notes: None,
        }
    }

    /// Helper to POST a JSON body and return the response.
    async fn post_json(app: Router, uri: &str, body: &impl Serialize) -> Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    /// Helper to read a JSON response body.
    async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_booking_returns_pending() {
        let app = build_router(create_test_app_state());
        let request = create_test_booking_request("client-1", "P1", Some("10:00 AM"));

        let response = post_json(app, "/bookings", &request).await;

        assert_eq!(response.status(), HttpStatusCode::OK);
        let booking: BookingInfo = read_json(response).await;
        assert_eq!(booking.status, "pending");
        assert!(booking.booking_id > 0);
        assert_eq!(booking.deposit_amount, 50);
    }

    #[tokio::test]
    async fn test_invalid_role_returns_bad_request() {
        let app = build_router(create_test_app_state());
        let mut request = create_test_booking_request("client-1", "P1", Some("10:00 AM"));
        request.actor_role = String::from("owner");

        let response = post_json(app, "/bookings", &request).await;

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_with_unknown_slot_time_returns_bad_request() {
        let app = build_router(create_test_app_state());
        let request = create_test_booking_request("client-1", "P1", Some("10:45 AM"));

        let response = post_json(app, "/bookings", &request).await;

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
        let error: ErrorResponse = read_json(response).await;
        assert!(error.error);
        assert!(error.message.contains("event_time"));
    }

    #[tokio::test]
    async fn test_confirm_flow_flips_availability() {
        let state = create_test_app_state();

        // Create a booking
        let response = post_json(
            build_router(state.clone()),
            "/bookings",
            &create_test_booking_request("client-1", "P1", Some("10:00 AM")),
        )
        .await;
        let booking: BookingInfo = read_json(response).await;

        // Slot is still available while pending
        let response = build_router(state.clone())
            .oneshot(
                Request::builder()
                    .uri("/photographers/P1/availability?date=2024-06-15")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let availability: AvailabilityResponse = read_json(response).await;
        assert!(
            availability
                .slots
                .iter()
                .find(|slot| slot.time == "10:00 AM")
                .unwrap()
                .available
        );

        // Confirm it as the photographer
        let response = post_json(
            build_router(state.clone()),
            &format!("/bookings/{}/transition", booking.booking_id),
            &TransitionBookingApiRequest {
                actor_id: String::from("P1"),
                actor_role: String::from("photographer"),
                target_status: String::from("confirmed"),
            },
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        // The slot is now occupied
        let response = build_router(state)
            .oneshot(
                Request::builder()
                    .uri("/photographers/P1/availability?date=2024-06-15")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let availability: AvailabilityResponse = read_json(response).await;
        assert!(
            !availability
                .slots
                .iter()
                .find(|slot| slot.time == "10:00 AM")
                .unwrap()
                .available
        );
    }

    #[tokio::test]
    async fn test_losing_confirmation_returns_conflict() {
        let state = create_test_app_state();

        let first: BookingInfo = read_json(
            post_json(
                build_router(state.clone()),
                "/bookings",
                &create_test_booking_request("client-1", "P1", Some("10:00 AM")),
            )
            .await,
        )
        .await;
        let second: BookingInfo = read_json(
            post_json(
                build_router(state.clone()),
                "/bookings",
                &create_test_booking_request("client-2", "P1", Some("10:00 AM")),
            )
            .await,
        )
        .await;

        let confirm = TransitionBookingApiRequest {
            actor_id: String::from("P1"),
            actor_role: String::from("photographer"),
            target_status: String::from("confirmed"),
        };

        let response = post_json(
            build_router(state.clone()),
            &format!("/bookings/{}/transition", first.booking_id),
            &confirm,
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let response = post_json(
            build_router(state.clone()),
            &format!("/bookings/{}/transition", second.booking_id),
            &confirm,
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::CONFLICT);

        // The loser remains pending
        let response = build_router(state)
            .oneshot(
                Request::builder()
                    .uri(format!("/bookings/{}", second.booking_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let booking: BookingInfo = read_json(response).await;
        assert_eq!(booking.status, "pending");
    }

    #[tokio::test]
    async fn test_client_confirming_returns_forbidden() {
        let state = create_test_app_state();

        let booking: BookingInfo = read_json(
            post_json(
                build_router(state.clone()),
                "/bookings",
                &create_test_booking_request("client-1", "P1", Some("10:00 AM")),
            )
            .await,
        )
        .await;

        let response = post_json(
            build_router(state),
            &format!("/bookings/{}/transition", booking.booking_id),
            &TransitionBookingApiRequest {
                actor_id: String::from("client-1"),
                actor_role: String::from("client"),
                target_status: String::from("confirmed"),
            },
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_get_missing_booking_returns_not_found() {
        let app = build_router(create_test_app_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/bookings/999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_booking_as_owner() {
        let state = create_test_app_state();

        let booking: BookingInfo = read_json(
            post_json(
                build_router(state.clone()),
                "/bookings",
                &create_test_booking_request("client-1", "P1", Some("10:00 AM")),
            )
            .await,
        )
        .await;

        let response = build_router(state.clone())
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/bookings/{}", booking.booking_id))
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::to_vec(&ActorApiRequest {
                            actor_id: String::from("client-1"),
                            actor_role: String::from("client"),
                        })
                        .unwrap(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        let deleted: DeleteResponse = read_json(response).await;
        assert!(deleted.success);

        let response = build_router(state)
            .oneshot(
                Request::builder()
                    .uri(format!("/bookings/{}", booking.booking_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_photographer_bookings_with_filter() {
        let state = create_test_app_state();

        for client in ["client-1", "client-2"] {
            post_json(
                build_router(state.clone()),
                "/bookings",
                &create_test_booking_request(client, "P1", Some("10:00 AM")),
            )
            .await;
        }

        let response = build_router(state)
            .oneshot(
                Request::builder()
                    .uri("/photographers/P1/bookings?status=pending")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        let listed: PhotographerBookingsResponse = read_json(response).await;
        assert_eq!(listed.bookings.len(), 2);
    }
}
