use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use super::domain::{BookingError, ReservationId, Room, RoomClass, RoomId};
use super::import::RoomInventoryImporter;
use super::service::{BookingRequest, FrontDeskService};

/// Router builder exposing the front-desk operations as JSON endpoints.
pub fn booking_router(service: Arc<FrontDeskService>) -> Router {
    Router::new()
        .route(
            "/api/v1/rooms",
            post(add_room_handler).get(list_rooms_handler),
        )
        .route("/api/v1/rooms/import", post(import_rooms_handler))
        .route("/api/v1/availability", get(availability_handler))
        .route("/api/v1/quote", get(quote_handler))
        .route(
            "/api/v1/reservations",
            post(book_handler).get(list_reservations_handler),
        )
        .route(
            "/api/v1/reservations/:reservation_id",
            get(reservation_handler)
                .put(modify_handler)
                .delete(cancel_handler),
        )
        .route("/api/v1/checkout", post(checkout_handler))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddRoomRequest {
    room_number: u32,
    class: RoomClass,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ModifyReservationRequest {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CheckoutRequest {
    guest_name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StayQuery {
    class: RoomClass,
    check_in: NaiveDate,
    check_out: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReservationListQuery {
    guest_name: Option<String>,
}

pub(crate) async fn add_room_handler(
    State(service): State<Arc<FrontDeskService>>,
    axum::Json(request): axum::Json<AddRoomRequest>,
) -> Response {
    let room = Room::new(RoomId(request.room_number), request.class);
    match service.add_room(room) {
        Ok(()) => {
            let payload = json!({
                "room_number": room.id,
                "class": room.class.label(),
            });
            (StatusCode::CREATED, axum::Json(payload)).into_response()
        }
        Err(error) => booking_error_response(&error),
    }
}

pub(crate) async fn list_rooms_handler(
    State(service): State<Arc<FrontDeskService>>,
) -> Response {
    (StatusCode::OK, axum::Json(service.rooms())).into_response()
}

pub(crate) async fn import_rooms_handler(
    State(service): State<Arc<FrontDeskService>>,
    body: String,
) -> Response {
    let rooms = match RoomInventoryImporter::from_reader(body.as_bytes()) {
        Ok(rooms) => rooms,
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
        }
    };

    match service.add_rooms(rooms) {
        Ok(registered) => {
            let payload = json!({
                "registered": registered,
            });
            (StatusCode::CREATED, axum::Json(payload)).into_response()
        }
        Err(error) => booking_error_response(&error),
    }
}

pub(crate) async fn availability_handler(
    State(service): State<Arc<FrontDeskService>>,
    Query(query): Query<StayQuery>,
) -> Response {
    match service.availability(query.class, query.check_in, query.check_out) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => booking_error_response(&error),
    }
}

pub(crate) async fn quote_handler(
    State(service): State<Arc<FrontDeskService>>,
    Query(query): Query<StayQuery>,
) -> Response {
    match service.quote(query.class, query.check_in, query.check_out) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => booking_error_response(&error),
    }
}

pub(crate) async fn book_handler(
    State(service): State<Arc<FrontDeskService>>,
    axum::Json(request): axum::Json<BookingRequest>,
) -> Response {
    match service.book(request) {
        Ok(receipt) => (StatusCode::CREATED, axum::Json(receipt)).into_response(),
        Err(error) => booking_error_response(&error),
    }
}

pub(crate) async fn list_reservations_handler(
    State(service): State<Arc<FrontDeskService>>,
    Query(query): Query<ReservationListQuery>,
) -> Response {
    let receipts = match query.guest_name {
        Some(ref guest_name) => service.reservations_for_guest(guest_name),
        None => service.list_reservations(),
    };
    (StatusCode::OK, axum::Json(receipts)).into_response()
}

pub(crate) async fn reservation_handler(
    State(service): State<Arc<FrontDeskService>>,
    Path(reservation_id): Path<String>,
) -> Response {
    let id = ReservationId(reservation_id);
    match service.reservation(&id) {
        Ok(receipt) => (StatusCode::OK, axum::Json(receipt)).into_response(),
        Err(error) => booking_error_response(&error),
    }
}

pub(crate) async fn modify_handler(
    State(service): State<Arc<FrontDeskService>>,
    Path(reservation_id): Path<String>,
    axum::Json(request): axum::Json<ModifyReservationRequest>,
) -> Response {
    let id = ReservationId(reservation_id);
    match service.modify(&id, request.check_in, request.check_out) {
        Ok(receipt) => (StatusCode::OK, axum::Json(receipt)).into_response(),
        Err(error) => booking_error_response(&error),
    }
}

pub(crate) async fn cancel_handler(
    State(service): State<Arc<FrontDeskService>>,
    Path(reservation_id): Path<String>,
) -> Response {
    let id = ReservationId(reservation_id);
    match service.cancel(&id) {
        Ok(receipt) => (StatusCode::OK, axum::Json(receipt)).into_response(),
        Err(error) => booking_error_response(&error),
    }
}

pub(crate) async fn checkout_handler(
    State(service): State<Arc<FrontDeskService>>,
    axum::Json(request): axum::Json<CheckoutRequest>,
) -> Response {
    match service.checkout(&request.guest_name) {
        Ok(receipt) => (StatusCode::OK, axum::Json(receipt)).into_response(),
        Err(error) => booking_error_response(&error),
    }
}

fn booking_error_response(error: &BookingError) -> Response {
    let status = match error {
        BookingError::RoomNotAvailable { .. } | BookingError::DuplicateRoom(_) => {
            StatusCode::CONFLICT
        }
        BookingError::InvalidDateRange { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        BookingError::ReservationNotFound(_)
        | BookingError::GuestNotFound(_)
        | BookingError::RoomNotFound(_) => StatusCode::NOT_FOUND,
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
