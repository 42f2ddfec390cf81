use std::sync::Arc;

use axum::response::Response;
use axum::Router;
use chrono::NaiveDate;
use serde_json::Value;

use crate::booking::billing::BillingCalculator;
use crate::booking::catalog::RoomCatalog;
use crate::booking::domain::{Room, RoomClass, RoomId, StayRange};
use crate::booking::ledger::BookingLedger;
use crate::booking::router::booking_router;
use crate::booking::service::{BookingRequest, FrontDeskService};

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// January 2024 dates; most scenarios fit in one month.
pub(super) fn january(day: u32) -> NaiveDate {
    date(2024, 1, day)
}

pub(super) fn stay(check_in: NaiveDate, check_out: NaiveDate) -> StayRange {
    StayRange::new(check_in, check_out).expect("valid stay range")
}

/// The five-room property layout used across the scenarios: rooms 101 and
/// 102 standard, 201 and 202 deluxe, 301 the only suite.
pub(super) fn property_rooms() -> Vec<Room> {
    vec![
        Room::new(RoomId(101), RoomClass::Standard),
        Room::new(RoomId(102), RoomClass::Standard),
        Room::new(RoomId(201), RoomClass::Deluxe),
        Room::new(RoomId(202), RoomClass::Deluxe),
        Room::new(RoomId(301), RoomClass::Suite),
    ]
}

pub(super) fn seeded_catalog() -> RoomCatalog {
    let mut catalog = RoomCatalog::new();
    for room in property_rooms() {
        catalog.add_room(room).expect("rooms are distinct");
    }
    catalog
}

pub(super) fn seeded_ledger() -> BookingLedger {
    let mut ledger = BookingLedger::new();
    for room in property_rooms() {
        ledger.add_room(room).expect("rooms are distinct");
    }
    ledger
}

pub(super) fn front_desk() -> Arc<FrontDeskService> {
    Arc::new(
        FrontDeskService::with_rooms(BillingCalculator::default(), property_rooms())
            .expect("rooms are distinct"),
    )
}

pub(super) fn front_desk_router() -> Router {
    booking_router(front_desk())
}

pub(super) fn booking_request(
    guest_name: &str,
    class: RoomClass,
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> BookingRequest {
    BookingRequest {
        guest_name: guest_name.to_string(),
        guest_phone: "555-0100".to_string(),
        class,
        check_in,
        check_out,
    }
}

/// Every booked interval in the catalog must belong to exactly one active
/// reservation, and every reservation's stay must be held against its room.
pub(super) fn assert_ledger_consistent(ledger: &BookingLedger) {
    let mut held = 0;
    for room in ledger.catalog().rooms() {
        held += ledger
            .catalog()
            .booked(room.id)
            .expect("room is registered")
            .len();
    }
    assert_eq!(
        held,
        ledger.reservations().len(),
        "booked intervals must match active reservations one-to-one"
    );

    for reservation in ledger.reservations() {
        let booked = ledger
            .catalog()
            .booked(reservation.room_id)
            .expect("reserved room is registered");
        assert!(
            booked.contains(&reservation.stay),
            "stay for {} must be held against room {}",
            reservation.id,
            reservation.room_id
        );
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
