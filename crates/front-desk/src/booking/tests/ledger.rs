use super::common::*;
use crate::booking::domain::{BookingError, Guest, ReservationId, RoomClass, RoomId};

fn guest(name: &str) -> Guest {
    Guest::new(name, "555-0100")
}

#[test]
fn reserve_allocates_first_free_room_of_the_class() {
    let mut ledger = seeded_ledger();
    let weekend = stay(january(5), january(7));

    let first = ledger
        .reserve(guest("Alice Bennett"), RoomClass::Standard, weekend)
        .expect("two standard rooms are free");
    let second = ledger
        .reserve(guest("Bruno Costa"), RoomClass::Standard, weekend)
        .expect("one standard room is still free");

    assert_eq!(first.room_id, RoomId(101));
    assert_eq!(second.room_id, RoomId(102));
    assert_ne!(first.id, second.id, "reservation ids are unique");
    assert!(first.id.0.starts_with("res-"));
    assert_ledger_consistent(&ledger);
}

#[test]
fn reserve_fails_only_for_overlapping_stays() {
    let mut ledger = seeded_ledger();
    let held = stay(january(10), january(14));
    ledger
        .reserve(guest("Alice Bennett"), RoomClass::Suite, held)
        .expect("the suite is free");

    let overlapping = stay(january(12), january(16));
    let error = ledger
        .reserve(guest("Bruno Costa"), RoomClass::Suite, overlapping)
        .expect_err("only one suite exists");
    assert!(matches!(
        error,
        BookingError::RoomNotAvailable {
            class: RoomClass::Suite,
            ..
        }
    ));

    let disjoint = stay(january(14), january(16));
    ledger
        .reserve(guest("Bruno Costa"), RoomClass::Suite, disjoint)
        .expect("back-to-back stays share the turnover day");
    assert_ledger_consistent(&ledger);
}

#[test]
fn reserve_leaves_no_trace_when_class_is_full() {
    let mut ledger = seeded_ledger();
    let week = stay(january(8), january(12));
    ledger
        .reserve(guest("Alice Bennett"), RoomClass::Suite, week)
        .expect("the suite is free");

    let before = ledger.reservations().len();
    let result = ledger.reserve(guest("Bruno Costa"), RoomClass::Suite, week);

    assert!(result.is_err());
    assert_eq!(ledger.reservations().len(), before);
    assert_ledger_consistent(&ledger);
}

#[test]
fn modify_slides_dates_within_the_same_room() {
    let mut ledger = seeded_ledger();
    let original = stay(january(10), january(14));
    let reservation = ledger
        .reserve(guest("Alice Bennett"), RoomClass::Suite, original)
        .expect("the suite is free");

    let slid = stay(january(12), january(16));
    let updated = ledger
        .modify(&reservation.id, slid)
        .expect("the suite's own interval must not block the slide");

    assert_eq!(updated.id, reservation.id);
    assert_eq!(updated.room_id, RoomId(301));
    assert_eq!(updated.stay, slid);
    assert_ledger_consistent(&ledger);
}

#[test]
fn modify_restores_everything_when_no_room_fits() {
    let mut ledger = seeded_ledger();
    let first = ledger
        .reserve(
            guest("Alice Bennett"),
            RoomClass::Deluxe,
            stay(january(5), january(8)),
        )
        .expect("deluxe 201 is free");
    let second = ledger
        .reserve(
            guest("Bruno Costa"),
            RoomClass::Deluxe,
            stay(january(8), january(12)),
        )
        .expect("201 turns over on the eighth");
    let third = ledger
        .reserve(
            guest("Carla Diaz"),
            RoomClass::Deluxe,
            stay(january(9), january(11)),
        )
        .expect("deluxe 202 is free");
    assert_eq!(second.room_id, first.room_id);

    // Both deluxe rooms are taken over the target range, including the
    // first guest's own room.
    let blocked = stay(january(9), january(11));
    let error = ledger
        .modify(&first.id, blocked)
        .expect_err("no deluxe room fits the new dates");
    assert!(matches!(error, BookingError::RoomNotAvailable { .. }));

    let unchanged = ledger.get(&first.id).expect("reservation survives");
    assert_eq!(unchanged.stay, first.stay);
    assert_eq!(unchanged.room_id, first.room_id);
    let untouched = ledger.get(&second.id).expect("other reservation survives");
    assert_eq!(untouched.stay, second.stay);
    assert_eq!(
        ledger.get(&third.id).expect("third reservation survives").stay,
        third.stay
    );
    assert_ledger_consistent(&ledger);
}

#[test]
fn modify_unknown_reservation_is_reported() {
    let mut ledger = seeded_ledger();
    let error = ledger
        .modify(
            &ReservationId("res-999999".to_string()),
            stay(january(5), january(7)),
        )
        .expect_err("nothing is booked");
    assert!(matches!(error, BookingError::ReservationNotFound(_)));
}

#[test]
fn cancel_frees_the_room_interval() {
    let mut ledger = seeded_ledger();
    let week = stay(january(8), january(12));
    let reservation = ledger
        .reserve(guest("Alice Bennett"), RoomClass::Suite, week)
        .expect("the suite is free");
    assert!(!ledger.is_available(RoomClass::Suite, &week));

    let cancelled = ledger.cancel(&reservation.id).expect("reservation exists");
    assert_eq!(cancelled.id, reservation.id);
    assert!(ledger.is_available(RoomClass::Suite, &week));
    assert!(ledger.reservations().is_empty());

    let error = ledger
        .cancel(&reservation.id)
        .expect_err("cancelling twice must fail");
    assert_eq!(error, BookingError::ReservationNotFound(reservation.id));
    assert_ledger_consistent(&ledger);
}

#[test]
fn checkout_matches_guest_names_case_insensitively() {
    let mut ledger = seeded_ledger();
    let early = ledger
        .reserve(
            guest("Alice Bennett"),
            RoomClass::Standard,
            stay(january(5), january(7)),
        )
        .expect("room 101 is free");
    let later = ledger
        .reserve(
            guest("ALICE BENNETT"),
            RoomClass::Deluxe,
            stay(january(20), january(22)),
        )
        .expect("room 201 is free");

    let departed = ledger
        .checkout_guest("alice bennett")
        .expect("name matching ignores case");

    assert_eq!(
        departed.id, early.id,
        "the earliest booking checks out first"
    );
    assert_eq!(ledger.reservations().len(), 1);
    assert_eq!(ledger.reservations()[0].id, later.id);
    assert_ledger_consistent(&ledger);
}

#[test]
fn checkout_unknown_guest_is_reported() {
    let mut ledger = seeded_ledger();
    let error = ledger
        .checkout_guest("Nobody Home")
        .expect_err("ledger is empty");
    assert_eq!(
        error,
        BookingError::GuestNotFound("Nobody Home".to_string())
    );
}

#[test]
fn find_by_guest_returns_the_earliest_booking() {
    let mut ledger = seeded_ledger();
    let early = ledger
        .reserve(
            guest("Alice Bennett"),
            RoomClass::Standard,
            stay(january(5), january(7)),
        )
        .expect("room 101 is free");
    ledger
        .reserve(
            guest("alice bennett"),
            RoomClass::Suite,
            stay(january(10), january(12)),
        )
        .expect("the suite is free");

    let found = ledger
        .find_by_guest("Alice BENNETT")
        .expect("guest holds reservations");
    assert_eq!(found.id, early.id);
    assert!(ledger.find_by_guest("Bruno Costa").is_none());
}
