use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::billing::BillingCalculator;
use super::domain::{
    BookingError, Guest, Reservation, ReservationId, Room, RoomClass, RoomId, StayRange,
};
use super::ledger::BookingLedger;

/// Inbound booking request as received from callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub guest_name: String,
    pub guest_phone: String,
    pub class: RoomClass,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

/// Priced, caller-facing snapshot of a reservation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReservationReceipt {
    pub reservation_id: ReservationId,
    pub guest_name: String,
    pub guest_phone: String,
    pub room_number: RoomId,
    pub class: RoomClass,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: i64,
    pub nightly_rate: f64,
    pub total_charge: f64,
}

/// Availability answer for one class over one date range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailabilityView {
    pub class: RoomClass,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub available: bool,
    pub free_rooms: Vec<RoomId>,
}

/// Price preview for a prospective stay; no room is held.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteView {
    pub class: RoomClass,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: i64,
    pub nightly_rate: f64,
    pub total_charge: f64,
}

/// Inventory entry with the intervals currently held against the room.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomView {
    pub room_number: RoomId,
    pub class: RoomClass,
    pub booked: Vec<BookedStayView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookedStayView {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

/// Facade composing the ledger and the billing calculator behind one lock.
///
/// Every operation that checks and then mutates availability runs under the
/// same mutex acquisition, so concurrent callers cannot interleave between
/// the check and the write.
#[derive(Debug, Default)]
pub struct FrontDeskService {
    ledger: Mutex<BookingLedger>,
    billing: BillingCalculator,
}

impl FrontDeskService {
    pub fn new(billing: BillingCalculator) -> Self {
        Self {
            ledger: Mutex::new(BookingLedger::new()),
            billing,
        }
    }

    /// Build a service with the given rooms already registered.
    pub fn with_rooms(
        billing: BillingCalculator,
        rooms: impl IntoIterator<Item = Room>,
    ) -> Result<Self, BookingError> {
        let service = Self::new(billing);
        service.add_rooms(rooms)?;
        Ok(service)
    }

    pub fn add_room(&self, room: Room) -> Result<(), BookingError> {
        self.ledger().add_room(room)
    }

    /// Register a batch of rooms, returning how many were added. Stops at
    /// the first duplicate room number.
    pub fn add_rooms(&self, rooms: impl IntoIterator<Item = Room>) -> Result<usize, BookingError> {
        let mut ledger = self.ledger();
        let mut added = 0;
        for room in rooms {
            ledger.add_room(room)?;
            added += 1;
        }
        Ok(added)
    }

    /// Book the first free room of the requested class, returning a priced
    /// receipt.
    pub fn book(&self, request: BookingRequest) -> Result<ReservationReceipt, BookingError> {
        let stay = StayRange::new(request.check_in, request.check_out)?;
        let guest = Guest::new(request.guest_name, request.guest_phone);
        let mut ledger = self.ledger();
        let reservation = ledger.reserve(guest, request.class, stay)?;
        Ok(self.receipt(&reservation))
    }

    /// Move an existing reservation to new dates. On failure the original
    /// reservation is left untouched.
    pub fn modify(
        &self,
        id: &ReservationId,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<ReservationReceipt, BookingError> {
        let stay = StayRange::new(check_in, check_out)?;
        let reservation = self.ledger().modify(id, stay)?;
        Ok(self.receipt(&reservation))
    }

    /// Cancel a reservation by identifier, freeing its room interval.
    pub fn cancel(&self, id: &ReservationId) -> Result<ReservationReceipt, BookingError> {
        let reservation = self.ledger().cancel(id)?;
        Ok(self.receipt(&reservation))
    }

    /// Check out the earliest reservation held under the guest name and
    /// return the final bill.
    pub fn checkout(&self, guest_name: &str) -> Result<ReservationReceipt, BookingError> {
        let reservation = self.ledger().checkout_guest(guest_name)?;
        Ok(self.receipt(&reservation))
    }

    pub fn reservation(&self, id: &ReservationId) -> Result<ReservationReceipt, BookingError> {
        let ledger = self.ledger();
        let reservation = ledger
            .get(id)
            .ok_or_else(|| BookingError::ReservationNotFound(id.clone()))?;
        Ok(self.receipt(reservation))
    }

    /// Active reservations in booking order, each with its running bill.
    pub fn list_reservations(&self) -> Vec<ReservationReceipt> {
        let ledger = self.ledger();
        ledger
            .reservations()
            .iter()
            .map(|reservation| self.receipt(reservation))
            .collect()
    }

    /// Reservations held under the guest name, matched case-insensitively,
    /// in booking order.
    pub fn reservations_for_guest(&self, guest_name: &str) -> Vec<ReservationReceipt> {
        let ledger = self.ledger();
        ledger
            .reservations()
            .iter()
            .filter(|reservation| reservation.guest.name_matches(guest_name))
            .map(|reservation| self.receipt(reservation))
            .collect()
    }

    pub fn availability(
        &self,
        class: RoomClass,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<AvailabilityView, BookingError> {
        let stay = StayRange::new(check_in, check_out)?;
        let ledger = self.ledger();
        let free_rooms = ledger.free_rooms(class, &stay);
        Ok(AvailabilityView {
            class,
            check_in,
            check_out,
            available: !free_rooms.is_empty(),
            free_rooms,
        })
    }

    /// Price a prospective stay without holding a room.
    pub fn quote(
        &self,
        class: RoomClass,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<QuoteView, BookingError> {
        let stay = StayRange::new(check_in, check_out)?;
        Ok(QuoteView {
            class,
            check_in,
            check_out,
            nights: stay.nights(),
            nightly_rate: self.billing.nightly_rate(class),
            total_charge: self.billing.charge(class, &stay),
        })
    }

    /// Inventory snapshot in registration order.
    pub fn rooms(&self) -> Vec<RoomView> {
        let ledger = self.ledger();
        let catalog = ledger.catalog();
        catalog
            .rooms()
            .map(|room| RoomView {
                room_number: room.id,
                class: room.class,
                booked: catalog
                    .booked(room.id)
                    .unwrap_or_default()
                    .iter()
                    .map(|stay| BookedStayView {
                        check_in: stay.check_in(),
                        check_out: stay.check_out(),
                    })
                    .collect(),
            })
            .collect()
    }

    fn receipt(&self, reservation: &Reservation) -> ReservationReceipt {
        ReservationReceipt {
            reservation_id: reservation.id.clone(),
            guest_name: reservation.guest.name.clone(),
            guest_phone: reservation.guest.phone.clone(),
            room_number: reservation.room_id,
            class: reservation.class,
            check_in: reservation.stay.check_in(),
            check_out: reservation.stay.check_out(),
            nights: reservation.stay.nights(),
            nightly_rate: self.billing.nightly_rate(reservation.class),
            total_charge: self.billing.charge(reservation.class, &reservation.stay),
        }
    }

    fn ledger(&self) -> MutexGuard<'_, BookingLedger> {
        self.ledger.lock().expect("ledger mutex poisoned")
    }
}
