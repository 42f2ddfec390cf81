use std::sync::atomic::{AtomicU64, Ordering};

use super::catalog::RoomCatalog;
use super::domain::{
    BookingError, Guest, Reservation, ReservationId, Room, RoomClass, RoomId, StayRange,
};

static RESERVATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_reservation_id() -> ReservationId {
    let id = RESERVATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ReservationId(format!("res-{id:06}"))
}

/// Availability and allocation engine for the property.
///
/// Owns the room catalog together with the ordered list of active
/// reservations so every check-then-act sequence mutates a single unit of
/// state. Callers serialize access through one lock (see
/// `FrontDeskService`); the ledger itself assumes exclusive access.
#[derive(Debug, Default)]
pub struct BookingLedger {
    catalog: RoomCatalog,
    reservations: Vec<Reservation>,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> &RoomCatalog {
        &self.catalog
    }

    pub fn add_room(&mut self, room: Room) -> Result<(), BookingError> {
        self.catalog.add_room(room)
    }

    /// True when some room of the class is free over the whole stay.
    pub fn is_available(&self, class: RoomClass, stay: &StayRange) -> bool {
        self.catalog.first_free(class, stay).is_some()
    }

    /// Rooms of the class free over the whole stay, in registration order.
    pub fn free_rooms(&self, class: RoomClass, stay: &StayRange) -> Vec<RoomId> {
        self.catalog.free_rooms(class, stay)
    }

    /// Allocate the first free room of the class and append the reservation
    /// to the ledger. Nothing is recorded when no room fits.
    pub fn reserve(
        &mut self,
        guest: Guest,
        class: RoomClass,
        stay: StayRange,
    ) -> Result<Reservation, BookingError> {
        let room_id = match self.catalog.first_free(class, &stay) {
            Some(room_id) => room_id,
            None => {
                return Err(BookingError::RoomNotAvailable {
                    class,
                    check_in: stay.check_in(),
                    check_out: stay.check_out(),
                })
            }
        };
        self.catalog.occupy(room_id, stay)?;

        let reservation = Reservation {
            id: next_reservation_id(),
            guest,
            room_id,
            class,
            stay,
        };
        self.reservations.push(reservation.clone());
        Ok(reservation)
    }

    /// Move a reservation to a new stay, keeping its ledger position and
    /// identifier.
    ///
    /// The old interval is released before the search so the guest's own
    /// room can absorb a date slide. When no room of the class fits the new
    /// stay the old interval is restored and the ledger is left exactly as
    /// it was.
    pub fn modify(
        &mut self,
        id: &ReservationId,
        new_stay: StayRange,
    ) -> Result<Reservation, BookingError> {
        let at = self.position(id)?;
        let (old_room, old_stay, class) = {
            let held = &self.reservations[at];
            (held.room_id, held.stay, held.class)
        };

        self.catalog.release(old_room, &old_stay)?;
        let new_room = match self.catalog.first_free(class, &new_stay) {
            Some(room_id) => room_id,
            None => {
                self.catalog.occupy(old_room, old_stay)?;
                return Err(BookingError::RoomNotAvailable {
                    class,
                    check_in: new_stay.check_in(),
                    check_out: new_stay.check_out(),
                });
            }
        };
        self.catalog.occupy(new_room, new_stay)?;

        let held = &mut self.reservations[at];
        held.room_id = new_room;
        held.stay = new_stay;
        Ok(held.clone())
    }

    /// Remove a reservation and free its room interval.
    pub fn cancel(&mut self, id: &ReservationId) -> Result<Reservation, BookingError> {
        let at = self.position(id)?;
        let reservation = self.reservations.remove(at);
        self.catalog
            .release(reservation.room_id, &reservation.stay)?;
        Ok(reservation)
    }

    /// Check out the earliest-booked reservation held under the guest name.
    ///
    /// Matching is case-insensitive and stops at the first ledger entry, so
    /// a guest holding several reservations keeps the later ones.
    pub fn checkout_guest(&mut self, guest_name: &str) -> Result<Reservation, BookingError> {
        let at = self
            .reservations
            .iter()
            .position(|held| held.guest.name_matches(guest_name))
            .ok_or_else(|| BookingError::GuestNotFound(guest_name.trim().to_string()))?;
        let reservation = self.reservations.remove(at);
        self.catalog
            .release(reservation.room_id, &reservation.stay)?;
        Ok(reservation)
    }

    /// Active reservations in booking order.
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn get(&self, id: &ReservationId) -> Option<&Reservation> {
        self.reservations.iter().find(|held| &held.id == id)
    }

    /// Secondary lookup by guest name; earliest booking wins.
    pub fn find_by_guest(&self, guest_name: &str) -> Option<&Reservation> {
        self.reservations
            .iter()
            .find(|held| held.guest.name_matches(guest_name))
    }

    fn position(&self, id: &ReservationId) -> Result<usize, BookingError> {
        self.reservations
            .iter()
            .position(|held| &held.id == id)
            .ok_or_else(|| BookingError::ReservationNotFound(id.clone()))
    }
}
