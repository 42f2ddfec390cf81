use std::collections::HashMap;

use super::domain::{BookingError, Room, RoomClass, RoomId, StayRange};

/// Registry of physical rooms and the booked intervals held against each.
///
/// Registration order is preserved so availability searches resolve ties
/// deterministically: the earliest-registered free room of a class wins.
#[derive(Debug, Default)]
pub struct RoomCatalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<RoomId, usize>,
}

#[derive(Debug)]
struct CatalogEntry {
    room: Room,
    /// Booked intervals ordered by check-in date.
    booked: Vec<StayRange>,
}

impl CatalogEntry {
    fn is_free(&self, stay: &StayRange) -> bool {
        self.booked.iter().all(|held| !held.overlaps(stay))
    }
}

impl RoomCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a room. Room numbers are unique across the property.
    pub fn add_room(&mut self, room: Room) -> Result<(), BookingError> {
        if self.index.contains_key(&room.id) {
            return Err(BookingError::DuplicateRoom(room.id));
        }
        self.index.insert(room.id, self.entries.len());
        self.entries.push(CatalogEntry {
            room,
            booked: Vec::new(),
        });
        Ok(())
    }

    /// First room of the class free over the whole stay, in registration
    /// order.
    pub fn first_free(&self, class: RoomClass, stay: &StayRange) -> Option<RoomId> {
        self.entries
            .iter()
            .filter(|entry| entry.room.class == class)
            .find(|entry| entry.is_free(stay))
            .map(|entry| entry.room.id)
    }

    /// Every room of the class free over the whole stay, in registration
    /// order.
    pub fn free_rooms(&self, class: RoomClass, stay: &StayRange) -> Vec<RoomId> {
        self.entries
            .iter()
            .filter(|entry| entry.room.class == class && entry.is_free(stay))
            .map(|entry| entry.room.id)
            .collect()
    }

    pub fn is_free(&self, id: RoomId, stay: &StayRange) -> Result<bool, BookingError> {
        Ok(self.entry(id)?.is_free(stay))
    }

    /// Record a booked interval against the room, keeping the interval list
    /// ordered by check-in. Recording an interval already present is a no-op.
    pub fn occupy(&mut self, id: RoomId, stay: StayRange) -> Result<(), BookingError> {
        let entry = self.entry_mut(id)?;
        if entry.booked.contains(&stay) {
            return Ok(());
        }
        let at = entry
            .booked
            .partition_point(|held| held.check_in() < stay.check_in());
        entry.booked.insert(at, stay);
        Ok(())
    }

    /// Drop a booked interval from the room. Dropping an absent interval is
    /// a no-op.
    pub fn release(&mut self, id: RoomId, stay: &StayRange) -> Result<(), BookingError> {
        let entry = self.entry_mut(id)?;
        entry.booked.retain(|held| held != stay);
        Ok(())
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.index.get(&id).map(|&at| &self.entries[at].room)
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.entries.iter().map(|entry| &entry.room)
    }

    /// Booked intervals currently held against the room, ordered by
    /// check-in date.
    pub fn booked(&self, id: RoomId) -> Result<&[StayRange], BookingError> {
        Ok(&self.entry(id)?.booked)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, id: RoomId) -> Result<&CatalogEntry, BookingError> {
        self.index
            .get(&id)
            .map(|&at| &self.entries[at])
            .ok_or(BookingError::RoomNotFound(id))
    }

    fn entry_mut(&mut self, id: RoomId) -> Result<&mut CatalogEntry, BookingError> {
        let at = *self
            .index
            .get(&id)
            .ok_or(BookingError::RoomNotFound(id))?;
        Ok(&mut self.entries[at])
    }
}
