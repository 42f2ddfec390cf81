use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::domain::{Room, RoomClass, RoomId};

/// Error raised while loading a room inventory export.
#[derive(Debug, thiserror::Error)]
pub enum InventoryImportError {
    #[error("failed to read room inventory: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid room inventory CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("unknown room class '{0}' in inventory export")]
    UnknownClass(String),
}

#[derive(Debug, Deserialize)]
struct InventoryRow {
    room: u32,
    class: String,
}

/// Loads the property's room inventory from a CSV export with `room,class`
/// columns, e.g. exports from the channel manager's room list.
pub struct RoomInventoryImporter;

impl RoomInventoryImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Room>, InventoryImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Room>, InventoryImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut rooms = Vec::new();

        for record in csv_reader.deserialize::<InventoryRow>() {
            let row = record?;
            let class = RoomClass::from_name(&row.class)
                .ok_or_else(|| InventoryImportError::UnknownClass(row.class.clone()))?;
            rooms.push(Room::new(RoomId(row.room), class));
        }

        Ok(rooms)
    }
}

/// The seed inventory registered when no export is supplied: two standard
/// rooms, two deluxe rooms, and one suite.
pub fn standard_inventory() -> Vec<Room> {
    vec![
        Room::new(RoomId(101), RoomClass::Standard),
        Room::new(RoomId(102), RoomClass::Standard),
        Room::new(RoomId(201), RoomClass::Deluxe),
        Room::new(RoomId(202), RoomClass::Deluxe),
        Room::new(RoomId(301), RoomClass::Suite),
    ]
}
