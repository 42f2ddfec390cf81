use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use chrono::NaiveDate;
use front_desk::booking::{
    standard_inventory, InventoryImportError, Room, RoomClass, RoomInventoryImporter,
};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Room inventory for startup: a CSV export when one is configured, the
/// built-in property layout otherwise.
pub(crate) fn seed_rooms(rooms_file: Option<&Path>) -> Result<Vec<Room>, InventoryImportError> {
    match rooms_file {
        Some(path) => RoomInventoryImporter::from_path(path),
        None => Ok(standard_inventory()),
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_room_class(raw: &str) -> Result<RoomClass, String> {
    RoomClass::from_name(raw)
        .ok_or_else(|| format!("unknown room class '{raw}' (expected standard, deluxe, or suite)"))
}
