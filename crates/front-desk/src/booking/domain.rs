use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for physical rooms (the number printed on the door).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(pub u32);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Room category determining the published nightly rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomClass {
    Standard,
    Deluxe,
    Suite,
}

impl RoomClass {
    pub const fn ordered() -> [Self; 3] {
        [Self::Standard, Self::Deluxe, Self::Suite]
    }

    pub const fn label(self) -> &'static str {
        match self {
            RoomClass::Standard => "standard",
            RoomClass::Deluxe => "deluxe",
            RoomClass::Suite => "suite",
        }
    }

    /// Parse a class name from an inventory export or CLI argument.
    pub fn from_name(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "standard" => Some(RoomClass::Standard),
            "deluxe" => Some(RoomClass::Deluxe),
            "suite" => Some(RoomClass::Suite),
            _ => None,
        }
    }
}

impl fmt::Display for RoomClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A physical room registered in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub class: RoomClass,
}

impl Room {
    pub fn new(id: RoomId, class: RoomClass) -> Self {
        Self { id, class }
    }
}

/// Guest contact details captured when a reservation is requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub name: String,
    pub phone: String,
}

impl Guest {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }

    /// Case-insensitive name comparison backing the guest lookup index.
    pub fn name_matches(&self, candidate: &str) -> bool {
        self.name.trim().to_lowercase() == candidate.trim().to_lowercase()
    }
}

/// Half-open stay interval `[check_in, check_out)`; the check-out day is a
/// turnover day and never counts as an occupied night.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayRange {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl StayRange {
    /// Validate and build a stay. Check-out must fall strictly after
    /// check-in, so every stay covers at least one night.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, BookingError> {
        if check_out <= check_in {
            return Err(BookingError::InvalidDateRange {
                check_in,
                check_out,
            });
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Whole nights charged for the stay; at least one by construction.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Two stays conflict when their half-open intervals intersect.
    /// Back-to-back stays sharing a turnover day do not conflict.
    pub fn overlaps(&self, other: &StayRange) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }
}

/// Identifier wrapper for ledger entries; the primary handle for modify and
/// cancel operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReservationId(pub String);

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An active booking linking a guest to a concrete room over a stay.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: ReservationId,
    pub guest: Guest,
    pub room_id: RoomId,
    pub class: RoomClass,
    pub stay: StayRange,
}

/// Failure taxonomy shared by the catalog and the ledger.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BookingError {
    #[error("no {class} room is free from {check_in} to {check_out}")]
    RoomNotAvailable {
        class: RoomClass,
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
    #[error("check-out {check_out} must fall after check-in {check_in}")]
    InvalidDateRange {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
    #[error("reservation {0} is not in the ledger")]
    ReservationNotFound(ReservationId),
    #[error("no reservation is held under the name '{0}'")]
    GuestNotFound(String),
    #[error("room {0} is already registered")]
    DuplicateRoom(RoomId),
    #[error("room {0} is not registered")]
    RoomNotFound(RoomId),
}
