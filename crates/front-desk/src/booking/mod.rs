//! Room inventory, availability search, reservation lifecycle, and stay
//! billing for a single property.
//!
//! The ledger is the single source of truth for what is booked: every room
//! interval held in the catalog corresponds to exactly one active
//! reservation, and all check-then-act sequences run under the service's
//! lock so concurrent callers cannot double-allocate a room.

pub(crate) mod billing;
pub(crate) mod catalog;
pub mod domain;
pub(crate) mod import;
pub(crate) mod ledger;
pub(crate) mod rates;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use billing::BillingCalculator;
pub use catalog::RoomCatalog;
pub use domain::{
    BookingError, Guest, Reservation, ReservationId, Room, RoomClass, RoomId, StayRange,
};
pub use import::{standard_inventory, InventoryImportError, RoomInventoryImporter};
pub use ledger::BookingLedger;
pub use rates::RateTable;
pub use router::booking_router;
pub use service::{
    AvailabilityView, BookedStayView, BookingRequest, FrontDeskService, QuoteView,
    ReservationReceipt, RoomView,
};
