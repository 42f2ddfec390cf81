use super::domain::RoomClass;

const STANDARD_NIGHTLY_RATE: f64 = 100.0;
const DELUXE_NIGHTLY_RATE: f64 = 150.0;
const SUITE_NIGHTLY_RATE: f64 = 250.0;

/// Published nightly rates for the property, keyed by room class.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    standard: f64,
    deluxe: f64,
    suite: f64,
}

impl RateTable {
    pub fn with_rates(standard: f64, deluxe: f64, suite: f64) -> Self {
        Self {
            standard,
            deluxe,
            suite,
        }
    }

    pub fn rate_for(&self, class: RoomClass) -> f64 {
        match class {
            RoomClass::Standard => self.standard,
            RoomClass::Deluxe => self.deluxe,
            RoomClass::Suite => self.suite,
        }
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::with_rates(
            STANDARD_NIGHTLY_RATE,
            DELUXE_NIGHTLY_RATE,
            SUITE_NIGHTLY_RATE,
        )
    }
}
