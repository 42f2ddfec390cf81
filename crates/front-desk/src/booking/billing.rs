use super::domain::{RoomClass, StayRange};
use super::rates::RateTable;

/// Stateless calculator pricing stays against the rate table.
///
/// `StayRange` construction guarantees at least one night, so pricing is
/// infallible here.
#[derive(Debug, Clone, Default)]
pub struct BillingCalculator {
    rates: RateTable,
}

impl BillingCalculator {
    pub fn new(rates: RateTable) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    pub fn nightly_rate(&self, class: RoomClass) -> f64 {
        self.rates.rate_for(class)
    }

    /// Total charge for a stay: whole nights times the class nightly rate.
    pub fn charge(&self, class: RoomClass, stay: &StayRange) -> f64 {
        stay.nights() as f64 * self.rates.rate_for(class)
    }
}
