use std::sync::Arc;

use chrono::NaiveDate;

pub mod memory;
pub mod seed;

pub use memory::{CityRecord, MemoryStore};

/// A single city's temperature history.
pub trait Location: Send + Sync {
    fn name(&self) -> &str;

    fn has_temperature(&self, date: NaiveDate) -> bool;

    /// Stores the maximum temperature for `date`. Returns `false` and leaves
    /// the existing record untouched if one is already present.
    fn add_temperature(&self, date: NaiveDate, value: f64) -> bool;
}

/// Backing store for cities and their temperature records.
///
/// `None` from the read operations signals that the store could not answer,
/// which is distinct from an empty result.
pub trait WeatherStore: Send + Sync {
    fn city_names(&self) -> Option<Vec<String>>;

    /// Temperature history for `city` in ascending date order.
    fn temperatures(&self, city: &str) -> Option<Vec<(NaiveDate, f64)>>;

    /// Adds `name` if it is not known yet. Returns whether a city was added.
    fn add_city(&self, name: &str) -> bool;

    fn city(&self, name: &str) -> Option<Arc<dyn Location>>;
}
