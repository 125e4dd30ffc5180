use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::RwLock;

use super::{Location, WeatherStore};

#[derive(Debug)]
pub struct CityRecord {
    name: String,
    // keyed by day so history comes back sorted
    temperatures: RwLock<BTreeMap<NaiveDate, f64>>,
}

impl CityRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            temperatures: RwLock::new(BTreeMap::new()),
        }
    }

    pub fn history(&self) -> Vec<(NaiveDate, f64)> {
        self.temperatures
            .read()
            .iter()
            .map(|(d, t)| (*d, *t))
            .collect()
    }
}

impl Location for CityRecord {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_temperature(&self, date: NaiveDate) -> bool {
        self.temperatures.read().contains_key(&date)
    }

    fn add_temperature(&self, date: NaiveDate, value: f64) -> bool {
        let mut temps = self.temperatures.write();
        if temps.contains_key(&date) {
            return false;
        }
        temps.insert(date, value);
        true
    }
}

/// Default in-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    cities: RwLock<HashMap<String, Arc<CityRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cities.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.read().is_empty()
    }
}

impl WeatherStore for MemoryStore {
    fn city_names(&self) -> Option<Vec<String>> {
        let mut names: Vec<String> = self.cities.read().keys().cloned().collect();
        names.sort();
        Some(names)
    }

    fn temperatures(&self, city: &str) -> Option<Vec<(NaiveDate, f64)>> {
        self.cities.read().get(city).map(|c| c.history())
    }

    fn add_city(&self, name: &str) -> bool {
        let mut cities = self.cities.write();
        if cities.contains_key(name) {
            return false;
        }
        cities.insert(name.to_string(), Arc::new(CityRecord::new(name)));
        true
    }

    fn city(&self, name: &str) -> Option<Arc<dyn Location>> {
        self.cities
            .read()
            .get(name)
            .map(|c| c.clone() as Arc<dyn Location>)
    }
}
