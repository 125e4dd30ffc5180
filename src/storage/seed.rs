use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;

use super::WeatherStore;

/// City name -> (day -> maximum temperature), as read from a seed document.
pub type SeedDocument = HashMap<String, BTreeMap<NaiveDate, f64>>;

/// Loads a JSON seed document into `store`. Returns the number of
/// temperature records stored.
pub async fn load_file(store: &dyn WeatherStore, path: &Path) -> anyhow::Result<usize> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading seed file {}", path.display()))?;
    let doc: SeedDocument = serde_json::from_str(&content)
        .with_context(|| format!("parsing seed file {}", path.display()))?;
    Ok(apply(store, doc))
}

/// Replays a seed document through the regular store operations.
pub fn apply(store: &dyn WeatherStore, doc: SeedDocument) -> usize {
    let mut added = 0;
    for (name, temps) in doc {
        store.add_city(&name);
        let Some(city) = store.city(&name) else {
            tracing::warn!(city = %name, "store refused seeded city");
            continue;
        };
        for (date, value) in temps {
            if city.add_temperature(date, value) {
                added += 1;
            }
        }
    }
    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn apply_populates_store() {
        let doc: SeedDocument = serde_json::from_str(
            r#"{ "Lisbon": { "2018-04-30": 21.5, "2018-05-01": 22.0 }, "Oslo": {} }"#,
        )
        .unwrap();
        let store = MemoryStore::new();
        assert_eq!(apply(&store, doc), 2);
        assert_eq!(
            store.city_names().unwrap(),
            vec!["Lisbon".to_string(), "Oslo".into()]
        );
        let lisbon = store.temperatures("Lisbon").unwrap();
        assert_eq!(lisbon[0], (NaiveDate::from_ymd_opt(2018, 4, 30).unwrap(), 21.5));
    }

    #[test]
    fn bad_date_key_is_a_parse_error() {
        let res = serde_json::from_str::<SeedDocument>(r#"{ "Lisbon": { "30/04/2018": 21.5 } }"#);
        assert!(res.is_err());
    }

    #[tokio::test]
    async fn load_file_reports_missing_path() {
        let store = MemoryStore::new();
        let path = std::env::temp_dir().join("weatherservice-seed-does-not-exist.json");
        let err = load_file(&store, &path).await.unwrap_err();
        assert!(err.to_string().contains("reading seed file"));
    }

    #[tokio::test]
    async fn load_file_reports_malformed_document() {
        let path = std::env::temp_dir().join(format!("weatherservice-bad-seed-{}.json", std::process::id()));
        tokio::fs::write(&path, r#"{ "Lisbon": { "30/04/2018": 21.5 } }"#)
            .await
            .unwrap();
        let store = MemoryStore::new();
        let res = load_file(&store, &path).await;
        tokio::fs::remove_file(&path).await.ok();
        let err = res.unwrap_err();
        assert!(err.to_string().contains("parsing seed file"));
        assert!(err.to_string().contains(&path.display().to_string()));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn load_file_reads_document() {
        let path = std::env::temp_dir().join(format!("weatherservice-seed-{}.json", std::process::id()));
        tokio::fs::write(&path, r#"{ "Faro": { "2018-06-01": 27.0 } }"#)
            .await
            .unwrap();
        let store = MemoryStore::new();
        let added = load_file(&store, &path).await.unwrap();
        tokio::fs::remove_file(&path).await.ok();
        assert_eq!(added, 1);
        assert!(store.city("Faro").is_some());
    }
}
