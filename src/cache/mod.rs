use chrono::{DateTime, Duration, Utc};
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::SeatType;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("seat type load failed: {0}")]
    Load(String),
}

/// Запись кеша с явной меткой времени. Свежесть проверяет вызывающая
/// сторона, передавая свой `now` — скрытых обращений к часам нет.
#[derive(Debug, Clone)]
pub struct TtlEntry<T> {
    pub value: T,
    pub fetched_at: DateTime<Utc>,
}

impl<T> TtlEntry<T> {
    pub fn new(value: T, now: DateTime<Utc>) -> Self {
        Self {
            value,
            fetched_at: now,
        }
    }

    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.fetched_at < ttl
    }
}

// Кеш каталога типов мест, без модульных глобалов
#[derive(Debug, Default)]
pub struct CatalogCache {
    entry: Option<TtlEntry<Vec<SeatType>>>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self { entry: None }
    }

    /// Отдает свежий каталог или перезагружает его через `loader`.
    /// Если перезагрузка упала, а устаревшее значение есть — отдаем его.
    pub fn get_or_load<F>(
        &mut self,
        now: DateTime<Utc>,
        ttl: Duration,
        loader: F,
    ) -> Result<&[SeatType], CatalogError>
    where
        F: FnOnce() -> Result<Vec<SeatType>, CatalogError>,
    {
        let fresh = self.entry.as_ref().is_some_and(|e| e.is_fresh(now, ttl));
        if !fresh {
            match loader() {
                Ok(types) => {
                    debug!("Seat type catalog reloaded: {} entries", types.len());
                    self.entry = Some(TtlEntry::new(types, now));
                }
                Err(e) => match &self.entry {
                    Some(stale) => {
                        warn!(
                            "Seat type reload failed, serving stale catalog from {}: {}",
                            stale.fetched_at, e
                        );
                    }
                    None => return Err(e),
                },
            }
        }

        match &self.entry {
            Some(entry) => Ok(&entry.value),
            None => Err(CatalogError::Load("catalog cache is empty".to_string())),
        }
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.entry.as_ref().map(|e| e.fetched_at)
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn seat_type(id: i64) -> SeatType {
        SeatType {
            id,
            name: format!("type-{}", id),
            color: "#fff".to_string(),
            icon_key: "standard".to_string(),
        }
    }

    fn ttl() -> Duration {
        Duration::seconds(300)
    }

    #[test]
    fn fresh_entry_is_served_without_reload() {
        let mut cache = CatalogCache::new();
        let now = Utc::now();
        let calls = Cell::new(0);

        let load = || {
            calls.set(calls.get() + 1);
            Ok(vec![seat_type(1)])
        };
        cache.get_or_load(now, ttl(), load).unwrap();

        let later = now + Duration::seconds(299);
        let types = cache
            .get_or_load(later, ttl(), || {
                calls.set(calls.get() + 1);
                Ok(vec![seat_type(2)])
            })
            .unwrap();

        assert_eq!(calls.get(), 1, "second call must hit the cache");
        assert_eq!(types[0].id, 1);
    }

    #[test]
    fn expired_entry_triggers_reload() {
        let mut cache = CatalogCache::new();
        let now = Utc::now();

        cache.get_or_load(now, ttl(), || Ok(vec![seat_type(1)])).unwrap();

        let later = now + Duration::seconds(301);
        let types = cache
            .get_or_load(later, ttl(), || Ok(vec![seat_type(2)]))
            .unwrap();

        assert_eq!(types[0].id, 2);
        assert_eq!(cache.fetched_at(), Some(later));
    }

    #[test]
    fn stale_entry_is_served_when_reload_fails() {
        let mut cache = CatalogCache::new();
        let now = Utc::now();

        cache.get_or_load(now, ttl(), || Ok(vec![seat_type(1)])).unwrap();

        let later = now + Duration::seconds(600);
        let types = cache
            .get_or_load(later, ttl(), || {
                Err(CatalogError::Load("backend down".to_string()))
            })
            .unwrap();

        assert_eq!(types[0].id, 1, "stale value beats an error");
    }

    #[test]
    fn load_failure_with_empty_cache_is_an_error() {
        let mut cache = CatalogCache::new();
        let result = cache.get_or_load(Utc::now(), ttl(), || {
            Err(CatalogError::Load("backend down".to_string()))
        });
        assert!(result.is_err());
    }

    #[test]
    fn invalidate_forces_reload() {
        let mut cache = CatalogCache::new();
        let now = Utc::now();

        cache.get_or_load(now, ttl(), || Ok(vec![seat_type(1)])).unwrap();
        cache.invalidate();

        let types = cache
            .get_or_load(now, ttl(), || Ok(vec![seat_type(2)]))
            .unwrap();
        assert_eq!(types[0].id, 2);
    }
}
