use crate::{Coordinate, WeatherCache, WeatherError, WeatherProvider, WeatherRecord};

/// Current-weather lookups that consult a [`WeatherCache`] before the
/// provider.
#[derive(Debug)]
pub struct WeatherFetcher {
    provider: Box<dyn WeatherProvider>,
    cache: WeatherCache,
}

impl WeatherFetcher {
    pub fn new(provider: Box<dyn WeatherProvider>) -> Self {
        Self::with_cache(provider, WeatherCache::new())
    }

    pub fn with_cache(provider: Box<dyn WeatherProvider>, cache: WeatherCache) -> Self {
        Self { provider, cache }
    }

    /// Return the record for `coord`, hitting the provider only on a cache
    /// miss. Failures are not cached.
    pub async fn fetch(&mut self, coord: Coordinate) -> Result<WeatherRecord, WeatherError> {
        if let Some(hit) = self.cache.get(coord) {
            tracing::debug!(%coord, "weather cache hit");
            return Ok(hit.clone());
        }

        tracing::debug!(%coord, "weather cache miss");
        let record = self.provider.current_weather(coord).await?;

        Ok(self.cache.insert(coord, record).clone())
    }

    pub fn cache(&self) -> &WeatherCache {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::tests::record;
    use async_trait::async_trait;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    #[derive(Debug, Clone, Default)]
    struct CountingProvider {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    #[async_trait]
    impl WeatherProvider for CountingProvider {
        async fn current_weather(&self, _coord: Coordinate) -> Result<WeatherRecord, WeatherError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(WeatherError::Service {
                    status: 500,
                    message: "boom".to_string(),
                })
            } else {
                Ok(record("London"))
            }
        }
    }

    #[tokio::test]
    async fn miss_calls_provider_and_caches() {
        let provider = CountingProvider::default();
        let calls = provider.calls.clone();
        let mut fetcher = WeatherFetcher::new(Box::new(provider));
        let coord = Coordinate::new(51.5, -0.13);

        let first = fetcher.fetch(coord).await.expect("first fetch");
        let second = fetcher.fetch(coord).await.expect("second fetch");

        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(fetcher.cache().contains(coord));
    }

    #[tokio::test]
    async fn prepopulated_cache_makes_no_provider_calls() {
        let provider = CountingProvider::default();
        let calls = provider.calls.clone();
        let coord = Coordinate::new(48.85, 2.35);

        let mut cache = WeatherCache::new();
        cache.insert(coord, record("Paris"));

        let mut fetcher = WeatherFetcher::with_cache(Box::new(provider), cache);
        let got = fetcher.fetch(coord).await.expect("cached");

        assert_eq!(got.location_name, "Paris");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let provider = CountingProvider {
            fail: true,
            ..Default::default()
        };
        let calls = provider.calls.clone();
        let mut fetcher = WeatherFetcher::new(Box::new(provider));
        let coord = Coordinate::new(1.0, 1.0);

        assert!(fetcher.fetch(coord).await.is_err());
        assert!(fetcher.fetch(coord).await.is_err());

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(fetcher.cache().is_empty());
    }

    #[tokio::test]
    async fn distinct_coordinates_get_distinct_entries() {
        let provider = CountingProvider::default();
        let calls = provider.calls.clone();
        let mut fetcher = WeatherFetcher::new(Box::new(provider));

        fetcher.fetch(Coordinate::new(1.0, 2.0)).await.expect("a");
        fetcher.fetch(Coordinate::new(2.0, 1.0)).await.expect("b");

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(fetcher.cache().len(), 2);
    }
}
