//! Short-TTL cache for catalog and content reads.
//!
//! The storefront's read endpoints are hit by every page load but change
//! only when someone edits the dashboard. A small time-based cache absorbs
//! that traffic; dashboard edits become visible when the entry expires,
//! there is no cross-process invalidation.

use std::time::Duration;

use moka::future::Cache;

use osteria_core::models::{Banner, Category, DeliveryZone, Product, Wine, WineType};

use crate::db::content::EventWithPhotos;

/// Cache key per cacheable endpoint (including its query variants).
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum CacheKey {
    Categories,
    Products { category_slug: Option<String> },
    Wines { wine_type: Option<WineType> },
    Banners,
    EventGallery,
    DeliveryZones,
}

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Categories(Vec<Category>),
    Products(Vec<Product>),
    Wines(Vec<Wine>),
    Banners(Vec<Banner>),
    EventGallery(Vec<EventWithPhotos>),
    DeliveryZones(Vec<DeliveryZone>),
}

/// Catalog cache shared across handlers.
#[derive(Clone)]
pub struct CatalogCache {
    inner: Cache<CacheKey, CacheValue>,
}

impl CatalogCache {
    /// Create a cache with the given entry lifetime.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(256)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// Get a cached value, if present and fresh.
    pub async fn get(&self, key: &CacheKey) -> Option<CacheValue> {
        self.inner.get(key).await
    }

    /// Store a value.
    pub async fn insert(&self, key: CacheKey, value: CacheValue) {
        self.inner.insert(key, value).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_miss_then_hit() {
        let cache = CatalogCache::new(Duration::from_secs(60));
        let key = CacheKey::Products {
            category_slug: Some("pizza".to_string()),
        };

        assert!(cache.get(&key).await.is_none());
        cache.insert(key.clone(), CacheValue::Products(Vec::new())).await;
        assert!(matches!(
            cache.get(&key).await,
            Some(CacheValue::Products(_))
        ));
    }

    #[tokio::test]
    async fn test_query_variants_are_distinct_keys() {
        let cache = CatalogCache::new(Duration::from_secs(60));
        cache
            .insert(
                CacheKey::Wines { wine_type: None },
                CacheValue::Wines(Vec::new()),
            )
            .await;

        let filtered = CacheKey::Wines {
            wine_type: Some(WineType::Red),
        };
        assert!(cache.get(&filtered).await.is_none());
    }
}
