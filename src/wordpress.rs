use crate::config::products_endpoint;
use crate::fallback::DefaultProducts;
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use noble_types::product::{parse_wp_products, ByCategory, ProductRepository};
use noble_types::{normalize, Product};
use reqwest::header::ACCEPT;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use typesafe_repository::async_ops::{List, Select};
use typesafe_repository::Repository;
use url::Url;

struct ProductsCache {
    cached_at: Instant,
    items: Arc<Vec<Product>>,
}

/// Products served by the WordPress REST API.
///
/// Never fails: an unconfigured or unavailable source yields the default
/// products instead. Successful listings are cached for `cache_ttl`.
pub struct WordPressProductRepository {
    client: reqwest::Client,
    endpoint: Option<Url>,
    fallback: Arc<dyn DefaultProducts>,
    cache_ttl: Duration,
    cache: RwLock<Option<ProductsCache>>,
    issued: AtomicU64,
}

impl WordPressProductRepository {
    pub fn new(
        client: reqwest::Client,
        base_url: Option<Url>,
        fallback: Arc<dyn DefaultProducts>,
        cache_ttl: Duration,
    ) -> Result<Self, anyhow::Error> {
        let endpoint = base_url.as_ref().map(products_endpoint).transpose()?;
        Ok(Self {
            client,
            endpoint,
            fallback,
            cache_ttl,
            cache: RwLock::new(None),
            issued: AtomicU64::new(0),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }

    pub async fn fetch_all(&self) -> Vec<Product> {
        let Some(endpoint) = &self.endpoint else {
            log::info!("WP_URL not set, serving builtin products");
            return self.fallback.products();
        };
        if let Some(items) = self.cached().await {
            return items.as_ref().clone();
        }
        let seq = self.begin_fetch();
        match self.get_products(endpoint.clone()).await {
            Ok(products) => {
                self.store(seq, Arc::new(products.clone())).await;
                products
            }
            Err(err) => {
                log::warn!("Unable to fetch products, serving builtin products: {err:?}");
                self.fallback.products()
            }
        }
    }

    pub async fn fetch_by_category(&self, slug: &str) -> Vec<Product> {
        let Some(endpoint) = &self.endpoint else {
            log::info!("WP_URL not set, serving builtin {slug} products");
            return self.fallback_in(slug);
        };
        let mut url = endpoint.clone();
        url.query_pairs_mut().append_pair("category", slug);
        match self.get_products(url).await {
            Ok(products) => products,
            Err(err) => {
                log::warn!("Unable to fetch {slug} products, serving builtin products: {err:?}");
                self.fallback_in(slug)
            }
        }
    }

    fn fallback_in(&self, slug: &str) -> Vec<Product> {
        self.fallback
            .products()
            .into_iter()
            .filter(|p| normalize(&p.category, slug))
            .collect()
    }

    async fn get_products(&self, url: Url) -> Result<Vec<Product>, anyhow::Error> {
        let resp = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .with_context(|| format!("Unable to reach {url}"))?;
        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(anyhow!("WordPress {}: {}", status, truncate_body(&text)));
        }
        parse_wp_products(&text).map_err(|err| {
            anyhow!(
                "WordPress decode error: {err}. Body: {}",
                truncate_body(&text)
            )
        })
    }

    async fn cached(&self) -> Option<Arc<Vec<Product>>> {
        let cache = self.cache.read().await;
        cache
            .as_ref()
            .filter(|c| c.cached_at.elapsed() < self.cache_ttl)
            .map(|c| c.items.clone())
    }

    fn begin_fetch(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Keeps `items` only if no fetch was started after `seq`.
    async fn store(&self, seq: u64, items: Arc<Vec<Product>>) -> bool {
        let mut cache = self.cache.write().await;
        let latest = self.issued.load(Ordering::SeqCst);
        if seq != latest {
            log::debug!("Discarding product listing {seq} superseded by {latest}");
            return false;
        }
        *cache = Some(ProductsCache {
            cached_at: Instant::now(),
            items,
        });
        true
    }
}

fn truncate_body(body: &str) -> String {
    const LIMIT: usize = 220;
    let trimmed = body.trim();
    match trimmed.char_indices().nth(LIMIT) {
        Some((end, _)) => format!("{}...", &trimmed[..end]),
        None => trimmed.to_string(),
    }
}

impl Repository<Product> for WordPressProductRepository {
    type Error = anyhow::Error;
}

#[async_trait]
impl List<Product> for WordPressProductRepository {
    async fn list(&self) -> Result<Vec<Product>, Self::Error> {
        Ok(self.fetch_all().await)
    }
}

#[async_trait]
impl Select<Product, ByCategory> for WordPressProductRepository {
    async fn select(&self, ByCategory(slug): &ByCategory) -> Result<Vec<Product>, Self::Error> {
        Ok(self.fetch_by_category(slug).await)
    }
}

impl ProductRepository for WordPressProductRepository {}
