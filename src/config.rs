use crate::cache_ttl_from_env;
use anyhow::{anyhow, Context};
use std::time::Duration;
use url::Url;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub wp_url: Option<Url>,
    pub cache_ttl: Duration,
    pub request_timeout: Duration,
    pub bind_addr: String,
    pub port: u16,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let wp_url = parse_wp_url(&envmnt::get_or("WP_URL", ""))?;
        let port: Result<u16, _> = envmnt::get_parse("PORT");
        let port = match port {
            Ok(port) => port,
            Err(envmnt::errors::EnvmntError::Missing(_)) => DEFAULT_PORT,
            Err(err) => return Err(anyhow!("Unable to read PORT: {err}")),
        };
        Ok(Self {
            wp_url,
            cache_ttl: cache_ttl_from_env("PRODUCTS_CACHE_TTL_SECS", 120),
            request_timeout: cache_ttl_from_env("WP_REQUEST_TIMEOUT_SECS", 10),
            bind_addr: envmnt::get_or("BIND_ADDR", DEFAULT_BIND_ADDR),
            port,
        })
    }
}

/// Empty means no content source is configured.
pub fn parse_wp_url(raw: &str) -> Result<Option<Url>, anyhow::Error> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let url = Url::parse(raw).with_context(|| format!("WP_URL is not a valid URL: {raw}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(anyhow!("WP_URL must be http or https, got {}", url.scheme()));
    }
    Ok(Some(url))
}

/// `{base}/wp-json/wp/v2/products`, keeping any path prefix of `base`.
pub fn products_endpoint(base: &Url) -> Result<Url, anyhow::Error> {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|_| anyhow!("WP_URL cannot be a base: {base}"))?
        .pop_if_empty()
        .extend(["wp-json", "wp", "v2", "products"]);
    Ok(url)
}
