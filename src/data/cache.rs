//! Short-lived disk cache for historical fetches.
//!
//! One JSON file per (coin, lookback) pair. A hit within the freshness window
//! skips the network round trip entirely; anything wrong with a cache file
//! (missing, corrupt, stale, wrong version) silently falls through to a fresh
//! fetch. The live quote is never cached.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::{CACHE, series_cache_filename};
use crate::data::MarketDataProvider;
use crate::domain::{PricePoint, PriceSeries};
use crate::utils::now_epoch_secs;

/// On-disk shape of one cached fetch.
#[derive(Debug, Serialize, Deserialize)]
struct CachedSeries {
    version: u32,
    coin_id: String,
    days: u32,
    fetched_at_epoch_secs: i64,
    points: Vec<PricePoint>,
}

pub struct SeriesCache {
    directory: PathBuf,
}

impl SeriesCache {
    pub fn new() -> Self {
        Self {
            directory: PathBuf::from(CACHE.directory),
        }
    }

    pub fn with_directory(directory: impl AsRef<Path>) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    fn entry_path(&self, coin_id: &str, days: u32) -> PathBuf {
        self.directory.join(series_cache_filename(coin_id, days))
    }

    /// Cached series if present, parseable, version-matched and fresh.
    /// A file whose timestamp sits in the future counts as stale.
    pub fn load_fresh(&self, coin_id: &str, days: u32) -> Option<PriceSeries> {
        let path = self.entry_path(coin_id, days);
        let raw = fs::read_to_string(&path).ok()?;

        let entry: CachedSeries = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Ignoring corrupt cache file {}: {}", path.display(), e);
                return None;
            }
        };
        if entry.version != CACHE.version {
            log::debug!(
                "Ignoring cache file {} with version {} (current {})",
                path.display(),
                entry.version,
                CACHE.version
            );
            return None;
        }

        let age_secs = now_epoch_secs() - entry.fetched_at_epoch_secs;
        if age_secs < 0 || age_secs >= CACHE.freshness_secs {
            log::debug!("Cache for {coin_id}/{days}d is {age_secs}s old, refetching");
            return None;
        }

        let rows = entry
            .points
            .iter()
            .map(|point| (point.date, point.close.value()))
            .collect();
        match PriceSeries::from_provider_rows(rows) {
            Ok(series) => {
                log::info!(
                    "Using cached series for {coin_id}/{days}d ({} points, {age_secs}s old)",
                    series.len()
                );
                Some(series)
            }
            Err(e) => {
                log::warn!("Ignoring invalid cache file {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Write one fetch to disk. A cache write failure costs a later refetch,
    /// nothing else, so it is logged and swallowed.
    pub fn store(&self, coin_id: &str, days: u32, series: &PriceSeries) {
        if let Err(e) = self.try_store(coin_id, days, series) {
            log::warn!("Failed to cache the series for {coin_id}/{days}d: {e:#}");
        }
    }

    fn try_store(&self, coin_id: &str, days: u32, series: &PriceSeries) -> Result<()> {
        fs::create_dir_all(&self.directory)
            .with_context(|| format!("creating {}", self.directory.display()))?;
        let entry = CachedSeries {
            version: CACHE.version,
            coin_id: coin_id.to_string(),
            days,
            fetched_at_epoch_secs: now_epoch_secs(),
            points: series.points().to_vec(),
        };
        let path = self.entry_path(coin_id, days);
        let raw = serde_json::to_string(&entry).context("encoding the cache entry")?;
        fs::write(&path, raw).with_context(|| format!("writing {}", path.display()))?;
        log::debug!("Cached {} points to {}", series.len(), path.display());
        Ok(())
    }
}

impl Default for SeriesCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Historical fetch through the cache. `refresh` skips the read but still
/// writes the result back.
pub async fn fetch_series_cached(
    provider: &dyn MarketDataProvider,
    cache: &SeriesCache,
    coin_id: &str,
    days: u32,
    refresh: bool,
) -> Result<PriceSeries> {
    if !refresh {
        if let Some(series) = cache.load_fresh(coin_id, days) {
            return Ok(series);
        }
    }

    let rows = provider.fetch_daily_series(coin_id, days).await?;
    let series = PriceSeries::from_provider_rows(rows)
        .with_context(|| format!("validating the fetched series for {coin_id}"))?;
    cache.store(coin_id, days, &series);
    Ok(series)
}
