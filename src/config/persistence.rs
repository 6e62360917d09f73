//! Fetch cache persistence configuration

/// Configuration for cached provider responses.
pub struct FetchCacheConfig {
    /// Directory path for cached fetches
    pub directory: &'static str,
    /// Base filename for cache entries (without extension)
    pub filename_base: &'static str,
    /// Seconds a cached historical fetch stays fresh
    pub freshness_secs: i64,
    /// Current version of the cache entry format
    pub version: u32,
}

pub const CACHE: FetchCacheConfig = FetchCacheConfig {
    directory: "fetch_cache",
    filename_base: "series",
    freshness_secs: 300,
    version: 1,
};

/// Generate the cache filename for one (asset, lookback) fetch.
/// Example: "series_bitcoin_180d_v1.json"
pub fn series_cache_filename(coin_id: &str, days: u32) -> String {
    format!(
        "{}_{}_{}d_v{}.json",
        CACHE.filename_base, coin_id, days, CACHE.version
    )
}
