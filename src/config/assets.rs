//! Supported asset catalog

use itertools::Itertools;

/// One supported asset: the ticker users type and the CoinGecko id the
/// API wants.
pub struct AssetEntry {
    pub ticker: &'static str,
    pub coin_id: &'static str,
}

pub const ASSETS: &[AssetEntry] = &[
    AssetEntry { ticker: "BTC", coin_id: "bitcoin" },
    AssetEntry { ticker: "ETH", coin_id: "ethereum" },
    AssetEntry { ticker: "SOL", coin_id: "solana" },
    AssetEntry { ticker: "ADA", coin_id: "cardano" },
    AssetEntry { ticker: "DOT", coin_id: "polkadot" },
    AssetEntry { ticker: "BNB", coin_id: "binancecoin" },
];

/// Resolve a ticker (case-insensitive) to its catalog entry.
pub fn resolve_ticker(ticker: &str) -> Option<&'static AssetEntry> {
    ASSETS
        .iter()
        .find(|a| a.ticker.eq_ignore_ascii_case(ticker))
}

/// Comma-separated ticker list for error messages and help text.
pub fn supported_tickers() -> String {
    ASSETS.iter().map(|a| a.ticker).join(", ")
}
