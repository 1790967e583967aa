//! Token metadata and market statistics placeholders

/// Token metadata shown on the Token Info panel.
///
/// Stands in for the `getTokenStats()` collaborator of a live deployment;
/// every value is a fixed placeholder.
#[derive(Debug, Clone)]
pub struct TokenStats {
    pub symbol: &'static str,
    pub pair_symbol: &'static str,
    pub total_supply: &'static str,
    pub supply_note: &'static str,
    pub holders: u64,
    pub decimals: u8,
}

impl Default for TokenStats {
    fn default() -> Self {
        Self {
            symbol: "DMARKET",
            pair_symbol: "ALGO",
            total_supply: "100,000,000 DMARKET",
            supply_note: "Fixed supply, no inflation",
            holders: 0,
            decimals: 8,
        }
    }
}

/// Market statistics shown on the Token Info panel.
#[derive(Debug, Clone)]
pub struct MarketStats {
    pub price: &'static str,
    pub market_cap: &'static str,
    pub volume_24h: &'static str,
}

impl Default for MarketStats {
    fn default() -> Self {
        Self {
            price: "$1.00 USDT",
            market_cap: "$100,000,000",
            volume_24h: "$0",
        }
    }
}
