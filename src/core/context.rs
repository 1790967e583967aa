//! Shared context passed to panel modules

use crate::domain::fee::FeeSchedule;
use crate::domain::staking::StakingSummary;
use crate::domain::token::{MarketStats, TokenStats};

/// Shared context available to all panels.
///
/// Holds the placeholder dataset the panels render from. A live build would
/// refresh these from a market-data provider; here the `Default` impls carry
/// the fixed mockup values.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Token metadata shown on the Token Info panel
    pub token: TokenStats,

    /// Market statistics shown on the Token Info panel
    pub market: MarketStats,

    /// Staking metrics shown on the Staking panel
    pub staking: StakingSummary,

    /// Fee schedule used for the transfer preview
    pub fees: FeeSchedule,

    /// Clipboard content for copy between panels
    pub clipboard: Option<String>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set clipboard content
    pub fn set_clipboard(&mut self, content: String) {
        self.clipboard = Some(content);
    }
}
