//! Staking metrics placeholders and the (unimplemented) staking collaborator

use thiserror::Error;

/// Staking metrics shown on the Staking panel. Fixed placeholders; a live
/// build would read these from the staking contract.
#[derive(Debug, Clone)]
pub struct StakingSummary {
    pub your_stake: &'static str,
    pub stake_value: &'static str,
    pub apr: &'static str,
    pub apr_note: &'static str,
    pub rewards: &'static str,
    pub rewards_note: &'static str,
    pub minimum_note: &'static str,
    pub schedule_note: &'static str,
}

impl Default for StakingSummary {
    fn default() -> Self {
        Self {
            your_stake: "0.00 DMARKET",
            stake_value: "≈ $0.00 USDT",
            apr: "5.00%",
            apr_note: "Paid in ALGO",
            rewards: "0.00 ALGO",
            rewards_note: "Available to claim",
            minimum_note: "Minimum stake: 10,000 USDT worth of DMARKET tokens",
            schedule_note: "Rewards are distributed daily in ALGO",
        }
    }
}

/// Result of a successful stake.
#[derive(Debug, Clone)]
pub struct StakeReceipt {
    pub staked: f64,
}

/// Result of a successful rewards claim.
#[derive(Debug, Clone)]
pub struct ClaimReceipt {
    pub claimed: f64,
}

#[derive(Debug, Error)]
pub enum StakeError {
    #[error("amount is below the minimum stake")]
    BelowMinimumStake,

    #[error("network error: {0}")]
    Network(String),
}

#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("no rewards available")]
    NoRewardsAvailable,

    #[error("network error: {0}")]
    Network(String),
}

/// Staking contract collaborator.
///
/// No implementation exists in this build; the panel holds `None` and both
/// triggers are no-ops.
pub trait StakingClient {
    fn stake(&self, amount: f64) -> Result<StakeReceipt, StakeError>;
    fn claim_rewards(&self) -> Result<ClaimReceipt, ClaimError>;
}
