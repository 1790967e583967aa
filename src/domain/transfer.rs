//! Transfer direction and the (unimplemented) submission collaborator

use thiserror::Error;

/// Direction of a transfer through the marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Deposit,
    Withdraw,
}

impl Direction {
    pub fn toggled(self) -> Self {
        match self {
            Direction::Deposit => Direction::Withdraw,
            Direction::Withdraw => Direction::Deposit,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Direction::Deposit => "Deposit ALGO",
            Direction::Withdraw => "Withdraw DMARKET",
        }
    }

    pub fn action_label(&self) -> &'static str {
        match self {
            Direction::Deposit => "Deposit",
            Direction::Withdraw => "Withdraw",
        }
    }

    /// Symbol the amount field is denominated in.
    pub fn input_symbol(&self) -> &'static str {
        match self {
            Direction::Deposit => "ALGO",
            Direction::Withdraw => "DMARKET",
        }
    }

    /// Symbol attached to the "You will receive" estimate.
    ///
    /// Kept exactly as the mockup labels it: the opposite of the input asset,
    /// even though the estimate is computed from the input amount. Pending
    /// product clarification this mapping is not to be "fixed" here.
    pub fn output_symbol(&self) -> &'static str {
        match self {
            Direction::Deposit => "DMARKET",
            Direction::Withdraw => "ALGO",
        }
    }
}

/// A submitted transfer, as the submission collaborator receives it.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferRequest {
    pub direction: Direction,
    pub amount: f64,
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct TransferReceipt {
    pub tx_id: String,
}

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("insufficient balance")]
    InsufficientBalance,

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("network error: {0}")]
    Network(String),
}

/// Transaction-submission collaborator.
///
/// No implementation exists in this build; the transfer form holds `None`
/// and submission ends the interaction without effect.
pub trait TransferGateway {
    fn submit(&self, request: TransferRequest) -> Result<TransferReceipt, TransferError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_involution() {
        assert_eq!(Direction::Deposit.toggled(), Direction::Withdraw);
        assert_eq!(Direction::Deposit.toggled().toggled(), Direction::Deposit);
    }

    #[test]
    fn test_preview_symbol_is_opposite_of_input() {
        assert_eq!(Direction::Deposit.input_symbol(), "ALGO");
        assert_eq!(Direction::Deposit.output_symbol(), "DMARKET");
        assert_eq!(Direction::Withdraw.input_symbol(), "DMARKET");
        assert_eq!(Direction::Withdraw.output_symbol(), "ALGO");
    }
}
