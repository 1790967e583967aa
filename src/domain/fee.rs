//! Fee schedule and the net-received computation

/// Fixed per-transaction fee as displayed in the UI.
///
/// This is an independent constant, not derived from [`FeeSchedule::rate`];
/// the two numbers intentionally disagree and both are rendered as-is.
pub const FIXED_FEE_TEXT: &str = "0.0001945 USDT";

/// Percentage fee deducted from a deposit or withdrawal.
#[derive(Debug, Clone, Copy)]
pub struct FeeSchedule {
    pub rate: f64,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self { rate: 0.01 }
    }
}

impl FeeSchedule {
    /// Net amount received after the percentage fee.
    pub fn net_amount(&self, amount: f64) -> f64 {
        amount * (1.0 - self.rate)
    }

    /// Net amount for a raw input string, rendered to 8 decimal places.
    /// Unparseable input counts as zero.
    pub fn net_text(&self, raw: &str) -> String {
        let amount: f64 = raw.trim().parse().unwrap_or(0.0);
        format!("{:.8}", self.net_amount(amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_amount_one_percent() {
        let fees = FeeSchedule::default();
        assert_eq!(fees.net_text("100"), "99.00000000");
        assert_eq!(fees.net_text("1"), "0.99000000");
    }

    #[test]
    fn test_net_text_smallest_unit() {
        let fees = FeeSchedule::default();
        assert_eq!(fees.net_text("0.00000001"), "0.00000001");
    }

    #[test]
    fn test_net_text_rounding_boundary() {
        let fees = FeeSchedule::default();
        // 0.000000015 * 0.99 = 0.00000001485, which rounds down at 8 places
        assert_eq!(fees.net_text("0.000000015"), "0.00000001");
    }

    #[test]
    fn test_net_text_unparseable_is_zero() {
        let fees = FeeSchedule::default();
        assert_eq!(fees.net_text("not-a-number"), "0.00000000");
        assert_eq!(fees.net_text("."), "0.00000000");
    }

    #[test]
    fn test_fixed_fee_is_a_constant() {
        assert_eq!(FIXED_FEE_TEXT, "0.0001945 USDT");
    }
}
