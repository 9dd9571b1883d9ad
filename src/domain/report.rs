use std::fmt;

/// One line of the balance stock report.
#[derive(Debug, Clone, PartialEq)]
pub struct StockBalance {
    pub name: String,
    pub stock: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfitStatus {
    Profit,
    Loss,
}

impl ProfitStatus {
    /// Anything short of a strictly positive profit counts as a loss.
    pub fn classify(total_profit: f64) -> Self {
        if total_profit > 0.0 {
            ProfitStatus::Profit
        } else {
            ProfitStatus::Loss
        }
    }
}

impl fmt::Display for ProfitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfitStatus::Profit => write!(f, "PROFIT"),
            ProfitStatus::Loss => write!(f, "LOSS"),
        }
    }
}

/// Catalog-wide totals.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfitLossReport {
    pub total_investment: f64,
    pub total_profit: f64,
    pub status: ProfitStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_profit_is_a_loss() {
        assert_eq!(ProfitStatus::classify(0.0), ProfitStatus::Loss);
        assert_eq!(ProfitStatus::classify(-1.0), ProfitStatus::Loss);
        assert_eq!(ProfitStatus::classify(0.5), ProfitStatus::Profit);
    }
}
