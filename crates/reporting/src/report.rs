use core_types::PeriodRange;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The rolled-up monetary figures of one reporting period.
///
/// Invariants, enforced at construction in the engine:
/// `gross_income = income - refunds` and
/// `net_profit = gross_income - platform_fees - withdrawal_fees - operating_expenses`,
/// every field rounded to two decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTotals {
    pub income: Decimal,
    pub refunds: Decimal,
    pub gross_income: Decimal,
    pub platform_fees: Decimal,
    pub withdrawal_fees: Decimal,
    pub operating_expenses: Decimal,
    pub net_profit: Decimal,
}

impl ReportTotals {
    /// A zeroed-out totals block, the correct report for an empty period.
    pub fn zero() -> Self {
        Self {
            income: Decimal::ZERO,
            refunds: Decimal::ZERO,
            gross_income: Decimal::ZERO,
            platform_fees: Decimal::ZERO,
            withdrawal_fees: Decimal::ZERO,
            operating_expenses: Decimal::ZERO,
            net_profit: Decimal::ZERO,
        }
    }
}

impl Default for ReportTotals {
    fn default() -> Self {
        Self::zero()
    }
}

/// One client's standing in the period, built transiently per report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSummary {
    /// Normalized lowercase email; the grouping key.
    pub identity: String,
    /// The invoice's client name, or "Unknown Client" when absent.
    pub display_name: String,
    pub revenue: Decimal,
    pub invoice_count: u32,
}

/// A complete, immutable P&L report for one user and period.
///
/// This struct is the final output of the `ReportEngine` and the single data
/// transfer object both output encodings (JSON and PDF) are built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialReport {
    pub period: PeriodRange,
    pub totals: ReportTotals,
    /// Ordered by descending revenue, at most the configured top-N.
    pub top_clients: Vec<ClientSummary>,
    pub currency: String,
}
