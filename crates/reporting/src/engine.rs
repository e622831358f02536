use crate::error::ReportError;
use crate::period::resolve_period;
use crate::report::{ClientSummary, FinancialReport, ReportTotals};
use chrono::{DateTime, Utc};
use core_types::PeriodToken;
use database::{IncomeTransaction, LedgerRepository, LedgerTransaction};
use fees::{round_money, FeeSchedule};
use futures::future::try_join3;
use rust_decimal::Decimal;
use std::collections::HashMap;
use uuid::Uuid;

/// Display name used when an invoice carries an email but no client name.
const UNKNOWN_CLIENT: &str = "Unknown Client";

/// A stateless generator deriving a `FinancialReport` from ledger activity.
///
/// The engine holds only configuration (fee schedule, currency label,
/// ranking depth); all data arrives per call, so two concurrent requests can
/// share one engine freely.
#[derive(Debug, Clone)]
pub struct ReportEngine {
    schedule: FeeSchedule,
    currency: String,
    top_clients: usize,
}

impl ReportEngine {
    pub fn new(schedule: FeeSchedule, currency: String, top_clients: usize) -> Self {
        Self {
            schedule,
            currency,
            top_clients,
        }
    }

    /// The main entry point: resolves the period, fans out the three ledger
    /// queries concurrently, and folds the results into one immutable report.
    ///
    /// All-or-nothing: if any query fails, the error propagates and no
    /// partial report is returned.
    pub async fn generate(
        &self,
        repo: &LedgerRepository,
        user_id: Uuid,
        token: PeriodToken,
        now: DateTime<Utc>,
    ) -> Result<FinancialReport, ReportError> {
        let period = resolve_period(token, now);
        tracing::debug!(%user_id, period = %period.label, "generating P&L report");

        // Fan-out / fan-in: the queries are independent, their ordering does
        // not affect the totals, and none of them may be dropped.
        let (income, refunds, withdrawals) = try_join3(
            repo.find_income_transactions(user_id, &period),
            repo.find_refund_transactions(user_id, &period),
            repo.find_withdrawal_transactions(user_id, &period),
        )
        .await?;

        let totals = self.fold_totals(&income, &refunds, &withdrawals)?;
        let top_clients = self.rank_clients(&income);

        Ok(FinancialReport {
            period,
            totals,
            top_clients,
            currency: self.currency.clone(),
        })
    }

    /// Folds the three transaction sequences into rounded period totals.
    ///
    /// Every accumulator is re-rounded after each addition so the printed
    /// figures are exactly the figures that were summed.
    pub fn fold_totals(
        &self,
        income: &[IncomeTransaction],
        refunds: &[LedgerTransaction],
        withdrawals: &[LedgerTransaction],
    ) -> Result<ReportTotals, ReportError> {
        let mut totals = ReportTotals::zero();

        for txn in income {
            totals.income = round_money(totals.income + txn.amount);
            let fee = self.schedule.platform_fee(txn.amount)?;
            totals.platform_fees = round_money(totals.platform_fees + fee);
        }

        for txn in refunds {
            totals.refunds = round_money(totals.refunds + txn.amount);
        }

        for txn in withdrawals {
            totals.operating_expenses = round_money(totals.operating_expenses + txn.amount);
            let fee = self.schedule.withdrawal_fee(txn.amount)?;
            totals.withdrawal_fees = round_money(totals.withdrawal_fees + fee);
        }

        totals.gross_income = round_money(totals.income - totals.refunds);
        totals.net_profit = round_money(
            totals.gross_income
                - totals.platform_fees
                - totals.withdrawal_fees
                - totals.operating_expenses,
        );

        Ok(totals)
    }

    /// Groups income transactions by counterparty identity and returns the
    /// top clients by revenue.
    ///
    /// Identity is the lowercased invoice client email. Transactions without
    /// an invoice are skipped; an invoiced transaction whose invoice has no
    /// client email cannot produce an identity key, so it is excluded from
    /// the ranking (it still counted toward income totals) and logged.
    /// Ties keep first-seen order; the result is truncated to the
    /// configured depth.
    pub fn rank_clients(&self, income: &[IncomeTransaction]) -> Vec<ClientSummary> {
        let mut by_identity: HashMap<String, usize> = HashMap::new();
        let mut summaries: Vec<ClientSummary> = Vec::new();

        for txn in income {
            if txn.invoice_id.is_none() {
                continue;
            }
            let identity = match txn.client_email.as_deref().map(str::trim) {
                Some(email) if !email.is_empty() => email.to_lowercase(),
                _ => {
                    tracing::warn!(
                        transaction_id = %txn.id,
                        "invoiced income transaction has no client email; excluded from ranking"
                    );
                    continue;
                }
            };

            let index = *by_identity.entry(identity.clone()).or_insert_with(|| {
                let display_name = txn
                    .client_name
                    .as_deref()
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .unwrap_or(UNKNOWN_CLIENT)
                    .to_string();
                summaries.push(ClientSummary {
                    identity,
                    display_name,
                    revenue: Decimal::ZERO,
                    invoice_count: 0,
                });
                summaries.len() - 1
            });

            let entry = &mut summaries[index];
            entry.revenue = round_money(entry.revenue + txn.amount);
            entry.invoice_count += 1;
        }

        // Stable sort: equal revenues keep their first-seen order.
        summaries.sort_by(|a, b| b.revenue.cmp(&a.revenue));
        summaries.truncate(self.top_clients);
        summaries
    }
}
