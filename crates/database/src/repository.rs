use crate::DbError;
use chrono::{DateTime, Utc};
use core_types::{PeriodRange, TransactionStatus, TransactionType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgPool;
use sqlx::FromRow;
use uuid::Uuid;

/// The `LedgerRepository` provides a high-level, application-specific
/// interface to the ledger database. It encapsulates all SQL queries and data
/// access logic; nothing outside this crate writes SQL.
#[derive(Debug, Clone)]
pub struct LedgerRepository {
    pool: PgPool,
}

/// A completed ledger transaction as fetched for refund and withdrawal
/// aggregation. Mirrors the `transactions` table columns the report reads.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct LedgerTransaction {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount: Decimal,
    pub completed_at: DateTime<Utc>,
    pub bank_account_id: Option<Uuid>,
}

/// An income transaction joined with its invoice's counterparty fields.
///
/// The join is a LEFT JOIN: a transaction without an invoice (or an invoice
/// without a client email) still appears here and still counts toward income
/// totals — only the client ranking skips it.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct IncomeTransaction {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount: Decimal,
    pub completed_at: DateTime<Utc>,
    pub invoice_id: Option<Uuid>,
    pub client_name: Option<String>,
    pub client_email: Option<String>,
}

/// The report owner, resolved from a session token. Identity always flows
/// from the session — never from client-supplied parameters.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
}

impl LedgerRepository {
    /// Creates a new `LedgerRepository` with a shared database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetches completed income transactions (`incoming` and `payment`) for
    /// one user within the half-open period, oldest first, each joined with
    /// its invoice's client name and email for the ranking engine.
    pub async fn find_income_transactions(
        &self,
        user_id: Uuid,
        period: &PeriodRange,
    ) -> Result<Vec<IncomeTransaction>, DbError> {
        let rows = sqlx::query_as::<_, IncomeTransaction>(
            r#"
            SELECT
                t.id, t.user_id, t.amount, t.completed_at, t.invoice_id,
                i.client_name, i.client_email
            FROM transactions AS t
            LEFT JOIN invoices AS i ON i.id = t.invoice_id
            WHERE t.user_id = $1
              AND t.status = $2
              AND t.type IN ($3, $4)
              AND t.completed_at >= $5
              AND t.completed_at < $6
            ORDER BY t.completed_at ASC
            "#,
        )
        .bind(user_id)
        .bind(TransactionStatus::Completed.as_str())
        .bind(TransactionType::Incoming.as_str())
        .bind(TransactionType::Payment.as_str())
        .bind(period.start)
        .bind(period.end)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Fetches completed refund transactions for one user within the
    /// half-open period, oldest first.
    pub async fn find_refund_transactions(
        &self,
        user_id: Uuid,
        period: &PeriodRange,
    ) -> Result<Vec<LedgerTransaction>, DbError> {
        self.find_by_type(user_id, period, TransactionType::Refund)
            .await
    }

    /// Fetches completed withdrawal transactions for one user within the
    /// half-open period, oldest first.
    pub async fn find_withdrawal_transactions(
        &self,
        user_id: Uuid,
        period: &PeriodRange,
    ) -> Result<Vec<LedgerTransaction>, DbError> {
        self.find_by_type(user_id, period, TransactionType::Withdrawal)
            .await
    }

    async fn find_by_type(
        &self,
        user_id: Uuid,
        period: &PeriodRange,
        transaction_type: TransactionType,
    ) -> Result<Vec<LedgerTransaction>, DbError> {
        let rows = sqlx::query_as::<_, LedgerTransaction>(
            r#"
            SELECT id, user_id, amount, completed_at, bank_account_id
            FROM transactions
            WHERE user_id = $1
              AND status = $2
              AND type = $3
              AND completed_at >= $4
              AND completed_at < $5
            ORDER BY completed_at ASC
            "#,
        )
        .bind(user_id)
        .bind(TransactionStatus::Completed.as_str())
        .bind(transaction_type.as_str())
        .bind(period.start)
        .bind(period.end)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Resolves a session token to its user, if the session exists and has
    /// not expired. Returns `Ok(None)` for unknown or stale tokens, so the
    /// boundary can answer 401 without treating it as a store failure.
    pub async fn find_user_by_session(&self, token: &str) -> Result<Option<AuthUser>, DbError> {
        let user = sqlx::query_as::<_, AuthUser>(
            r#"
            SELECT u.id, u.full_name, u.email
            FROM sessions AS s
            JOIN users AS u ON u.id = s.user_id
            WHERE s.token = $1
              AND s.expires_at > NOW()
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }
}
