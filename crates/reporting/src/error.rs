use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Ledger query failed: {0}")]
    Store(#[from] database::DbError),

    #[error("Fee calculation failed: {0}")]
    Fee(#[from] fees::FeeError),
}
