use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeeError {
    #[error("Fee calculation requires a non-negative amount, got {0}")]
    InvalidAmount(rust_decimal::Decimal),
}
