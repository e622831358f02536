use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unknown reporting period: '{0}'")]
    InvalidPeriod(String),
}
