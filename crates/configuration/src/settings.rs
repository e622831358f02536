use crate::error::ConfigError;
use fees::FeeSchedule;
use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub server: Server,
    pub reporting: Reporting,
    pub fees: FeeSchedule,
}

/// HTTP server bind parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Server {
    /// The interface to bind, e.g. "0.0.0.0".
    pub host: String,
    /// The TCP port to listen on.
    pub port: u16,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

/// Parameters of the P&L reporting engine.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Reporting {
    /// ISO currency code stamped on every report. The ledger is
    /// single-currency; this is a label, not a conversion target.
    pub currency: String,
    /// How many clients the ranking keeps.
    pub top_clients: usize,
}

impl Default for Reporting {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            top_clients: 5,
        }
    }
}

impl Settings {
    /// Rejects settings that would produce nonsense reports.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reporting.currency.len() != 3 {
            return Err(ConfigError::ValidationError(format!(
                "reporting.currency must be a 3-letter ISO code, got '{}'",
                self.reporting.currency
            )));
        }
        if self.reporting.top_clients == 0 {
            return Err(ConfigError::ValidationError(
                "reporting.top_clients must be at least 1".to_string(),
            ));
        }
        // 10_000 bp is a 100% fee; anything above it is a typo.
        if self.fees.platform_fee_bps > 10_000 || self.fees.withdrawal_fee_bps > 10_000 {
            return Err(ConfigError::ValidationError(
                "fee rates above 10000 basis points are not allowed".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.reporting.currency, "USD");
        assert_eq!(settings.reporting.top_clients, 5);
        assert_eq!(settings.fees.platform_fee_bps, 50);
    }

    #[test]
    fn rejects_bad_currency_code() {
        let mut settings = Settings::default();
        settings.reporting.currency = "DOLLARS".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn rejects_absurd_fee_rate() {
        let mut settings = Settings::default();
        settings.fees.withdrawal_fee_bps = 20_000;
        assert!(settings.validate().is_err());
    }
}
