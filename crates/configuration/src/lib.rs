use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Reporting, Server, Settings};

/// Loads the application configuration from the `config.toml` file.
///
/// This function is the primary entry point for this crate. It reads the
/// configuration file, deserializes it into our strongly-typed `Settings`
/// struct, and returns it. Every field has a default, so a missing file is
/// not an error — the service can boot on defaults alone.
pub fn load_settings() -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        // Tells the builder to look for a file named `config.toml`
        .add_source(config::File::with_name("config.toml").required(false))
        // Environment variables win over the file, e.g. PAYLENS__SERVER__PORT.
        .add_source(environment_source())
        .build()?;

    // Attempt to deserialize the entire configuration into our `Settings` struct
    let settings = builder.try_deserialize::<Settings>()?;
    settings.validate()?;

    Ok(settings)
}

/// Environment overrides use a double-underscore separator on both sides of
/// the prefix: `PAYLENS__SERVER__PORT`, `PAYLENS__FEES__PLATFORM_FEE_BPS`.
/// The key names themselves contain single underscores, so the prefix and
/// section separators must both be the doubled form.
fn environment_source() -> config::Environment {
    config::Environment::with_prefix("PAYLENS")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn environment_overrides_use_double_underscore_throughout() {
        let vars = HashMap::from([
            ("PAYLENS__SERVER__PORT".to_string(), "8080".to_string()),
            ("PAYLENS__REPORTING__CURRENCY".to_string(), "EUR".to_string()),
            (
                "PAYLENS__FEES__PLATFORM_FEE_BPS".to_string(),
                "75".to_string(),
            ),
        ]);

        let settings = config::Config::builder()
            .add_source(environment_source().source(Some(vars)))
            .build()
            .unwrap()
            .try_deserialize::<Settings>()
            .unwrap();

        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.reporting.currency, "EUR");
        assert_eq!(settings.fees.platform_fee_bps, 75);
        // Untouched sections keep their defaults.
        assert_eq!(settings.reporting.top_clients, 5);
    }
}
