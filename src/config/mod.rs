mod settings;

use config::{Config, ConfigError, Environment, File};

use settings::PartialSettings;

pub use settings::{EndpointSettings, FetcherSettings, LoggingSettings, Settings};

/// Loads the configuration from the default file and environment variables
/// Merges the configuration with default values
///
/// Environment variables use the `MSGFEED_` prefix and `__` between levels,
/// e.g. `MSGFEED_FETCHER__ENDPOINT_INDEX=0`.
pub fn load_config() -> Result<Settings, ConfigError> {
    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(
            Environment::with_prefix("MSGFEED")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    let config = builder.build()?;

    // Try to deserialize what is available
    let partial: PartialSettings = config.try_deserialize()?;

    Ok(merge(partial, Settings::default()))
}

fn merge(partial: PartialSettings, default: Settings) -> Settings {
    let fetcher = partial.fetcher;
    Settings {
        endpoints: partial.endpoints.unwrap_or(default.endpoints),
        fetcher: FetcherSettings {
            endpoint_index: fetcher
                .as_ref()
                .and_then(|f| f.endpoint_index)
                .unwrap_or(default.fetcher.endpoint_index),
            demo: fetcher
                .as_ref()
                .and_then(|f| f.demo)
                .unwrap_or(default.fetcher.demo),
            fixture_path: fetcher
                .as_ref()
                .and_then(|f| f.fixture_path.clone())
                .or(default.fetcher.fixture_path),
            timeout_secs: fetcher
                .as_ref()
                .and_then(|f| f.timeout_secs)
                .or(default.fetcher.timeout_secs),
        },
        logging: LoggingSettings {
            level: partial
                .logging
                .and_then(|l| l.level)
                .unwrap_or(default.logging.level),
        },
    }
}

impl Settings {
    /// Endpoint at `index`, or a config error naming the valid range.
    pub fn endpoint(&self, index: usize) -> Result<&EndpointSettings, ConfigError> {
        self.endpoints.get(index).ok_or_else(|| {
            ConfigError::Message(format!(
                "endpoint index {} out of range ({} endpoints configured)",
                index,
                self.endpoints.len()
            ))
        })
    }

    /// Endpoint chosen by `fetcher.endpoint_index`.
    pub fn selected_endpoint(&self) -> Result<&EndpointSettings, ConfigError> {
        self.endpoint(self.fetcher.endpoint_index)
    }
}
