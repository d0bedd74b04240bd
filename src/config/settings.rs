use serde::Deserialize;

/// Top-level configuration settings for the application.
///
/// Includes the known message endpoints, how the fetcher picks among them,
/// and logging.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub endpoints: Vec<EndpointSettings>,
    pub fetcher: FetcherSettings,
    pub logging: LoggingSettings,
}

/// One remote message service.
///
/// `source` is the label stamped on every record fetched from `url`.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct EndpointSettings {
    pub url: String,
    pub source: String,
}

/// Configuration settings for the fetcher.
///
/// `endpoint_index` selects an entry of `endpoints` by position. `demo`
/// switches to fixture data, read from `fixture_path` when set.
#[derive(Debug, Deserialize, Clone)]
pub struct FetcherSettings {
    pub endpoint_index: usize,
    pub demo: bool,
    pub fixture_path: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
}

/// Partial configuration settings loaded from files or environment.
///
/// Allows partial specification of settings. Missing values can be filled using defaults.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    pub endpoints: Option<Vec<EndpointSettings>>,
    pub fetcher: Option<PartialFetcherSettings>,
    pub logging: Option<PartialLoggingSettings>,
}

#[derive(Debug, Deserialize)]
pub struct PartialFetcherSettings {
    pub endpoint_index: Option<usize>,
    pub demo: Option<bool>,
    pub fixture_path: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct PartialLoggingSettings {
    pub level: Option<String>,
}

/// Provides default values for `Settings`.
///
/// Two local endpoints, with the second one selected.
impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoints: vec![
                EndpointSettings {
                    url: "http://localhost:8080/messages".to_string(),
                    source: "mongo".to_string(),
                },
                EndpointSettings {
                    url: "http://localhost:8081/messages".to_string(),
                    source: "mariadb".to_string(),
                },
            ],
            fetcher: FetcherSettings {
                endpoint_index: 1,
                demo: false,
                fixture_path: None,
                timeout_secs: None,
            },
            logging: LoggingSettings {
                level: "info".to_string(),
            },
        }
    }
}
