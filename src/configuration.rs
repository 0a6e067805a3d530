use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub backend: BackendSettings,
    pub ui: UiSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

/// The external search/price-comparison service this UI talks to.
#[derive(serde::Deserialize, Clone)]
pub struct BackendSettings {
    pub base_url: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub request_timeout_secs: u64,
}

#[derive(serde::Deserialize, Clone)]
pub struct UiSettings {
    /// "books" or "restaurants"; selects the domain profile.
    pub flavor: String,
    /// Pause between picking a candidate and showing its detail view.
    /// Cosmetic only, tests set it to zero.
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub detail_delay_ms: u64,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("configuration"))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
