use config::Config;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    hubitat: Hubitat,
}

impl AppConfig {
    pub fn load() -> Self {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default())
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn hubitat(&self) -> &Hubitat {
        &self.hubitat
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    store_buffer_size: usize,
}

impl Core {
    pub fn store_buffer_size(&self) -> usize {
        self.store_buffer_size
    }
}

#[derive(Debug, Deserialize)]
pub struct Hubitat {
    url: String,
    maker_api_app_id: u64,
    access_token: String,
    retry_ms: u64,
    retry_max_delay_ms: u64,
}

impl Hubitat {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn maker_api_app_id(&self) -> u64 {
        self.maker_api_app_id
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn retry_ms(&self) -> u64 {
        self.retry_ms
    }

    pub fn retry_max_delay_ms(&self) -> Duration {
        Duration::from_millis(self.retry_max_delay_ms)
    }

    /// Base url of the Maker API app, e.g. `http://10.0.0.83/apps/api/42`.
    pub fn api_url(&self) -> String {
        format!("{}/apps/api/{}", self.url, self.maker_api_app_id)
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core { store_buffer_size: 1 },
                hubitat: Hubitat {
                    url: "http://hubitat.url".to_string(),
                    maker_api_app_id: 42,
                    access_token: "token".to_string(),
                    retry_ms: 10,
                    retry_max_delay_ms: 20,
                },
            },
        }
    }

    pub fn hubitat_url(mut self, url: String) -> Self {
        self.config.hubitat.url = url;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
