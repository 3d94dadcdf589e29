use serde::Deserialize;

/// Server-side configuration, sourced from environment variables.
#[derive(Deserialize, Debug)]
pub struct ServerConfig {
    pub database_url: String,
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    pub fn load() -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;

        let config: ServerConfig = settings.try_deserialize()?;
        Ok(config)
    }
}
