use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogRules,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CatalogRules {
    pub bundle_discount_percent: f64,
}

impl Default for CatalogRules {
    fn default() -> Self {
        Self {
            bundle_discount_percent: 20.0,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default").required(false))
            // Add in the current environment file
            // Default to 'development' env
            // Note that this file is _optional_
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in settings from the environment (with a prefix of EMPORIA)
            // Eg.. `EMPORIA__CATALOG__BUNDLE_DISCOUNT_PERCENT=25` would set the discount
            .add_source(config::Environment::with_prefix("EMPORIA").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
