use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    /// An `EnvFilter` directive, e.g. `info,traitsdata::deprecation=off`.
    pub log_filter: String,
    /// Pretty-print the catalog JSON.
    pub pretty: bool,
}

impl Settings {
    /// Layers the defaults, an optional settings file (format inferred from
    /// its extension) and `TRAITSDATA_*` environment variables.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("log_filter", "info")?
            .set_default("pretty", true)?;
        if let Some(path) = path {
            builder = builder.add_source(File::with_name(path).required(false));
        }
        let settings = builder
            .add_source(Environment::with_prefix("TRAITSDATA"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}
