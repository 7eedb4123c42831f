//! Service configuration

use anyhow::Result;
use classroom_capacity::SimulationConfig;
use classroom_common::SimulationError;
use config::builder::{ConfigBuilder, DefaultState};
use serde::{Deserialize, Serialize};

/// Config file looked up when `SIM_CONFIG_FILE` is not set (any format the
/// `config` crate recognises by extension, e.g. `classroom-sim.toml`)
pub const DEFAULT_CONFIG_FILE: &str = "classroom-sim";

/// Prefix for environment overrides, e.g. `SIM_PORT`, `SIM_SIMULATION__SEED`
pub const ENV_PREFIX: &str = "SIM";

/// Service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Service host
    pub host: String,
    /// Service port
    pub port: u16,
    /// Model configuration
    pub simulation: SimulationConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8090,
            simulation: SimulationConfig::default(),
        }
    }
}

impl SimConfig {
    /// Load configuration from `.env`, an optional config file, and the environment
    pub fn load() -> Result<Self> {
        // Try to load .env file
        let _ = dotenvy::dotenv();

        let file = std::env::var("SIM_CONFIG_FILE").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        let mut cfg = Self::from_sources(
            config::Config::builder()
                .add_source(config::File::with_name(&file).required(false))
                .add_source(
                    config::Environment::with_prefix(ENV_PREFIX)
                        .prefix_separator("_")
                        .separator("__")
                        .try_parsing(true),
                ),
        )?;

        // Plain PORT takes priority (container platforms set it)
        if let Ok(port) = std::env::var("PORT") {
            if let Ok(p) = port.parse::<u16>() {
                cfg.port = p;
            }
        }

        Ok(cfg)
    }

    fn from_sources(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let cfg: SimConfig = builder.build()?.try_deserialize()?;
        cfg.simulation
            .distribution
            .validate()
            .map_err(|e| SimulationError::Config(format!("simulation.distribution: {e}")))?;
        Ok(cfg)
    }

    /// Parse a TOML document, falling back to defaults for missing keys
    pub fn from_toml(source: &str) -> Result<Self> {
        Self::from_sources(
            config::Config::builder()
                .add_source(config::File::from_str(source, config::FileFormat::Toml)),
        )
    }
}
