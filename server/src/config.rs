//! Process configuration: CLI flags (`clap`) layered over an optional YAML
//! file (`config` crate), mirroring how the fleet-facing agent daemons in
//! this codebase load settings.

use std::time::Duration;

use clap::Parser;
use serde::Deserialize;

use crate::db::{DatabaseConfig, DatabasePath};
use crate::error::{ServerError, ServerResult};

#[derive(Parser, Debug)]
#[command(name = "opamp-serverd", about = "OpAMP control plane server")]
pub struct Cli {
    /// Path to a YAML config file; CLI flags below override its values.
    #[arg(long, env = "OPAMP_SERVER_CONFIG")]
    pub config_file: Option<String>,

    #[arg(long, env = "OPAMP_SERVER_BIND_ADDR")]
    pub bind_addr: Option<String>,

    #[arg(long, env = "OPAMP_SERVER_DATABASE_PATH")]
    pub database_path: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct FileSettings {
    bind_addr: Option<String>,
    database_path: Option<String>,
    message_size_ceiling_bytes: Option<usize>,
    staleness_window_secs: Option<u64>,
    canary_wave_timeout_secs: Option<u64>,
    config_request_expiry_secs: Option<u64>,
    max_leading_null_bytes: Option<usize>,
    canary_failure_threshold_pct: Option<f64>,
}

/// Fully resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_addr: String,
    pub database: DatabaseConfig,
    /// §4.1 / §6: default 4 MiB.
    pub message_size_ceiling_bytes: usize,
    /// §4.4: default 90s.
    pub staleness_window: Duration,
    /// §4.6 / §5: default 10 min.
    pub canary_wave_timeout: Duration,
    /// §4.7 / §5: default 5 min.
    pub config_request_expiry: Duration,
    /// Bound on tolerated leading `0x00` bytes before a frame is rejected as malformed.
    pub max_leading_null_bytes: usize,
    /// §4.6: "if failures exceed a configurable threshold, the deployment
    /// transitions to FAILED". Percentage of a wave's (non-capability-gated)
    /// targets that may end FAILED before the wave itself is considered
    /// unsuccessful. Default 0: any genuine apply failure fails the wave.
    pub canary_failure_threshold_pct: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:4320".to_string(),
            database: DatabaseConfig::new(DatabasePath::new("opamp-server.db").unwrap()),
            message_size_ceiling_bytes: 4 * 1024 * 1024,
            staleness_window: Duration::from_secs(90),
            canary_wave_timeout: Duration::from_secs(10 * 60),
            config_request_expiry: Duration::from_secs(5 * 60),
            max_leading_null_bytes: 16,
            canary_failure_threshold_pct: 0.0,
        }
    }
}

impl Settings {
    pub fn load(cli: Cli) -> ServerResult<Self> {
        let mut settings = Settings::default();

        if let Some(path) = &cli.config_file {
            let file_settings: FileSettings = config::Config::builder()
                .add_source(config::File::with_name(path))
                .build()
                .map_err(|e| ServerError::Configuration {
                    field: "config_file".into(),
                    reason: e.to_string(),
                })?
                .try_deserialize()
                .map_err(|e| ServerError::Configuration {
                    field: "config_file".into(),
                    reason: e.to_string(),
                })?;

            if let Some(v) = file_settings.bind_addr {
                settings.bind_addr = v;
            }
            if let Some(v) = file_settings.database_path {
                settings.database = DatabaseConfig::new(DatabasePath::new(v)?);
            }
            if let Some(v) = file_settings.message_size_ceiling_bytes {
                settings.message_size_ceiling_bytes = v;
            }
            if let Some(v) = file_settings.staleness_window_secs {
                settings.staleness_window = Duration::from_secs(v);
            }
            if let Some(v) = file_settings.canary_wave_timeout_secs {
                settings.canary_wave_timeout = Duration::from_secs(v);
            }
            if let Some(v) = file_settings.config_request_expiry_secs {
                settings.config_request_expiry = Duration::from_secs(v);
            }
            if let Some(v) = file_settings.max_leading_null_bytes {
                settings.max_leading_null_bytes = v;
            }
            if let Some(v) = file_settings.canary_failure_threshold_pct {
                settings.canary_failure_threshold_pct = v;
            }
        }

        if let Some(v) = cli.bind_addr {
            settings.bind_addr = v;
        }
        if let Some(v) = cli.database_path {
            settings.database = DatabaseConfig::new(DatabasePath::new(v)?);
        }

        Ok(settings)
    }
}
