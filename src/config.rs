use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{invalid_input_error_with, Error};

const DEFAULT_IP: [u8; 4] = [127, 0, 0, 1];
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_COMPARE_DELAY_MS: u64 = 2500;

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    /// Simulated provider latency applied before each comparison.
    pub compare_delay: Duration,
    pub catalog_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((DEFAULT_IP, DEFAULT_PORT)),
            compare_delay: Duration::from_millis(DEFAULT_COMPARE_DELAY_MS),
            catalog_path: None,
        }
    }
}

impl Config {
    #[tracing::instrument(name = "Config::from_env")]
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();

        let addr = match optional_var("HOPNGO_ADDR")? {
            Some(raw) => raw
                .parse::<SocketAddr>()
                .map_err(|_| invalid_input_error_with(format!("invalid HOPNGO_ADDR: {}", raw)))?,
            None => SocketAddr::from((DEFAULT_IP, DEFAULT_PORT)),
        };

        let compare_delay = match optional_var("HOPNGO_COMPARE_DELAY_MS")? {
            Some(raw) => raw.parse::<u64>().map_err(|_| {
                invalid_input_error_with(format!("invalid HOPNGO_COMPARE_DELAY_MS: {}", raw))
            })?,
            None => DEFAULT_COMPARE_DELAY_MS,
        };

        let catalog_path = optional_var("HOPNGO_CATALOG_PATH")?.map(PathBuf::from);

        Ok(Self {
            addr,
            compare_delay: Duration::from_millis(compare_delay),
            catalog_path,
        })
    }

    pub fn without_delay(self) -> Self {
        Self {
            compare_delay: Duration::ZERO,
            ..self
        }
    }
}

fn optional_var(key: &str) -> Result<Option<String>, Error> {
    match env::var(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(err.into()),
    }
}
