use duration_str::deserialize_duration;
use serde::Deserialize;
use std::{path::PathBuf, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("poimap.default.toml");

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub session: Option<Session>,
    pub simulation: Option<Simulation>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Session {
    pub poi_count: usize,
    pub snapshot_file: PathBuf,
}

impl Default for Session {
    fn default() -> Self {
        Config::default().session.expect("Session configuration")
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Simulation {
    pub start: String,
    pub steps: u32,
    #[serde(deserialize_with = "deserialize_duration")]
    pub update_interval: Duration,
    pub offline_after: Option<u32>,
    pub online_after: Option<u32>,
}

impl Default for Simulation {
    fn default() -> Self {
        Config::default()
            .simulation
            .expect("Simulation configuration")
    }
}
