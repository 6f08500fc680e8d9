use anyhow::{anyhow, Result};
use poimap_entities::geo::MapPoint;
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "poimap.toml";

const ENV_NAME_SNAPSHOT_FILE: &str = "POIMAP_SNAPSHOT_FILE";

#[derive(Debug)]
pub struct Config {
    pub session: Session,
    pub simulation: Simulation,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration."
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(snapshot_file) = env::var(ENV_NAME_SNAPSHOT_FILE) {
            cfg.session.snapshot_file = snapshot_file.into();
        }
        Ok(cfg)
    }
}

#[derive(Debug)]
pub struct Session {
    pub poi_count: usize,
    /// File the session snapshot is cached in.
    pub snapshot_file: PathBuf,
}

#[derive(Debug)]
pub struct Simulation {
    pub start: MapPoint,
    pub steps: u32,
    /// Granularity of the simulated location subscription.
    pub update_interval: Duration,
    pub offline_after: Option<u32>,
    pub online_after: Option<u32>,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;

    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            session,
            simulation,
        } = from;

        let raw::Session {
            poi_count,
            snapshot_file,
        } = session.unwrap_or_default();
        if poi_count == 0 {
            return Err(anyhow!("poi-count must not be zero"));
        }
        let session = Session {
            poi_count,
            snapshot_file,
        };

        let raw::Simulation {
            start,
            steps,
            update_interval,
            offline_after,
            online_after,
        } = simulation.unwrap_or_default();
        let start = start
            .parse::<MapPoint>()
            .map_err(|err| anyhow!("Invalid start coordinate: {err}"))?;
        if let (Some(offline), Some(online)) = (offline_after, online_after) {
            if online <= offline {
                return Err(anyhow!("online-after must come after offline-after"));
            }
        }
        let simulation = Simulation {
            start,
            steps,
            update_interval,
            offline_after,
            online_after,
        };

        Ok(Self {
            session,
            simulation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configuration_is_valid() {
        let cfg = Config::try_from(raw::Config::default()).unwrap();
        assert_eq!(cfg.session.poi_count, 8);
        assert_eq!(cfg.simulation.update_interval, Duration::from_secs(5));
        assert_eq!(
            cfg.simulation.start,
            MapPoint::from_lat_lng_deg(19.4326, -99.1332)
        );
    }

    #[test]
    fn partial_configuration_falls_back_to_defaults() {
        let raw: raw::Config = toml::from_str(
            r#"
            [session]
            poi-count = 5
            snapshot-file = "/tmp/snapshot.json"
            "#,
        )
        .unwrap();
        let cfg = Config::try_from(raw).unwrap();
        assert_eq!(cfg.session.poi_count, 5);
        assert_eq!(cfg.simulation.steps, 12);
    }

    #[test]
    fn invalid_start_coordinate_is_rejected() {
        let raw: raw::Config = toml::from_str(
            r#"
            [simulation]
            start = "91.0,0.0"
            steps = 3
            update-interval = "5s"
            "#,
        )
        .unwrap();
        assert!(Config::try_from(raw).is_err());
    }

    #[test]
    fn offline_window_must_be_ordered() {
        let raw: raw::Config = toml::from_str(
            r#"
            [simulation]
            start = "0.0,0.0"
            steps = 10
            update-interval = "5s"
            offline-after = 6
            online-after = 4
            "#,
        )
        .unwrap();
        assert!(Config::try_from(raw).is_err());
    }
}
