use poimap_core::{
    entities::SessionSnapshot,
    gateways::{CacheError, SnapshotCacheGateway},
};
use std::{fs, path::PathBuf};

/// Persists the last-known session snapshot as a JSON document.
#[derive(Debug)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SnapshotCacheGateway for FileSnapshotStore {
    fn put_snapshot(&self, snapshot: &SessionSnapshot) -> Result<(), CacheError> {
        let payload = poimap_boundary::SessionSnapshot::from(snapshot.clone());
        let json = serde_json::to_string_pretty(&payload).map_err(anyhow::Error::from)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poimap_entities::{
        geo::MapPoint, poi::PointOfInterest, position::Position, snapshot::SessionSnapshot,
        time::Timestamp,
    };

    #[test]
    fn writes_a_json_snapshot() {
        let path = std::env::temp_dir().join("poimap-file-snapshot-store-test.json");
        let store = FileSnapshotStore::new(path.clone());
        let snapshot = SessionSnapshot {
            position: Position::at(MapPoint::from_lat_lng_deg(19.4326, -99.1332)),
            pois: vec![PointOfInterest::build().id(7).name("Cafe 7").finish()],
            created_at: Timestamp::from_seconds(1_700_000_000),
        };
        store.put_snapshot(&snapshot).unwrap();
        let json = fs::read_to_string(&path).unwrap();
        assert!(json.contains("\"pois\""));
        assert!(json.contains("Cafe 7"));
        fs::remove_file(&path).ok();
    }
}
