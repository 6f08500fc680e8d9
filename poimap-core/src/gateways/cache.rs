use crate::entities::SessionSnapshot;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Key-value persistence for the last-known session snapshot.
///
/// Write failures are non-fatal: callers log and swallow them.
pub trait SnapshotCacheGateway {
    fn put_snapshot(&self, snapshot: &SessionSnapshot) -> Result<(), CacheError>;
}

impl<T: SnapshotCacheGateway + ?Sized> SnapshotCacheGateway for &T {
    fn put_snapshot(&self, snapshot: &SessionSnapshot) -> Result<(), CacheError> {
        (**self).put_snapshot(snapshot)
    }
}
