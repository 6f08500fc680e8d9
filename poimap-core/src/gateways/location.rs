use crate::entities::Position;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

#[derive(Debug, Error)]
pub enum PositionError {
    #[error("The current position is unavailable")]
    Unavailable,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// One-shot access to the platform location provider.
///
/// Streamed position updates are not part of this contract. They are
/// delivered to the session as events by whoever owns the platform
/// subscription, at a granularity of at least 5 seconds and 10 meters
/// displacement.
pub trait LocationGateway {
    fn request_permission(&self) -> PermissionStatus;
    fn current_position(&self) -> Result<Position, PositionError>;
}

impl<T: LocationGateway + ?Sized> LocationGateway for &T {
    fn request_permission(&self) -> PermissionStatus {
        (**self).request_permission()
    }
    fn current_position(&self) -> Result<Position, PositionError> {
        (**self).current_position()
    }
}
