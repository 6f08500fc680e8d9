use crate::gateways::notify::BlockedAction;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum Error {
    #[error("Location permission has been denied")]
    PermissionDenied,
    #[error("The current position is unavailable")]
    PositionUnavailable,
    #[error("Action is blocked while offline")]
    Offline(BlockedAction),
    #[error("There is no current position")]
    NoCurrentPosition,
    #[error("There is no point of interest with id {0}")]
    PoiNotFound(u32),
}
