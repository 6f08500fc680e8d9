use poimap_core::{entities::Position, gateways::PermissionStatus};

/// Everything that can happen to a running session.
///
/// Events are processed strictly in arrival order, each one
/// synchronously to completion before the next is handled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    PermissionResult(PermissionStatus),
    PositionUpdate(Position),
    ConnectivityChange(bool),
    User(UserIntent),
}

/// Intents emitted by the presentation layer.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum UserIntent {
    Refresh,
    SelectPoi(u32),
    ClearRoute,
    Retry,
}
