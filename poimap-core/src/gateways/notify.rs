use crate::entities::MapBbox;

/// A network-dependent action rejected while offline.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum BlockedAction {
    Refresh,
    SelectPoi,
}

/// A transient, user-facing message.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum UserNotice {
    PermissionDenied,
    PositionUnavailable,
    WentOffline,
    OfflineActionBlocked(BlockedAction),
}

impl std::fmt::Display for UserNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        match self {
            Self::PermissionDenied => {
                f.write_str("Location permission is required to show your position on the map")
            }
            Self::PositionUnavailable => {
                f.write_str("Could not determine your position. Please check that GPS is enabled")
            }
            Self::WentOffline => f.write_str("You are offline. Showing the last known places"),
            Self::OfflineActionBlocked(BlockedAction::Refresh) => {
                f.write_str("Refreshing is not available while offline")
            }
            Self::OfflineActionBlocked(BlockedAction::SelectPoi) => {
                f.write_str("Routing is not available while offline")
            }
        }
    }
}

/// Sink for everything the session wants the presentation layer to do.
pub trait NotificationGateway {
    fn user_notice(&self, notice: UserNotice);

    /// Ask the map view to fit the given box into the viewport.
    fn fit_bounds(&self, bbox: &MapBbox);
}

impl<T: NotificationGateway + ?Sized> NotificationGateway for &T {
    fn user_notice(&self, notice: UserNotice) {
        (**self).user_notice(notice)
    }
    fn fit_bounds(&self, bbox: &MapBbox) {
        (**self).fit_bounds(bbox)
    }
}
