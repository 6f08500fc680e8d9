use crate::session::{
    event::{Event, UserIntent},
    view::SessionView,
};
use log::{debug, warn};
use poimap_core::{
    entities::*,
    gateways::{
        BlockedAction, ConnectivityGateway, LocationGateway, NotificationGateway,
        PermissionStatus, SnapshotCacheGateway, UserNotice,
    },
    usecases,
};
use rand::{rngs::StdRng, SeedableRng};

/// Lifecycle phase of a map session.
///
/// `PermissionDenied` and `PositionFailed` are terminal until the user
/// explicitly retries. The online/offline flag and the selection are
/// orthogonal sub-states of `Ready`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SessionPhase {
    Uninitialized,
    RequestingPermission,
    PermissionDenied,
    AcquiringPosition,
    PositionFailed,
    Ready,
}

/// The session controller reacts to external events (permission
/// results, position updates, connectivity changes, user intents) and
/// drives regeneration, routing and caching. It processes one event at
/// a time and is never reentered mid-update.
pub struct SessionController<L, C, N, S> {
    location: L,
    connectivity: C,
    notifications: N,
    cache: S,

    rng: StdRng,
    poi_count: usize,

    phase: SessionPhase,
    online: bool,
    position: Option<Position>,
    pois: Vec<PointOfInterest>,
    selected: Option<u32>,
    route: Option<Route>,
}

impl<L, C, N, S> SessionController<L, C, N, S>
where
    L: LocationGateway,
    C: ConnectivityGateway,
    N: NotificationGateway,
    S: SnapshotCacheGateway,
{
    pub fn new(location: L, connectivity: C, notifications: N, cache: S, poi_count: usize) -> Self {
        Self::with_rng(
            location,
            connectivity,
            notifications,
            cache,
            poi_count,
            StdRng::from_entropy(),
        )
    }

    /// Like [`Self::new`], but with a caller-provided random source so
    /// generated content is reproducible.
    pub fn with_rng(
        location: L,
        connectivity: C,
        notifications: N,
        cache: S,
        poi_count: usize,
        rng: StdRng,
    ) -> Self {
        Self {
            location,
            connectivity,
            notifications,
            cache,
            rng,
            poi_count,
            phase: SessionPhase::Uninitialized,
            online: true,
            position: None,
            pois: Vec::new(),
            selected: None,
            route: None,
        }
    }

    /// Begin the session by requesting the location permission.
    pub fn start(&mut self) {
        self.phase = SessionPhase::RequestingPermission;
        self.online = self.connectivity.is_online();
        let status = self.location.request_permission();
        self.on_permission_result(status);
    }

    /// Re-enter the failed acquisition step. Recovery is always
    /// explicit, never automatic.
    pub fn retry(&mut self) {
        match self.phase {
            SessionPhase::PermissionDenied => self.start(),
            SessionPhase::PositionFailed => self.acquire_initial_position(),
            _ => debug!("Ignoring retry in phase {:?}", self.phase),
        }
    }

    pub fn on_permission_result(&mut self, status: PermissionStatus) {
        if self.phase != SessionPhase::RequestingPermission {
            debug!("Discarding permission result in phase {:?}", self.phase);
            return;
        }
        match status {
            PermissionStatus::Granted => self.acquire_initial_position(),
            PermissionStatus::Denied => {
                self.phase = SessionPhase::PermissionDenied;
                self.notifications.user_notice(UserNotice::PermissionDenied);
            }
        }
    }

    fn acquire_initial_position(&mut self) {
        self.phase = SessionPhase::AcquiringPosition;
        match self.location.current_position() {
            Ok(position) => self.become_ready(position),
            Err(err) => {
                warn!("Failed to acquire the initial position: {err}");
                self.phase = SessionPhase::PositionFailed;
                self.notifications
                    .user_notice(UserNotice::PositionUnavailable);
            }
        }
    }

    fn become_ready(&mut self, position: Position) {
        self.position = Some(position);
        self.phase = SessionPhase::Ready;
        self.regenerate();
    }

    /// Subscription callback of the location provider.
    ///
    /// The new position always supersedes the stored one. While
    /// offline the existing point-of-interest set is left untouched
    /// (stale but available).
    pub fn on_position_update(&mut self, position: Position) {
        match self.phase {
            SessionPhase::Ready => {
                self.position = Some(position);
                if self.online {
                    self.regenerate();
                }
            }
            // There is no cancel path for an in-flight one-shot
            // request, so a completion that arrives through the
            // subscription instead is accepted opportunistically.
            SessionPhase::AcquiringPosition | SessionPhase::PositionFailed => {
                self.become_ready(position);
            }
            _ => debug!("Discarding position update in phase {:?}", self.phase),
        }
    }

    /// Subscription callback of the connectivity monitor.
    pub fn on_connectivity_change(&mut self, is_online: bool) {
        let was_online = self.online;
        self.online = is_online;
        if was_online && !is_online {
            self.notifications.user_notice(UserNotice::WentOffline);
        }
        // Deliberately no automatic refresh when connectivity returns.
    }

    /// User-triggered regeneration at the current position.
    pub fn refresh(&mut self) -> Result<(), usecases::Error> {
        if !self.online {
            self.notifications
                .user_notice(UserNotice::OfflineActionBlocked(BlockedAction::Refresh));
            return Err(usecases::Error::Offline(BlockedAction::Refresh));
        }
        if self.position.is_none() {
            return Err(usecases::Error::NoCurrentPosition);
        }
        self.regenerate();
        Ok(())
    }

    /// Select a point of interest of the current batch and route to it.
    pub fn select_poi(&mut self, poi_id: u32) -> Result<(), usecases::Error> {
        if !self.online {
            self.notifications
                .user_notice(UserNotice::OfflineActionBlocked(BlockedAction::SelectPoi));
            return Err(usecases::Error::Offline(BlockedAction::SelectPoi));
        }
        let position = self.position.ok_or(usecases::Error::NoCurrentPosition)?;
        let (poi, route) = usecases::route_to_poi(&self.pois, &position, poi_id)?;
        self.selected = Some(poi.id);
        self.route = Some(route);
        self.notifications.fit_bounds(&route.bbox());
        Ok(())
    }

    /// Clear selection and route. Always succeeds.
    pub fn clear_route(&mut self) {
        self.selected = None;
        self.route = None;
    }

    fn regenerate(&mut self) {
        let Some(position) = self.position else {
            return;
        };
        self.pois = usecases::generate_pois(&mut self.rng, position.pos, self.poi_count);
        // The previous batch is discarded wholesale, so any selection
        // refers to nothing anymore.
        self.clear_route();
        self.write_snapshot(position);
    }

    fn write_snapshot(&self, position: Position) {
        let snapshot = SessionSnapshot {
            position,
            pois: self.pois.clone(),
            created_at: Timestamp::now(),
        };
        if let Err(err) = self.cache.put_snapshot(&snapshot) {
            // Best-effort only. A failed write never blocks the session.
            warn!("Failed to cache the session snapshot: {err}");
        }
    }

    /// Dispatch a single event, synchronously to completion.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::PermissionResult(status) => self.on_permission_result(status),
            Event::PositionUpdate(position) => self.on_position_update(position),
            Event::ConnectivityChange(is_online) => self.on_connectivity_change(is_online),
            Event::User(intent) => self.handle_intent(intent),
        }
    }

    fn handle_intent(&mut self, intent: UserIntent) {
        let res = match intent {
            UserIntent::Refresh => self.refresh(),
            UserIntent::SelectPoi(poi_id) => self.select_poi(poi_id),
            UserIntent::ClearRoute => {
                self.clear_route();
                Ok(())
            }
            UserIntent::Retry => {
                self.retry();
                Ok(())
            }
        };
        if let Err(err) = res {
            // Already surfaced to the user where appropriate.
            debug!("Rejected user action: {err}");
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_online(&self) -> bool {
        self.online
    }

    pub fn position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    pub fn pois(&self) -> &[PointOfInterest] {
        &self.pois
    }

    pub fn selected_poi(&self) -> Option<&PointOfInterest> {
        self.selected
            .and_then(|id| self.pois.iter().find(|poi| poi.id == id))
    }

    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            phase: self.phase,
            online: self.online,
            position: self.position.map(|p| p.pos),
            poi_count: self.pois.len(),
            selected: self.selected,
            route: self.route,
        }
    }
}
