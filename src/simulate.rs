use crate::{
    config::Config,
    gateways::{
        FileSnapshotStore, LogNotificationGateway, SimulatedConnectivityMonitor,
        SimulatedLocationGateway,
    },
    session::{Event, SessionController, SessionView, UserIntent},
};
use anyhow::Result;
use log::info;
use poimap_core::entities::Distance;
use rand::{rngs::StdRng, SeedableRng};

/// Drive one complete scripted session: permission, initial position,
/// periodic updates, an offline window with blocked actions, a refresh
/// after connectivity returns, routing, and teardown.
pub fn run(cfg: &Config, seed: Option<u64>, steps: Option<u32>) -> Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    info!("Simulating a map session (seed {seed})");

    let location = SimulatedLocationGateway::new(
        StdRng::seed_from_u64(seed),
        cfg.simulation.start,
        cfg.simulation.update_interval,
    );
    let connectivity = SimulatedConnectivityMonitor::new(true);
    let notifications = LogNotificationGateway;
    let cache = FileSnapshotStore::new(cfg.session.snapshot_file.clone());

    // Released on scope exit, after the session ends.
    let _location_updates = location.subscribe();
    let _connectivity_changes = connectivity.subscribe();

    let mut session = SessionController::with_rng(
        &location,
        &connectivity,
        &notifications,
        &cache,
        cfg.session.poi_count,
        StdRng::seed_from_u64(seed.wrapping_add(1)),
    );
    session.start();
    log_view(&session.view());

    let steps = steps.unwrap_or(cfg.simulation.steps);
    for step in 1..=steps {
        if Some(step) == cfg.simulation.offline_after {
            connectivity.set_online(false);
            session.handle_event(Event::ConnectivityChange(false));
            // Both rejected with a user notice while offline.
            session.handle_event(Event::User(UserIntent::Refresh));
            session.handle_event(Event::User(UserIntent::SelectPoi(1)));
        }
        if Some(step) == cfg.simulation.online_after {
            connectivity.set_online(true);
            session.handle_event(Event::ConnectivityChange(true));
            session.handle_event(Event::User(UserIntent::Refresh));
        }
        let position = location.step();
        session.handle_event(Event::PositionUpdate(position));
        log_view(&session.view());
    }

    // Route to the best rated place of the final batch.
    let best = session
        .pois()
        .iter()
        .max_by_key(|poi| poi.rating)
        .map(|poi| (poi.id, poi.name.clone()));
    if let Some((poi_id, name)) = best {
        session.handle_event(Event::User(UserIntent::SelectPoi(poi_id)));
        if let Some(route) = session.route() {
            info!(
                "Routed to {name} ({:.0} m away)",
                route.length().map(Distance::to_meters).unwrap_or_default()
            );
        }
    }
    session.handle_event(Event::User(UserIntent::ClearRoute));

    info!("Session finished after {steps} position update(s)");
    Ok(())
}

fn log_view(view: &SessionView) {
    let position = view
        .position
        .map(|pos| pos.to_string())
        .unwrap_or_else(|| "-".into());
    info!(
        "phase={:?} online={} position={} pois={} selected={:?}",
        view.phase, view.online, position, view.poi_count, view.selected
    );
}
