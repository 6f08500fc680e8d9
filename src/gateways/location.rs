use crate::gateways::Subscription;
use poimap_core::{
    entities::*,
    gateways::{LocationGateway, PermissionStatus, PositionError},
};
use rand::{rngs::StdRng, Rng};
use std::{
    cell::{Cell, RefCell},
    time::Duration,
};

/// Minimum displacement between two delivered position updates.
pub const MIN_DISPLACEMENT: Distance = Distance::from_meters(10.0);

const WALK_MAX_STEP_DEG: f64 = 0.001;
const ACCURACY: Distance = Distance::from_meters(15.0);

/// A location provider that walks randomly around its start point,
/// honoring the granularity contract of the real subscription
/// (one update per interval, at least 10 m apart).
pub struct SimulatedLocationGateway {
    rng: RefCell<StdRng>,
    pos: Cell<MapPoint>,
    clock: Cell<Timestamp>,
    update_interval: Duration,
}

impl SimulatedLocationGateway {
    pub fn new(rng: StdRng, start: MapPoint, update_interval: Duration) -> Self {
        debug_assert!(start.is_valid());
        Self {
            rng: RefCell::new(rng),
            pos: Cell::new(start),
            clock: Cell::new(Timestamp::now()),
            update_interval,
        }
    }

    pub fn subscribe(&self) -> Subscription {
        Subscription::new("location updates")
    }

    /// Advance the walk by one subscription interval.
    pub fn step(&self) -> Position {
        let mut rng = self.rng.borrow_mut();
        let current = self.pos.get();
        let (lat, lng) = current.to_lat_lng_deg();
        let next = loop {
            let next = MapPoint::from_lat_lng_deg(
                lat + rng.gen_range(-WALK_MAX_STEP_DEG..=WALK_MAX_STEP_DEG),
                lng + rng.gen_range(-WALK_MAX_STEP_DEG..=WALK_MAX_STEP_DEG),
            );
            // Updates below the displacement threshold are never delivered.
            match MapPoint::distance(current, next) {
                Some(displacement) if displacement >= MIN_DISPLACEMENT => break next,
                _ => continue,
            }
        };
        self.pos.set(next);
        let captured_at = Timestamp::from_seconds(
            self.clock.get().into_seconds() + self.update_interval.as_secs() as i64,
        );
        self.clock.set(captured_at);
        Position {
            pos: next,
            accuracy: Some(ACCURACY),
            captured_at,
        }
    }
}

impl std::fmt::Debug for SimulatedLocationGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        f.debug_struct("SimulatedLocationGateway")
            .field("pos", &self.pos.get())
            .finish_non_exhaustive()
    }
}

impl LocationGateway for SimulatedLocationGateway {
    fn request_permission(&self) -> PermissionStatus {
        PermissionStatus::Granted
    }

    fn current_position(&self) -> Result<Position, PositionError> {
        Ok(Position {
            pos: self.pos.get(),
            accuracy: Some(ACCURACY),
            captured_at: self.clock.get(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn steps_honor_the_displacement_granularity() {
        let start = MapPoint::from_lat_lng_deg(19.4326, -99.1332);
        let gateway = SimulatedLocationGateway::new(
            StdRng::seed_from_u64(21),
            start,
            Duration::from_secs(5),
        );
        let mut previous = start;
        for _ in 0..25 {
            let position = gateway.step();
            let displacement = MapPoint::distance(previous, position.pos).unwrap();
            assert!(displacement >= MIN_DISPLACEMENT);
            previous = position.pos;
        }
    }

    #[test]
    fn timestamps_advance_by_the_update_interval() {
        let start = MapPoint::from_lat_lng_deg(0.0, 0.0);
        let gateway =
            SimulatedLocationGateway::new(StdRng::seed_from_u64(1), start, Duration::from_secs(5));
        let first = gateway.step();
        let second = gateway.step();
        assert_eq!(
            second.captured_at.into_seconds() - first.captured_at.into_seconds(),
            5
        );
    }
}
