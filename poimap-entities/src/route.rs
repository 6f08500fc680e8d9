use crate::geo::*;

/// A straight two-point route from the current position to a
/// selected point of interest. No path-finding is involved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Route {
    origin: MapPoint,
    destination: MapPoint,
}

impl Route {
    pub const fn new(origin: MapPoint, destination: MapPoint) -> Self {
        Self {
            origin,
            destination,
        }
    }

    pub const fn origin(&self) -> MapPoint {
        self.origin
    }

    pub const fn destination(&self) -> MapPoint {
        self.destination
    }

    /// The ordered waypoint sequence [origin, destination].
    pub const fn waypoints(&self) -> [MapPoint; 2] {
        [self.origin, self.destination]
    }

    /// The minimal box that fits both endpoints in view.
    pub fn bbox(&self) -> MapBbox {
        MapBbox::bounding(self.waypoints()).unwrap_or_default()
    }

    pub fn length(&self) -> Option<Distance> {
        MapPoint::distance(self.origin, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waypoints_keep_order() {
        let origin = MapPoint::from_lat_lng_deg(1.0, 2.0);
        let destination = MapPoint::from_lat_lng_deg(3.0, 4.0);
        let route = Route::new(origin, destination);
        assert_eq!(route.waypoints(), [origin, destination]);
    }

    #[test]
    fn bbox_contains_both_endpoints() {
        let origin = MapPoint::from_lat_lng_deg(3.0, -4.0);
        let destination = MapPoint::from_lat_lng_deg(-1.0, 2.0);
        let bbox = Route::new(origin, destination).bbox();
        assert!(bbox.is_valid());
        assert!(bbox.contains_point(origin));
        assert!(bbox.contains_point(destination));
    }
}
