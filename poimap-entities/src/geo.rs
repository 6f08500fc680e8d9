use itertools::Itertools;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoordParseError {
    #[error("Invalid latitude degrees: {0}")]
    Latitude(f64),
    #[error("Invalid longitude degrees: {0}")]
    Longitude(f64),
    #[error("Failed to parse coordinate: {0}")]
    Format(String),
}

/// Geographical latitude in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct LatCoord(f64);

impl LatCoord {
    const DEG_MAX: f64 = 90.0;
    const DEG_MIN: f64 = -90.0;

    pub const fn max() -> Self {
        Self(Self::DEG_MAX)
    }

    pub const fn min() -> Self {
        Self(Self::DEG_MIN)
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0 >= Self::DEG_MIN && self.0 <= Self::DEG_MAX
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }

    pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
        let deg = deg.into();
        let res = Self(deg);
        debug_assert!(res.is_valid());
        res
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let deg = deg.into();
        if (Self::DEG_MIN..=Self::DEG_MAX).contains(&deg) {
            Some(Self(deg))
        } else {
            None
        }
    }
}

impl std::fmt::Display for LatCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.to_deg())
    }
}

/// Geographical longitude in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct LngCoord(f64);

impl LngCoord {
    const DEG_MAX: f64 = 180.0;
    const DEG_MIN: f64 = -180.0;

    pub const fn max() -> Self {
        Self(Self::DEG_MAX)
    }

    pub const fn min() -> Self {
        Self(Self::DEG_MIN)
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0 >= Self::DEG_MIN && self.0 <= Self::DEG_MAX
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }

    pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
        let deg = deg.into();
        let res = Self(deg);
        debug_assert!(res.is_valid());
        res
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let deg = deg.into();
        if (Self::DEG_MIN..=Self::DEG_MAX).contains(&deg) {
            Some(Self(deg))
        } else {
            None
        }
    }
}

impl std::fmt::Display for LngCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.to_deg())
    }
}

/// A geographical location on a (flat) map.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        self.lat.is_valid() && self.lng.is_valid()
    }

    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat.to_rad(), self.lng.to_rad())
    }

    pub fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat.to_deg(), self.lng.to_deg())
    }

    pub fn from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(lat: LAT, lng: LNG) -> Self {
        Self::new(LatCoord::from_deg(lat), LngCoord::from_deg(lng))
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Option<Self> {
        match (LatCoord::try_from_deg(lat), LngCoord::try_from_deg(lng)) {
            (Some(lat), Some(lng)) => Some(Self::new(lat, lng)),
            _ => None,
        }
    }

    fn parse_lat_lng_deg(lat_deg_str: &str, lng_deg_str: &str) -> Result<Self, CoordParseError> {
        let lat_deg: f64 = lat_deg_str
            .trim()
            .parse()
            .map_err(|_| CoordParseError::Format(lat_deg_str.to_string()))?;
        let lng_deg: f64 = lng_deg_str
            .trim()
            .parse()
            .map_err(|_| CoordParseError::Format(lng_deg_str.to_string()))?;
        let lat = LatCoord::try_from_deg(lat_deg).ok_or(CoordParseError::Latitude(lat_deg))?;
        let lng = LngCoord::try_from_deg(lng_deg).ok_or(CoordParseError::Longitude(lng_deg))?;
        Ok(MapPoint::new(lat, lng))
    }
}

impl std::fmt::Display for MapPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl std::str::FromStr for MapPoint {
    type Err = CoordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((lat_deg_str, lng_deg_str)) = s.split(',').collect_tuple() {
            MapPoint::parse_lat_lng_deg(lat_deg_str, lng_deg_str)
        } else {
            Err(CoordParseError::Format(s.to_string()))
        }
    }
}

/// A distance in meters.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(pub f64);

impl Distance {
    pub const fn infinite() -> Self {
        Self(f64::INFINITY)
    }

    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub const fn to_meters(self) -> f64 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0.0
    }
}

const MEAN_EARTH_RADIUS: Distance = Distance::from_meters(6_371_200.0);

impl MapPoint {
    /// Calculate the great-circle distance on the surface
    /// of the earth using a special case of the Vincenty
    /// formula for numerical accuracy.
    /// Reference: https://en.wikipedia.org/wiki/Great-circle_distance
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Option<Distance> {
        if !p1.is_valid() || !p2.is_valid() {
            return None;
        }

        let (lat1_rad, lng1_rad) = p1.to_lat_lng_rad();
        let (lat2_rad, lng2_rad) = p2.to_lat_lng_rad();

        let (lat1_sin, lat1_cos) = (lat1_rad.sin(), lat1_rad.cos());
        let (lat2_sin, lat2_cos) = (lat2_rad.sin(), lat2_rad.cos());

        let dlng = (lng1_rad - lng2_rad).abs();
        let (dlng_sin, dlng_cos) = (dlng.sin(), dlng.cos());

        let nom1 = lat2_cos * dlng_sin;
        let nom2 = lat1_cos * lat2_sin - lat1_sin * lat2_cos * dlng_cos;

        let nom = (nom1 * nom1 + nom2 * nom2).sqrt();
        let denom = lat1_sin * lat2_sin + lat1_cos * lat2_cos * dlng_cos;

        Some(Distance::from_meters(
            MEAN_EARTH_RADIUS.to_meters() * nom.atan2(denom),
        ))
    }
}

/// An axis-aligned bounding box on the map.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapBbox {
    sw: MapPoint,
    ne: MapPoint,
}

impl MapBbox {
    pub const fn new(sw: MapPoint, ne: MapPoint) -> Self {
        Self { sw, ne }
    }

    pub const fn southwest(&self) -> MapPoint {
        self.sw
    }

    pub const fn northeast(&self) -> MapPoint {
        self.ne
    }

    pub fn is_valid(&self) -> bool {
        self.sw.is_valid() && self.ne.is_valid() && self.sw.lat() <= self.ne.lat()
    }

    pub fn contains_point(&self, pt: MapPoint) -> bool {
        debug_assert!(self.is_valid());
        debug_assert!(pt.is_valid());
        if pt.lat() < self.sw.lat() || pt.lat() > self.ne.lat() {
            return false;
        }
        if self.sw.lng() <= self.ne.lng() {
            // regular (inclusive)
            pt.lng() >= self.sw.lng() && pt.lng() <= self.ne.lng()
        } else {
            // inverse (exclusive)
            !(pt.lng() > self.ne.lng() && pt.lng() < self.sw.lng())
        }
    }

    /// The minimal box containing all of the given points.
    ///
    /// Does not wrap around the antimeridian.
    pub fn bounding<I: IntoIterator<Item = MapPoint>>(points: I) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        if !first.is_valid() {
            return None;
        }
        let (mut lat_min, mut lng_min) = first.to_lat_lng_deg();
        let (mut lat_max, mut lng_max) = (lat_min, lng_min);
        for pt in points {
            if !pt.is_valid() {
                return None;
            }
            let (lat, lng) = pt.to_lat_lng_deg();
            lat_min = lat_min.min(lat);
            lat_max = lat_max.max(lat);
            lng_min = lng_min.min(lng);
            lng_max = lng_max.max(lng);
        }
        Some(Self::new(
            MapPoint::from_lat_lng_deg(lat_min, lng_min),
            MapPoint::from_lat_lng_deg(lat_max, lng_max),
        ))
    }
}

impl std::fmt::Display for MapBbox {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{},{}", self.sw, self.ne)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coords_out_of_range() {
        assert!(LatCoord::try_from_deg(90.000_1).is_none());
        assert!(LatCoord::try_from_deg(-90.000_1).is_none());
        assert!(LngCoord::try_from_deg(180.000_1).is_none());
        assert!(LngCoord::try_from_deg(-180.000_1).is_none());
        assert!(LatCoord::try_from_deg(89.999_9).is_some());
        assert!(LngCoord::try_from_deg(-179.999_9).is_some());
    }

    #[test]
    fn parse_map_point() {
        let pt: MapPoint = "19.4326,-99.1332".parse().unwrap();
        assert_eq!(pt, MapPoint::from_lat_lng_deg(19.4326, -99.1332));
        assert!("19.4326".parse::<MapPoint>().is_err());
        assert!("91.0,0.0".parse::<MapPoint>().is_err());
        assert!("abc,0.0".parse::<MapPoint>().is_err());
    }

    #[test]
    fn display_map_point() {
        let pt = MapPoint::from_lat_lng_deg(1.25, -2.5);
        assert_eq!("1.25,-2.5", pt.to_string());
    }

    #[test]
    fn distance_between_valencia_and_berlin() {
        let valencia = MapPoint::from_lat_lng_deg(39.469_9, -0.376_3);
        let berlin = MapPoint::from_lat_lng_deg(52.520_0, 13.404_9);
        let distance = MapPoint::distance(valencia, berlin).unwrap();
        // ~1 651 km according to online calculators
        assert!(distance.to_meters() > 1_640_000.0);
        assert!(distance.to_meters() < 1_660_000.0);
    }

    #[test]
    fn distance_is_zero_for_equal_points() {
        let pt = MapPoint::from_lat_lng_deg(19.4326, -99.1332);
        assert_eq!(MapPoint::distance(pt, pt).unwrap(), Distance::from_meters(0.0));
    }

    #[test]
    fn bbox_contains_point() {
        let bbox = MapBbox::new(
            MapPoint::from_lat_lng_deg(-10.0, -10.0),
            MapPoint::from_lat_lng_deg(10.0, 10.0),
        );
        assert!(bbox.contains_point(MapPoint::from_lat_lng_deg(5.0, 5.0)));
        assert!(!bbox.contains_point(MapPoint::from_lat_lng_deg(10.1, 10.0)));
        assert!(!bbox.contains_point(MapPoint::from_lat_lng_deg(10.0, 10.1)));
    }

    #[test]
    fn bounding_box_of_points() {
        let bbox = MapBbox::bounding(vec![
            MapPoint::from_lat_lng_deg(1.0, 4.0),
            MapPoint::from_lat_lng_deg(-2.0, 3.0),
            MapPoint::from_lat_lng_deg(0.5, -1.5),
        ])
        .unwrap();
        assert!(bbox.is_valid());
        assert_eq!(bbox.southwest(), MapPoint::from_lat_lng_deg(-2.0, -1.5));
        assert_eq!(bbox.northeast(), MapPoint::from_lat_lng_deg(1.0, 4.0));
        assert!(MapBbox::bounding(vec![]).is_none());
    }
}
