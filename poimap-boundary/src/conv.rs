use super::*;
use poimap_entities as e;
use poimap_entities::{category::PoiCategory, geo::MapPoint, time::Timestamp};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Invalid coordinate: {lat},{lng}")]
    Coordinate { lat: f64, lng: f64 },
    #[error("Unknown category: {0}")]
    Category(String),
}

impl From<MapPoint> for Coordinate {
    fn from(from: MapPoint) -> Self {
        let (lat, lng) = from.to_lat_lng_deg();
        Self { lat, lng }
    }
}

impl TryFrom<Coordinate> for MapPoint {
    type Error = ConversionError;

    fn try_from(from: Coordinate) -> Result<Self, Self::Error> {
        let Coordinate { lat, lng } = from;
        MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(ConversionError::Coordinate { lat, lng })
    }
}

impl From<e::position::Position> for Position {
    fn from(from: e::position::Position) -> Self {
        let e::position::Position {
            pos,
            accuracy,
            captured_at,
        } = from;
        Self {
            coordinate: pos.into(),
            accuracy_meters: accuracy.map(e::geo::Distance::to_meters),
            captured_at: captured_at.into_seconds(),
        }
    }
}

impl TryFrom<Position> for e::position::Position {
    type Error = ConversionError;

    fn try_from(from: Position) -> Result<Self, Self::Error> {
        let Position {
            coordinate,
            accuracy_meters,
            captured_at,
        } = from;
        Ok(Self {
            pos: coordinate.try_into()?,
            accuracy: accuracy_meters.map(e::geo::Distance::from_meters),
            captured_at: Timestamp::from_seconds(captured_at),
        })
    }
}

impl From<e::poi::PointOfInterest> for PointOfInterest {
    fn from(from: e::poi::PointOfInterest) -> Self {
        let e::poi::PointOfInterest {
            id,
            name,
            category,
            pos,
            rating,
            distance,
            open_now,
        } = from;
        let (lat, lng) = pos.to_lat_lng_deg();
        Self {
            id,
            name,
            category: category.to_string(),
            lat,
            lng,
            rating: rating.into(),
            distance_meters: distance.to_meters(),
            open_now,
        }
    }
}

impl TryFrom<PointOfInterest> for e::poi::PointOfInterest {
    type Error = ConversionError;

    fn try_from(from: PointOfInterest) -> Result<Self, Self::Error> {
        let PointOfInterest {
            id,
            name,
            category,
            lat,
            lng,
            rating,
            distance_meters,
            open_now,
        } = from;
        let pos = MapPoint::try_from_lat_lng_deg(lat, lng)
            .ok_or(ConversionError::Coordinate { lat, lng })?;
        let category = category
            .parse::<PoiCategory>()
            .map_err(|_| ConversionError::Category(category))?;
        Ok(Self {
            id,
            name,
            category,
            pos,
            rating: rating.into(),
            distance: e::geo::Distance::from_meters(distance_meters),
            open_now,
        })
    }
}

impl From<e::snapshot::SessionSnapshot> for SessionSnapshot {
    fn from(from: e::snapshot::SessionSnapshot) -> Self {
        let e::snapshot::SessionSnapshot {
            position,
            pois,
            created_at,
        } = from;
        Self {
            position: position.into(),
            pois: pois.into_iter().map(Into::into).collect(),
            created_at: created_at.into_seconds(),
        }
    }
}

impl TryFrom<SessionSnapshot> for e::snapshot::SessionSnapshot {
    type Error = ConversionError;

    fn try_from(from: SessionSnapshot) -> Result<Self, Self::Error> {
        let SessionSnapshot {
            position,
            pois,
            created_at,
        } = from;
        Ok(Self {
            position: position.try_into()?,
            pois: pois
                .into_iter()
                .map(TryInto::try_into)
                .collect::<Result<_, _>>()?,
            created_at: Timestamp::from_seconds(created_at),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_survives_a_conversion_round_trip() {
        let entity = e::snapshot::SessionSnapshot {
            position: e::position::Position {
                pos: MapPoint::from_lat_lng_deg(19.4326, -99.1332),
                accuracy: Some(e::geo::Distance::from_meters(12.5)),
                captured_at: Timestamp::from_seconds(1_700_000_000),
            },
            pois: vec![e::poi::PointOfInterest {
                id: 1,
                name: "Food Truck 5".into(),
                category: PoiCategory::FoodTruck,
                pos: MapPoint::from_lat_lng_deg(19.43, -99.13),
                rating: 4.into(),
                distance: e::geo::Distance::from_meters(250.0),
                open_now: true,
            }],
            created_at: Timestamp::from_seconds(1_700_000_001),
        };
        let boundary = SessionSnapshot::from(entity.clone());
        let restored = e::snapshot::SessionSnapshot::try_from(boundary).unwrap();
        assert_eq!(entity, restored);
    }

    #[test]
    fn invalid_coordinate_is_rejected() {
        let coordinate = Coordinate {
            lat: 91.0,
            lng: 0.0,
        };
        assert!(MapPoint::try_from(coordinate).is_err());
    }
}
