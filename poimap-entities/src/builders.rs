use crate::{category::*, geo::*, poi::*};

#[derive(Debug)]
pub struct PointOfInterestBuilder {
    poi: PointOfInterest,
}

impl PointOfInterest {
    pub fn build() -> PointOfInterestBuilder {
        PointOfInterestBuilder {
            poi: PointOfInterest {
                id: 1,
                name: "Restaurant 1".into(),
                category: PoiCategory::Restaurant,
                pos: MapPoint::default(),
                rating: RatingValue::min(),
                distance: Distance::from_meters(100.0),
                open_now: true,
            },
        }
    }
}

impl PointOfInterestBuilder {
    pub fn id(mut self, id: u32) -> Self {
        self.poi.id = id;
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.poi.name = name.into();
        self
    }

    pub fn category(mut self, category: PoiCategory) -> Self {
        self.poi.category = category;
        self
    }

    pub fn pos(mut self, pos: MapPoint) -> Self {
        self.poi.pos = pos;
        self
    }

    pub fn rating<R: Into<RatingValue>>(mut self, rating: R) -> Self {
        self.poi.rating = rating.into();
        self
    }

    pub fn distance(mut self, distance: Distance) -> Self {
        self.poi.distance = distance;
        self
    }

    pub fn open_now(mut self, open_now: bool) -> Self {
        self.poi.open_now = open_now;
        self
    }

    pub fn finish(self) -> PointOfInterest {
        self.poi
    }
}
