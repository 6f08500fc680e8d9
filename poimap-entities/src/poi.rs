use crate::{category::*, geo::*};

/// A star rating between 1 and 5.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct RatingValue(i8);

impl RatingValue {
    pub fn new<I: Into<i8>>(val: I) -> Self {
        let new = Self(val.into());
        debug_assert!(new.is_valid());
        new
    }

    pub const fn min() -> Self {
        Self(1)
    }

    pub const fn max() -> Self {
        Self(5)
    }

    pub fn clamp(self) -> Self {
        Self(self.0.max(Self::min().0).min(Self::max().0))
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }
}

impl From<i8> for RatingValue {
    fn from(from: i8) -> Self {
        Self(from)
    }
}

impl From<RatingValue> for i8 {
    fn from(from: RatingValue) -> Self {
        from.0
    }
}

impl From<RatingValue> for f64 {
    fn from(from: RatingValue) -> Self {
        f64::from(from.0)
    }
}

impl std::fmt::Display for RatingValue {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.0)
    }
}

/// A nearby place rendered on the map.
///
/// The `id` is only unique within a single generation batch.
/// The whole set of points is replaced on each refresh and
/// never merged with a previous one.
#[derive(Debug, Clone, PartialEq)]
pub struct PointOfInterest {
    pub id: u32,
    pub name: String,
    pub category: PoiCategory,
    pub pos: MapPoint,
    pub rating: RatingValue,
    pub distance: Distance,
    pub open_now: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_value_bounds() {
        assert!(!RatingValue::from(0).is_valid());
        assert!(RatingValue::from(1).is_valid());
        assert!(RatingValue::from(5).is_valid());
        assert!(!RatingValue::from(6).is_valid());
    }

    #[test]
    fn clamp_rating_value() {
        assert_eq!(RatingValue::from(0).clamp(), RatingValue::min());
        assert_eq!(RatingValue::from(7).clamp(), RatingValue::max());
        assert_eq!(RatingValue::from(3).clamp(), RatingValue::from(3));
    }
}
