use crate::{geo::*, time::Timestamp};

/// A device position as delivered by a location provider.
///
/// Immutable once captured and superseded wholesale by each
/// subsequent update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub pos: MapPoint,
    pub accuracy: Option<Distance>,
    pub captured_at: Timestamp,
}

impl Position {
    pub fn at(pos: MapPoint) -> Self {
        Self {
            pos,
            accuracy: None,
            captured_at: Timestamp::now(),
        }
    }

    pub fn with_accuracy(mut self, accuracy: Distance) -> Self {
        debug_assert!(accuracy.is_valid());
        self.accuracy = Some(accuracy);
        self
    }
}
