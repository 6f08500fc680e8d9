use crate::{poi::*, position::*, time::Timestamp};

/// A copy of the session state written to the local cache for
/// offline resilience.
///
/// Write-only from the session's perspective. There is
/// deliberately no read-back path at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub position: Position,
    pub pois: Vec<PointOfInterest>,
    pub created_at: Timestamp,
}
