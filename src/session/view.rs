use crate::session::SessionPhase;
use poimap_core::entities::{MapPoint, Route};

/// Read-model of the session state for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionView {
    pub phase: SessionPhase,
    pub online: bool,
    pub position: Option<MapPoint>,
    pub poi_count: usize,
    pub selected: Option<u32>,
    pub route: Option<Route>,
}
