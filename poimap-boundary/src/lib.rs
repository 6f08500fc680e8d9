//! # poimap-boundary
//!
//! Serializable, anemic data structures for persisting poimap session
//! snapshots in a type-safe manner. Conversions from and to the domain
//! entities live in [`conv`].

use serde::{Deserialize, Serialize};

mod conv;

pub use conv::ConversionError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub id              : u32,
    pub name            : String,
    pub category        : String,
    pub lat             : f64,
    pub lng             : f64,
    pub rating          : i8,
    pub distance_meters : f64,
    pub open_now        : bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub coordinate: Coordinate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy_meters: Option<f64>,
    pub captured_at: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub position: Position,
    pub pois: Vec<PointOfInterest>,
    pub created_at: i64,
}
