//! # poimap-core
//!
//! Abstract gateway contracts for the external collaborators of a map
//! session (location provider, connectivity monitor, snapshot cache,
//! presentation/notification sink) and the pure usecases that operate
//! on the domain entities.

pub mod gateways;
pub mod usecases;

pub mod entities {
    pub use poimap_entities::{
        category::*, geo::*, poi::*, position::*, route::*, snapshot::*, time::*,
    };
}
