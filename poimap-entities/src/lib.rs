#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # poimap-entities
//!
//! Reusable, agnostic domain entities for the poimap session core.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific session logic.

pub mod category;
pub mod geo;
pub mod poi;
pub mod position;
pub mod route;
pub mod snapshot;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
