//! Location-aware map session core with offline-aware refresh and
//! routing, plus a scripted simulation driver.

pub mod cli;
pub mod config;
pub mod gateways;
pub mod session;
pub mod simulate;
