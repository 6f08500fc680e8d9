// Infrastructure implementations of the gateway contracts:
// a simulated location provider and connectivity monitor, a
// file-backed snapshot store and a log-based notification sink.

mod cache;
mod connectivity;
mod location;
mod notify;
mod subscription;

pub use self::{cache::*, connectivity::*, location::*, notify::*, subscription::*};
