pub mod cache;
pub mod connectivity;
pub mod location;
pub mod notify;

pub use self::{cache::*, connectivity::*, location::*, notify::*};
