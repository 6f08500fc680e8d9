// The session controller owns the state of one map screen instance
// from permission request to teardown: current position, connectivity
// flag, the generated point-of-interest set, selection and route.

mod controller;
mod event;
mod view;

pub use self::{
    controller::{SessionController, SessionPhase},
    event::{Event, UserIntent},
    view::SessionView,
};
