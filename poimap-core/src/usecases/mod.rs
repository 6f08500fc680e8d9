mod build_route;
mod error;
mod generate_pois;

pub use self::{build_route::*, error::Error, generate_pois::*};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::entities::*;
}
