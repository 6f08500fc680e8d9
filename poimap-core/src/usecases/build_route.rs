use super::prelude::*;

/// Build the straight two-point route from the current position to a
/// point of interest.
pub fn build_route(origin: &Position, poi: &PointOfInterest) -> Route {
    Route::new(origin.pos, poi.pos)
}

/// Look up a point of interest of the current batch and build the route
/// to it.
pub fn route_to_poi<'a>(
    pois: &'a [PointOfInterest],
    origin: &Position,
    poi_id: u32,
) -> Result<(&'a PointOfInterest, Route)> {
    let poi = pois
        .iter()
        .find(|poi| poi.id == poi_id)
        .ok_or(Error::PoiNotFound(poi_id))?;
    Ok((poi, build_route(origin, poi)))
}
