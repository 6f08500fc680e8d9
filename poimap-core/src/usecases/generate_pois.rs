use super::prelude::*;
use rand::Rng;
use strum::IntoEnumIterator;

pub const DEFAULT_POI_COUNT: usize = 8;

/// Uniform perturbation of the center, per axis.
/// Intentionally approximate, not geodesically accurate.
pub const MAX_CENTER_OFFSET_DEG: f64 = 0.005;

const MIN_DISTANCE_METERS: u32 = 100;
const MAX_DISTANCE_METERS: u32 = 1100;
const OPEN_PROBABILITY: f64 = 0.8;

/// Synthesize `count` mock points of interest around the given center.
///
/// Pure function of its inputs and the injected random source. Category
/// labels are assigned cyclically in declaration order; rating, distance
/// and open state are drawn independently from fixed uniform
/// distributions.
pub fn generate_pois<R: Rng + ?Sized>(
    rng: &mut R,
    center: MapPoint,
    count: usize,
) -> Vec<PointOfInterest> {
    debug_assert!(center.is_valid());
    let (center_lat, center_lng) = center.to_lat_lng_deg();
    PoiCategory::iter()
        .cycle()
        .take(count)
        .enumerate()
        .map(|(i, category)| {
            let lat = center_lat + rng.gen_range(-MAX_CENTER_OFFSET_DEG..=MAX_CENTER_OFFSET_DEG);
            let lng = center_lng + rng.gen_range(-MAX_CENTER_OFFSET_DEG..=MAX_CENTER_OFFSET_DEG);
            let pos = MapPoint::from_lat_lng_deg(clamp_lat_deg(lat), wrap_lng_deg(lng));
            PointOfInterest {
                id: i as u32 + 1,
                name: format!("{} {}", category, i + 1),
                category,
                pos,
                rating: RatingValue::new(rng.gen_range(1..=5) as i8),
                distance: Distance::from_meters(f64::from(
                    rng.gen_range(MIN_DISTANCE_METERS..MAX_DISTANCE_METERS),
                )),
                open_now: rng.gen_bool(OPEN_PROBABILITY),
            }
        })
        .collect()
}

fn clamp_lat_deg(lat_deg: f64) -> f64 {
    lat_deg
        .max(LatCoord::min().to_deg())
        .min(LatCoord::max().to_deg())
}

fn wrap_lng_deg(lng_deg: f64) -> f64 {
    let span = LngCoord::max().to_deg() - LngCoord::min().to_deg();
    if lng_deg < LngCoord::min().to_deg() {
        // wrap around
        lng_deg + span
    } else if lng_deg > LngCoord::max().to_deg() {
        // wrap around
        lng_deg - span
    } else {
        lng_deg
    }
}
