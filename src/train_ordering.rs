use indexmap::IndexMap;

use crate::geometry::{distance_from_origin, Point};
use crate::models::{RouteInfo, TrainRoutePair, TrainsByRoute};

/// Every active train on `routes`, paired with its route, in route order and
/// then feed order.
#[must_use]
pub fn train_route_pairs_for_line(
    trains_by_route: &TrainsByRoute,
    routes: &[RouteInfo],
) -> Vec<TrainRoutePair> {
    routes
        .iter()
        .flat_map(|route| {
            trains_by_route
                .get(&route.id)
                .into_iter()
                .flatten()
                .map(move |train| TrainRoutePair {
                    train: train.clone(),
                    route: route.clone(),
                })
        })
        .collect()
}

/// Distance of a train's current station from the origin, 0 when the
/// station is unknown
#[must_use]
pub fn train_distance(pair: &TrainRoutePair, station_positions: &IndexMap<String, Point>) -> f64 {
    let position = pair
        .train
        .station_id
        .as_ref()
        .and_then(|id| station_positions.get(id));
    distance_from_origin(position)
}

/// Orders pairs by ascending distance of their station from the origin.
///
/// The sort is stable, so pairs at equal distance keep their input order and
/// the drawing order of train markers is deterministic.
#[must_use]
pub fn order_by_distance(
    pairs: &[TrainRoutePair],
    station_positions: &IndexMap<String, Point>,
) -> Vec<TrainRoutePair> {
    let mut keyed: Vec<(f64, &TrainRoutePair)> = pairs
        .iter()
        .map(|pair| (train_distance(pair, station_positions), pair))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| a.total_cmp(b));
    keyed.into_iter().map(|(_, pair)| pair.clone()).collect()
}
