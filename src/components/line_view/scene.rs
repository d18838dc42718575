use crate::geometry::{closest_to_origin, viewbox_for_bounds, Point, ViewBox};
use crate::line_geometry::{routes_for_line, GeometryCache, LineGeometry};
use crate::models::{ApiSnapshot, LabelSide, Line, TrainRoutePair};
use crate::names::abbreviate;
use crate::train_ordering::{order_by_distance, train_route_pairs_for_line};

#[derive(Debug, Clone, PartialEq)]
pub struct StationLabel {
    pub side: LabelSide,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StationScene {
    pub id: String,
    pub position: Point,
    pub label: Option<StationLabel>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainScene {
    pub pair: TrainRoutePair,
    /// Marker position; trains at an unknown station sit at the origin
    pub position: Point,
    pub focus_on_mount: bool,
    pub always_label: bool,
}

/// Parts of the map that only change with the reference data
#[derive(Debug, Clone, PartialEq)]
pub struct MapLayout {
    pub viewbox: ViewBox,
    pub path_directive: String,
    pub stations: Vec<StationScene>,
    /// Station whose marker is measured to align sibling views
    pub anchor_station_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapScene {
    pub layout: MapLayout,
    pub trains: Vec<TrainScene>,
}

/// What a line view shows for one render
#[derive(Debug, Clone, PartialEq)]
pub enum LineScene {
    NoTrains(String),
    Map(MapScene),
}

/// Builds the scene for `line` from the current snapshot.
///
/// Geometry is only built, through `cache`, when the line has trains.
pub fn compose_scene(
    line: &'static Line,
    api: &ApiSnapshot,
    cache: &mut GeometryCache,
    focus_first_train: bool,
) -> LineScene {
    let routes = routes_for_line(line, &api.routes_info);
    let pairs = train_route_pairs_for_line(&api.trains_by_route, &routes);
    if pairs.is_empty() {
        return LineScene::NoTrains(line.no_trains_notice());
    }

    let geometry = cache.get_or_build(line, &api.stations_by_route, &api.routes_info);
    LineScene::Map(map_scene(line, &geometry, &pairs, focus_first_train))
}

fn map_scene(
    line: &Line,
    geometry: &LineGeometry,
    pairs: &[TrainRoutePair],
    focus_first_train: bool,
) -> MapScene {
    let stations = geometry
        .station_positions
        .iter()
        .map(|(id, position)| StationScene {
            id: id.clone(),
            position: *position,
            label: geometry.label_for(id).map(|(side, name)| StationLabel {
                side,
                text: abbreviate(name),
            }),
        })
        .collect();

    let trains = order_by_distance(pairs, &geometry.station_positions)
        .into_iter()
        .enumerate()
        .map(|(index, pair)| {
            let position = pair
                .train
                .station_id
                .as_ref()
                .and_then(|id| geometry.station_positions.get(id))
                .copied()
                .unwrap_or_default();
            TrainScene {
                always_label: line.should_label_train(&pair.train),
                focus_on_mount: focus_first_train && index == 0,
                position,
                pair,
            }
        })
        .collect();

    let layout = MapLayout {
        viewbox: viewbox_for_bounds(&geometry.bounds),
        path_directive: geometry.path_directive.clone(),
        stations,
        anchor_station_id: closest_to_origin(&geometry.station_positions)
            .map(ToString::to_string),
    };

    MapScene { layout, trains }
}
