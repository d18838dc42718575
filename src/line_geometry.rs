use indexmap::IndexMap;
use std::rc::Rc;

use crate::geometry::{Bounds, Point};
use crate::logging::log;
use crate::models::{LabelSide, Line, RouteInfo, RoutesInfo, StationsByRoute};

/// Everything derived from a line's static reference data
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineGeometry {
    /// SVG path data covering every route of the line
    pub path_directive: String,
    pub station_positions: IndexMap<String, Point>,
    pub label_sides: IndexMap<String, LabelSide>,
    pub station_names: IndexMap<String, String>,
    pub bounds: Bounds,
    /// The line's routes, in `routes_info` order
    pub routes: Vec<RouteInfo>,
}

impl LineGeometry {
    /// Label side and display name for a station, if it should be labelled
    #[must_use]
    pub fn label_for(&self, station_id: &str) -> Option<(LabelSide, &str)> {
        let side = self.label_sides.get(station_id)?;
        let name = self.station_names.get(station_id)?;
        Some((*side, name.as_str()))
    }
}

/// Routes of `line`, in `routes_info` order
#[must_use]
pub fn routes_for_line(line: &Line, routes_info: &RoutesInfo) -> Vec<RouteInfo> {
    routes_info
        .values()
        .filter(|route| route.belongs_to(line.name))
        .cloned()
        .collect()
}

/// Derives path, station positions, labels and bounds for `line` in a
/// single pass over one snapshot of the reference data.
#[must_use]
pub fn build_line_geometry(
    line: &Line,
    stations_by_route: &StationsByRoute,
    routes_info: &RoutesInfo,
) -> LineGeometry {
    let routes = routes_for_line(line, routes_info);

    let mut path_parts = Vec::with_capacity(routes.len());
    let mut station_positions = IndexMap::new();
    let mut label_sides = IndexMap::new();
    let mut station_names = IndexMap::new();

    for route in &routes {
        let stations = stations_by_route.get(&route.id).map_or(&[][..], Vec::as_slice);

        let directive = route.path_directive(stations);
        if !directive.is_empty() {
            path_parts.push(directive);
        }

        for station in route.ordered_stations(stations) {
            if station_positions.contains_key(&station.id) {
                continue;
            }
            station_positions.insert(station.id.clone(), station.position);
            if let Some(side) = line.label_side_for(&station.id) {
                label_sides.insert(station.id.clone(), side);
            }
            if let Some(name) = station.display_name() {
                station_names.insert(station.id.clone(), name.to_string());
            }
        }
    }

    let bounds = Bounds::enclosing(station_positions.values()).unwrap_or_default();

    LineGeometry {
        path_directive: path_parts.join(" "),
        station_positions,
        label_sides,
        station_names,
        bounds,
        routes,
    }
}

struct CacheKey {
    line: &'static Line,
    stations_by_route: Rc<StationsByRoute>,
    routes_info: Rc<RoutesInfo>,
}

impl CacheKey {
    fn matches(
        &self,
        line: &'static Line,
        stations_by_route: &Rc<StationsByRoute>,
        routes_info: &Rc<RoutesInfo>,
    ) -> bool {
        std::ptr::eq(self.line, line)
            && Rc::ptr_eq(&self.stations_by_route, stations_by_route)
            && Rc::ptr_eq(&self.routes_info, routes_info)
    }
}

/// Memo table of size one for [`build_line_geometry`].
///
/// Keyed on the identity of the line and of both reference tables; a change
/// to any of them by reference replaces the entry.
#[derive(Default)]
pub struct GeometryCache {
    entry: Option<(CacheKey, Rc<LineGeometry>)>,
}

impl GeometryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_build(
        &mut self,
        line: &'static Line,
        stations_by_route: &Rc<StationsByRoute>,
        routes_info: &Rc<RoutesInfo>,
    ) -> Rc<LineGeometry> {
        if let Some((key, geometry)) = &self.entry {
            if key.matches(line, stations_by_route, routes_info) {
                return Rc::clone(geometry);
            }
        }

        log!("Building geometry for the {} Line", line.name);
        let geometry = Rc::new(build_line_geometry(line, stations_by_route, routes_info));
        let key = CacheKey {
            line,
            stations_by_route: Rc::clone(stations_by_route),
            routes_info: Rc::clone(routes_info),
        };
        self.entry = Some((key, Rc::clone(&geometry)));
        geometry
    }
}
