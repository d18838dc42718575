use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

use super::Station;
use crate::geometry::Point;

/// Route metadata keyed by route id, in feed order
pub type RoutesInfo = IndexMap<String, RouteInfo>;

/// Ordered station table per route id
pub type StationsByRoute = IndexMap<String, Vec<Station>>;

/// A single drawing step of a route's path, in line-local coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PathCommand {
    Move { to: Point },
    Line { to: Point },
    Quad { control: Point, to: Point },
    Cubic { control1: Point, control2: Point, to: Point },
}

impl PathCommand {
    fn write_directive(&self, out: &mut String) {
        // Writing to a String cannot fail
        let _ = match self {
            PathCommand::Move { to } => write!(out, "M{} {}", to.x, to.y),
            PathCommand::Line { to } => write!(out, "L{} {}", to.x, to.y),
            PathCommand::Quad { control, to } => {
                write!(out, "Q{} {} {} {}", control.x, control.y, to.x, to.y)
            }
            PathCommand::Cubic { control1, control2, to } => write!(
                out,
                "C{} {} {} {} {} {}",
                control1.x, control1.y, control2.x, control2.y, to.x, to.y
            ),
        };
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteInfo {
    pub id: String,
    /// Name of the line this route belongs to
    pub line: String,
    #[serde(default)]
    pub name: String,
    /// Station ids in travel order. Empty means the order of the route's
    /// station table.
    #[serde(default)]
    pub station_ids: Vec<String>,
    /// Explicit drawing directives. Empty means a polyline through the
    /// stations in order.
    #[serde(default)]
    pub path: Vec<PathCommand>,
}

impl RouteInfo {
    #[must_use]
    pub fn belongs_to(&self, line_name: &str) -> bool {
        self.line == line_name
    }

    /// This route's stations in travel order. Ids without a station entry are
    /// skipped.
    #[must_use]
    pub fn ordered_stations<'a>(&self, stations: &'a [Station]) -> Vec<&'a Station> {
        if self.station_ids.is_empty() {
            return stations.iter().collect();
        }
        self.station_ids
            .iter()
            .filter_map(|id| stations.iter().find(|s| &s.id == id))
            .collect()
    }

    /// SVG path data for this route
    #[must_use]
    pub fn path_directive(&self, stations: &[Station]) -> String {
        let mut out = String::new();
        if self.path.is_empty() {
            for (i, station) in self.ordered_stations(stations).into_iter().enumerate() {
                let command = if i == 0 {
                    PathCommand::Move { to: station.position }
                } else {
                    PathCommand::Line { to: station.position }
                };
                push_command(&mut out, &command);
            }
        } else {
            for command in &self.path {
                push_command(&mut out, command);
            }
        }
        out
    }
}

fn push_command(out: &mut String, command: &PathCommand) {
    if !out.is_empty() {
        out.push(' ');
    }
    command.write_directive(out);
}
