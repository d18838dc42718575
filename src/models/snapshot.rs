use serde::{Deserialize, Serialize};
use std::rc::Rc;

use super::{RoutesInfo, StationsByRoute, TrainsByRoute};

/// Static reference data loaded once at startup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InitialData {
    pub stations_by_route: StationsByRoute,
    pub routes_info: RoutesInfo,
}

/// Read-only view of everything a line view needs for one render.
///
/// The reference tables are shared behind `Rc` so that consecutive snapshots
/// built from the same initial data compare equal by identity, which is what
/// the geometry cache keys on.
#[derive(Debug, Clone, Default)]
pub struct ApiSnapshot {
    pub stations_by_route: Rc<StationsByRoute>,
    pub routes_info: Rc<RoutesInfo>,
    pub trains_by_route: TrainsByRoute,
}

impl ApiSnapshot {
    #[must_use]
    pub fn from_initial_data(data: InitialData) -> Self {
        Self {
            stations_by_route: Rc::new(data.stations_by_route),
            routes_info: Rc::new(data.routes_info),
            trains_by_route: TrainsByRoute::new(),
        }
    }

    /// Same reference tables, new trains
    #[must_use]
    pub fn with_trains(&self, trains_by_route: TrainsByRoute) -> Self {
        Self {
            stations_by_route: Rc::clone(&self.stations_by_route),
            routes_info: Rc::clone(&self.routes_info),
            trains_by_route,
        }
    }

    /// Every route id known to the reference data
    #[must_use]
    pub fn route_ids(&self) -> Vec<String> {
        self.routes_info.keys().cloned().collect()
    }
}
