mod line;
mod route;
mod snapshot;
mod station;
mod train;

pub use line::{LabelSide, Line};
pub use route::{PathCommand, RouteInfo, RoutesInfo, StationsByRoute};
pub use snapshot::{ApiSnapshot, InitialData};
pub use station::Station;
pub use train::{group_by_route, Train, TrainRoutePair, TrainsByRoute};
