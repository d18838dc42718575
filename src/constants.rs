/// Horizontal viewbox padding on each side, leaving room for station labels
pub const VIEWBOX_PADDING_X: f64 = 50.0;

/// Viewbox padding above the topmost station
pub const VIEWBOX_PADDING_TOP: f64 = 5.0;

/// Viewbox padding below the bottommost station
pub const VIEWBOX_PADDING_BOTTOM: f64 = 10.0;

/// Viewport-relative x position the closest station marker is shifted to, so
/// sibling line views line up
pub const ALIGNMENT_VIEWPORT_X: &str = "33vw";

/// Distance between a station marker and its label
pub const STATION_LABEL_OFFSET: f64 = 10.0;

pub const STATION_MARKER_RADIUS: f64 = 4.0;
pub const TRAIN_MARKER_RADIUS: f64 = 6.0;

/// Endpoint serving station tables and route metadata
pub const INITIAL_DATA_ENDPOINT: &str = "/initial_data";

/// Endpoint prefix serving active trains; route ids are appended comma-joined
pub const TRAINS_ENDPOINT: &str = "/trains";

/// How often the app polls for new train positions
pub const TRAIN_REFRESH_INTERVAL_MS: u32 = 10_000;
