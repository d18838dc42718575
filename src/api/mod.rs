mod feed;

pub use feed::{fetch_initial_data, fetch_trains, trains_path, ApiError};
