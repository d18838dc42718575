use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::RouteInfo;

/// Active trains keyed by route id, in feed order
pub type TrainsByRoute = IndexMap<String, Vec<Train>>;

/// A live vehicle as reported by the position feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Train {
    /// Unique vehicle label
    pub label: String,
    pub route: String,
    /// Station the train is at or approaching
    #[serde(default)]
    pub station_id: Option<String>,
    #[serde(default)]
    pub direction: u8,
    #[serde(default)]
    pub is_new_train: bool,
}

/// An active train together with the route it is running on
#[derive(Debug, Clone, PartialEq)]
pub struct TrainRoutePair {
    pub train: Train,
    pub route: RouteInfo,
}

/// Groups a flat feed of trains by route id, keeping feed order within and
/// across routes
#[must_use]
pub fn group_by_route(trains: Vec<Train>) -> TrainsByRoute {
    let mut grouped = TrainsByRoute::new();
    for train in trains {
        grouped.entry(train.route.clone()).or_default().push(train);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn train(label: &str, route: &str) -> Train {
        Train {
            label: label.to_string(),
            route: route.to_string(),
            station_id: None,
            direction: 0,
            is_new_train: true,
        }
    }

    #[test]
    fn test_group_by_route_keeps_order() {
        let grouped = group_by_route(vec![
            train("3900", "Green-D"),
            train("3901", "Green-B"),
            train("3902", "Green-D"),
        ]);

        let routes: Vec<_> = grouped.keys().cloned().collect();
        assert_eq!(routes, vec!["Green-D", "Green-B"]);
        let labels: Vec<_> = grouped["Green-D"].iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["3900", "3902"]);
    }

    #[test]
    fn test_deserialize_minimal_train() {
        let train: Train = serde_json::from_str(r#"{"label":"1400","route":"Orange"}"#).unwrap();
        assert_eq!(train.station_id, None);
        assert_eq!(train.direction, 0);
        assert!(!train.is_new_train);
    }
}
