//! Catalogue of the lines the dashboard draws.

use crate::models::{LabelSide, Line, Train};

/// Green Line B branch stations, labelled on the left so they clear the
/// C and D branches drawn to their right
const GREEN_LEFT_LABELLED: &[&str] = &[
    "place-lake",
    "place-sougr",
    "place-chill",
    "place-chswk",
    "place-sthld",
    "place-wascm",
    "place-harvd",
    "place-brico",
    "place-babck",
    "place-amory",
    "place-bucen",
    "place-bland",
    "place-kencl",
];

/// Ashmont branch stations, drawn to the left of the Braintree branch
const RED_LEFT_LABELLED: &[&str] = &[
    "place-asmnl",
    "place-smmnl",
    "place-fldcr",
    "place-shmnl",
];

fn green_label_side(station_id: &str) -> Option<LabelSide> {
    if GREEN_LEFT_LABELLED.contains(&station_id) {
        Some(LabelSide::Left)
    } else {
        Some(LabelSide::Right)
    }
}

fn orange_label_side(_station_id: &str) -> Option<LabelSide> {
    Some(LabelSide::Right)
}

fn red_label_side(station_id: &str) -> Option<LabelSide> {
    if RED_LEFT_LABELLED.contains(&station_id) {
        Some(LabelSide::Left)
    } else {
        Some(LabelSide::Right)
    }
}

/// The Green Line runs a mixed fleet, so new trains are always called out
fn green_always_label(train: &Train) -> bool {
    train.is_new_train
}

fn never_label(_train: &Train) -> bool {
    false
}

pub static GREEN: Line = Line {
    name: "Green",
    color_primary: "#00843D",
    color_secondary: "#8FDDB4",
    label_side: green_label_side,
    always_label_train: green_always_label,
};

pub static ORANGE: Line = Line {
    name: "Orange",
    color_primary: "#ED8B00",
    color_secondary: "#FFC78A",
    label_side: orange_label_side,
    always_label_train: never_label,
};

pub static RED: Line = Line {
    name: "Red",
    color_primary: "#DA291C",
    color_secondary: "#F8A59B",
    label_side: red_label_side,
    always_label_train: never_label,
};

pub static ALL_LINES: [&Line; 3] = [&GREEN, &ORANGE, &RED];
