use std::fmt;

use super::Train;

/// Which side of its marker a station label is drawn on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSide {
    Left,
    Right,
}

impl LabelSide {
    /// SVG `text-anchor` that keeps the label clear of the marker
    #[must_use]
    pub fn text_anchor(self) -> &'static str {
        match self {
            LabelSide::Left => "end",
            LabelSide::Right => "start",
        }
    }

    /// Sign applied to the label's horizontal offset from the marker
    #[must_use]
    pub fn direction(self) -> f64 {
        match self {
            LabelSide::Left => -1.0,
            LabelSide::Right => 1.0,
        }
    }
}

/// Static descriptor of a transit line.
///
/// Lines are configuration, not data: they live in `crate::lines` as
/// statics and are compared by address.
pub struct Line {
    pub name: &'static str,
    pub color_primary: &'static str,
    pub color_secondary: &'static str,
    /// Side to label a station on, keyed by station id. `None` leaves the
    /// station unlabelled.
    pub label_side: fn(&str) -> Option<LabelSide>,
    /// Trains matching this always show their label, not just on focus
    pub always_label_train: fn(&Train) -> bool,
}

impl Line {
    #[must_use]
    pub fn label_side_for(&self, station_id: &str) -> Option<LabelSide> {
        (self.label_side)(station_id)
    }

    #[must_use]
    pub fn should_label_train(&self, train: &Train) -> bool {
        (self.always_label_train)(train)
    }

    /// Notice shown in place of the map when the line has no active trains
    #[must_use]
    pub fn no_trains_notice(&self) -> String {
        if self.name == "Red" {
            "New Red Line trains are expected later in 2020.".to_string()
        } else {
            format!("No new trains on the {} Line right now.", self.name)
        }
    }
}

impl fmt::Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Line")
            .field("name", &self.name)
            .field("color_primary", &self.color_primary)
            .field("color_secondary", &self.color_secondary)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}
