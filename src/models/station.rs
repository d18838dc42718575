use serde::{Deserialize, Serialize};

use crate::geometry::Point;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub position: Point,
}

impl Station {
    /// Display name, treating a blank name as missing
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().map(str::trim).filter(|name| !name.is_empty())
    }
}
