//! Runtime settings for a button cluster

use serde::Deserialize;

use crate::geometry::Margin;

/// Settings applied with `ButtonCluster::apply_config`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClusterConfig {
    /// Inset `[x, y]` around the buttons. `None` keeps the platform's own.
    pub margin: Option<[f64; 2]>,
    /// Hide the buttons until the pointer is over them.
    pub show_on_hover: bool,
    /// Whether the buttons container is shown at all.
    pub visible: bool,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            margin: None,
            show_on_hover: false,
            visible: true,
        }
    }
}

impl ClusterConfig {
    pub fn margin(&self) -> Option<Margin> {
        self.margin.map(Margin::from)
    }
}
