use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::picking::{EXACT_THRESHOLD, PICK_THRESHOLD};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Picking", inline)]
#[serde(default)]
/// Tolerances for resolving coordinates to logical points.
pub struct PickingOptions {
    /// Per-axis tolerance when matching a raycast hit to a point.
    #[schemars(title = "Pick Tolerance", range(min = 0.0, max = 0.5), extend("step" = 0.005))]
    pub pick_threshold: f64,
    /// Per-axis tolerance when matching anomaly points to a point.
    #[schemars(skip)]
    pub anomaly_threshold: f64,
    /// Decimals shown in the hover label.
    #[schemars(title = "Label Precision", range(min = 0, max = 6))]
    pub label_precision: usize,
}

impl Default for PickingOptions {
    fn default() -> Self {
        Self {
            pick_threshold: PICK_THRESHOLD,
            anomaly_threshold: EXACT_THRESHOLD,
            label_precision: 2,
        }
    }
}
