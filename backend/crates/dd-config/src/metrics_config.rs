use dd_core::StreakOrder;

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Order in which meals are scanned for the best on-diet sequence
    pub streak_order: StreakOrder,
}
