use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::sales::{DEFAULT_LOOKBACK_DAYS, DEFAULT_RECORD_COUNT};

/// Tunables for the analytics store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Records produced per (re)load
    pub record_count: usize,
    /// Width of the generated window, ending now
    pub lookback_days: i64,
    /// Simulated latency of `reload()`
    #[serde(with = "millis")]
    pub reload_delay: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            record_count: DEFAULT_RECORD_COUNT,
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            reload_delay: Duration::from_millis(500),
        }
    }
}

impl DashboardConfig {
    /// Same config without the simulated latency
    pub fn without_delay(self) -> Self {
        Self { reload_delay: Duration::ZERO, ..self }
    }
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
