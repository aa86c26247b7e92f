// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Manager configuration.

use std::time::Duration;

use serde::{Deserialize, Deserializer};

/// Tunables for a [`crate::Manager`]'s maintenance routine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerConfig {
    /// Cadence at which `work()` logs outstanding wards while waiting for
    /// a quit to take effect. Defaults to every 2 seconds.
    pub stall_log_interval: Duration,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            stall_log_interval: Duration::from_secs(2),
        }
    }
}

#[derive(Deserialize)]
struct RawManagerConfig {
    #[serde(default = "default_stall_log_interval_secs")]
    stall_log_interval_secs: f64,
}

fn default_stall_log_interval_secs() -> f64 {
    2.0
}

impl<'de> Deserialize<'de> for ManagerConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawManagerConfig::deserialize(deserializer)?;
        Ok(ManagerConfig {
            stall_log_interval: Duration::from_secs_f64(raw.stall_log_interval_secs),
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
