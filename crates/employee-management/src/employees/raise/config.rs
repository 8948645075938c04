use serde::{Deserialize, Serialize};

use super::super::domain::JobLevel;

/// Inclusive raise range for one job level, in currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaiseBounds {
    pub minimum: u32,
    pub maximum: u32,
}

/// Per-level raise table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaisePolicyConfig {
    pub junior: RaiseBounds,
    pub medior: RaiseBounds,
    pub senior: RaiseBounds,
}

impl RaisePolicyConfig {
    pub fn bounds_for(&self, level: JobLevel) -> RaiseBounds {
        match level {
            JobLevel::Junior => self.junior,
            JobLevel::Medior => self.medior,
            JobLevel::Senior => self.senior,
        }
    }

    pub fn bounds_for_mut(&mut self, level: JobLevel) -> &mut RaiseBounds {
        match level {
            JobLevel::Junior => &mut self.junior,
            JobLevel::Medior => &mut self.medior,
            JobLevel::Senior => &mut self.senior,
        }
    }
}

impl Default for RaisePolicyConfig {
    fn default() -> Self {
        Self {
            junior: RaiseBounds {
                minimum: 100,
                maximum: 500,
            },
            medior: RaiseBounds {
                minimum: 100,
                maximum: 750,
            },
            senior: RaiseBounds {
                minimum: 100,
                maximum: 1000,
            },
        }
    }
}
