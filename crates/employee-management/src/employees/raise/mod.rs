mod config;
mod policy;

pub use config::{RaiseBounds, RaisePolicyConfig};
pub use policy::{ApprovedRaise, RaiseError};

use super::domain::InternalEmployee;
use policy::check_raise;

/// Stateless validator applying the raise table to an employee. Never mutates.
#[derive(Debug, Clone, Default)]
pub struct RaisePolicy {
    config: RaisePolicyConfig,
}

impl RaisePolicy {
    pub fn new(config: RaisePolicyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RaisePolicyConfig {
        &self.config
    }

    pub fn validate(&self, employee: &InternalEmployee, proposed: i64) -> Result<(), RaiseError> {
        self.approve(employee, proposed).map(|_| ())
    }

    pub fn approve(
        &self,
        employee: &InternalEmployee,
        proposed: i64,
    ) -> Result<ApprovedRaise, RaiseError> {
        check_raise(
            employee,
            self.config.bounds_for(employee.job_level),
            proposed,
        )
    }
}
