use super::super::domain::{InternalEmployee, JobLevel};
use super::config::RaiseBounds;

/// Raise rejected by the policy. Carries the attempted amount and the bound it violated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RaiseError {
    #[error("invalid raise {attempted}: raise must be a positive amount")]
    NotPositive { attempted: i64 },
    #[error(
        "invalid raise {attempted}: {} raises must be at least {minimum}",
        .level.label()
    )]
    BelowMinimum {
        attempted: i64,
        level: JobLevel,
        minimum: u32,
    },
    #[error(
        "invalid raise {attempted}: {} raises must not exceed {maximum}",
        .level.label()
    )]
    AboveMaximum {
        attempted: i64,
        level: JobLevel,
        maximum: u32,
    },
}

impl RaiseError {
    pub fn attempted(&self) -> i64 {
        match self {
            RaiseError::NotPositive { attempted }
            | RaiseError::BelowMinimum { attempted, .. }
            | RaiseError::AboveMaximum { attempted, .. } => *attempted,
        }
    }
}

/// Raise that passed validation, ready to be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApprovedRaise {
    pub amount: u32,
    /// The raise equals the level's minimum, which sets `minimum_raise_given`. The flag is
    /// recorded state only and does not restrict later raises.
    pub is_minimum: bool,
}

pub(crate) fn check_raise(
    employee: &InternalEmployee,
    bounds: RaiseBounds,
    proposed: i64,
) -> Result<ApprovedRaise, RaiseError> {
    if proposed <= 0 {
        return Err(RaiseError::NotPositive {
            attempted: proposed,
        });
    }

    if proposed < i64::from(bounds.minimum) {
        return Err(RaiseError::BelowMinimum {
            attempted: proposed,
            level: employee.job_level,
            minimum: bounds.minimum,
        });
    }

    if proposed > i64::from(bounds.maximum) {
        return Err(RaiseError::AboveMaximum {
            attempted: proposed,
            level: employee.job_level,
            maximum: bounds.maximum,
        });
    }

    let is_minimum = proposed == i64::from(bounds.minimum);
    let amount = u32::try_from(proposed).map_err(|_| RaiseError::AboveMaximum {
        attempted: proposed,
        level: employee.job_level,
        maximum: bounds.maximum,
    })?;

    Ok(ApprovedRaise { amount, is_minimum })
}
