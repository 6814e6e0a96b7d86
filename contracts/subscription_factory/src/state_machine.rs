//! Contract-level status transitions.

use crate::types::{ContractStatus, Error};

/// Validates if a status transition is allowed.
///
/// | From      | To        | Allowed |
/// |-----------|-----------|---------|
/// | Active    | Paused    | Yes     |
/// | Active    | Destroyed | Yes     |
/// | Paused    | Active    | Yes     |
/// | Paused    | Destroyed | Yes     |
/// | Destroyed | *any*     | No      |
/// | *any*     | Same      | No      |
///
/// Repeating a transition is rejected so each `pause`/`unpause` event marks a
/// real change.
pub fn validate_status_transition(
    from: &ContractStatus,
    to: &ContractStatus,
) -> Result<(), Error> {
    if from == to {
        return Err(Error::InvalidStatusTransition);
    }

    let valid = match from {
        ContractStatus::Active | ContractStatus::Paused => true,
        ContractStatus::Destroyed => false,
    };

    if valid {
        Ok(())
    } else {
        Err(Error::InvalidStatusTransition)
    }
}

pub fn get_allowed_transitions(status: &ContractStatus) -> &'static [ContractStatus] {
    match status {
        ContractStatus::Active => &[ContractStatus::Paused, ContractStatus::Destroyed],
        ContractStatus::Paused => &[ContractStatus::Active, ContractStatus::Destroyed],
        ContractStatus::Destroyed => &[],
    }
}
