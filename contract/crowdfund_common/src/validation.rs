use soroban_sdk::String;

use crate::{CrowdfundError, SECONDS_PER_DAY};

/// Checks campaign creation arguments in declaration order and reports the
/// first field that is out of range.
pub fn validate_campaign_params(
    name: &String,
    description: &String,
    target_amount: i128,
    duration_days: u64,
    max_participants: u32,
) -> Result<(), CrowdfundError> {
    if name.len() == 0 {
        return Err(CrowdfundError::EmptyName);
    }
    if description.len() == 0 {
        return Err(CrowdfundError::EmptyDescription);
    }
    if target_amount <= 0 {
        return Err(CrowdfundError::InvalidTargetAmount);
    }
    if duration_days == 0 {
        return Err(CrowdfundError::InvalidDuration);
    }
    if max_participants == 0 {
        return Err(CrowdfundError::InvalidMaxParticipants);
    }
    Ok(())
}

/// Absolute deadline for a campaign created at `now` that runs for
/// `duration_days`.
pub fn compute_deadline(now: u64, duration_days: u64) -> Result<u64, CrowdfundError> {
    duration_days
        .checked_mul(SECONDS_PER_DAY)
        .and_then(|secs| now.checked_add(secs))
        .ok_or(CrowdfundError::InvalidDuration)
}
