//! Construction-time validation of the account.

use crate::types::ClawbackVestingAccount;

/// The account validation errors.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The start time is not before the end time.
    #[error("vesting start-time must be before end-time")]
    StartNotBeforeEnd,
    /// The lockup schedule ends after the account end time.
    #[error("lockup schedule extends beyond account end time")]
    LockupExtendsBeyondEnd,
    /// The lockup schedule does not add up to the original vesting amount.
    #[error("original vesting coins does not match the sum of all coins in lockup periods")]
    LockupAmountMismatch,
    /// The vesting schedule ends after the account end time.
    #[error("vesting schedule extends beyond account end time")]
    VestingExtendsBeyondEnd,
    /// The vesting schedule does not add up to the original vesting amount.
    #[error("original vesting coins does not match the sum of all coins in vesting periods")]
    VestingAmountMismatch,
    /// More is tracked as delegated vesting than was ever granted.
    #[error("delegated vesting amount cannot be greater than original vesting amount")]
    DelegatedVestingExceedsOriginal,
}

impl ClawbackVestingAccount {
    /// Check the account invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.start_time >= self.end_time {
            return Err(ValidationError::StartNotBeforeEnd);
        }

        // An end that does not even fit the time type is past any end time.
        match self.lockup_periods.end(self.start_time) {
            Some(lockup_end) if lockup_end <= self.end_time => {}
            _ => return Err(ValidationError::LockupExtendsBeyondEnd),
        }
        if self.lockup_periods.total_amount() != self.original_vesting {
            return Err(ValidationError::LockupAmountMismatch);
        }

        match self.vesting_periods.end(self.start_time) {
            Some(vesting_end) if vesting_end <= self.end_time => {}
            _ => return Err(ValidationError::VestingExtendsBeyondEnd),
        }
        if self.vesting_periods.total_amount() != self.original_vesting {
            return Err(ValidationError::VestingAmountMismatch);
        }

        if !self.delegated_vesting.is_all_lte(&self.original_vesting) {
            return Err(ValidationError::DelegatedVestingExceedsOriginal);
        }

        Ok(())
    }
}
