use serde::{Deserialize, Serialize};

use crate::errors::{AllocationError, Result};

/// default cheque-release offset: two weeks after the down payment
pub const DEFAULT_CHEQUE_RELEASE_OFFSET_DAYS: i64 = 14;

/// engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// days between the recorded down payment and the cheque release date
    pub cheque_release_offset_days: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cheque_release_offset_days: DEFAULT_CHEQUE_RELEASE_OFFSET_DAYS,
        }
    }
}

impl EngineConfig {
    pub fn with_cheque_release_offset(offset_days: i64) -> Self {
        Self {
            cheque_release_offset_days: offset_days,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.cheque_release_offset_days < 0 {
            return Err(AllocationError::InvalidConfiguration {
                message: format!(
                    "cheque release offset must be non-negative, got {}",
                    self.cheque_release_offset_days
                ),
            });
        }
        Ok(())
    }
}
