use crate::error::ConfigError;
use std::time::Duration;

pub const DEFAULT_BATCH_SIZE: usize = 5;
pub const DEFAULT_ITEM_DELAY: Duration = Duration::from_secs(1);
/// Lower bound on the pause after each deletion attempt.
pub const MIN_ITEM_DELAY: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WorkflowOptions {
    pub batch_size: usize,
    /// Minimum pause after every deletion attempt.
    pub item_delay: Duration,
}

impl Default for WorkflowOptions {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            item_delay: DEFAULT_ITEM_DELAY,
        }
    }
}

impl WorkflowOptions {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.batch_size == 0 {
            return Err(ConfigError::InvalidBatchSize);
        }
        if self.item_delay < MIN_ITEM_DELAY {
            return Err(ConfigError::ItemDelayTooShort);
        }
        Ok(())
    }
}
