//! Configuration options for field validation.

use serde::{Deserialize, Serialize};

/// Longest field, in characters, a record may carry.
pub const DEFAULT_MAX_FIELD_LEN: usize = 256;

/// Longest email local part, in characters.
pub const DEFAULT_MAX_LOCAL_PART_LEN: usize = 64;

/// Positional indices of the fields kept by projection.
pub const FIRST_NAME_INDEX: usize = 0;
pub const LAST_NAME_INDEX: usize = 1;
pub const EMAIL_INDEX: usize = 9;

/// Options controlling the validation chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOptions {
    /// Records with any field longer than this are dropped (inclusive bound).
    pub max_field_len: usize,
    /// Emails whose local part is longer than this are dropped (inclusive bound).
    pub max_local_part_len: usize,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            max_field_len: DEFAULT_MAX_FIELD_LEN,
            max_local_part_len: DEFAULT_MAX_LOCAL_PART_LEN,
        }
    }
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_field_len(mut self, max_field_len: usize) -> Self {
        self.max_field_len = max_field_len;
        self
    }

    #[must_use]
    pub fn with_max_local_part_len(mut self, max_local_part_len: usize) -> Self {
        self.max_local_part_len = max_local_part_len;
        self
    }
}
