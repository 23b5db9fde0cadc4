//! Execution context threaded into persistence.

use serde::{Deserialize, Serialize};

/// Per-run settings the persistence collaborator must honour.
///
/// Passed explicitly on every save instead of living in global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExecutionContext {
    /// Skip search/index updates while writing backfilled bytes
    pub indexing_disabled: bool,
}

impl ExecutionContext {
    /// Context with indexing suppressed, the default for backfill runs.
    pub fn backfill() -> Self {
        Self {
            indexing_disabled: true,
        }
    }
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self::backfill()
    }
}
