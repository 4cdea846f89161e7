//! Adapter lifecycle errors.
//!
//! Engine construction failures are the engine's own error type and are
//! propagated unmodified; this module only covers violations of the host
//! lifecycle contract, which fail fast instead of silently proceeding.

use thiserror::Error;

use crate::adapter::Phase;

/// Errors from lifecycle operations on the adapter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    /// Lifecycle operation called in the wrong phase.
    #[error("invalid lifecycle transition: cannot {operation} from {phase:?}")]
    InvalidPhase {
        /// Phase the adapter was in.
        phase: Phase,
        /// Operation that was attempted.
        operation: &'static str,
    },

    /// Controller accessed after teardown.
    #[error("controller accessed after dispose")]
    Disposed,
}
