//! Non-fatal configuration diagnostics.
//!
//! Conflicting configuration is a caller mistake, not a fatal condition: it
//! is resolved by a fixed precedence rule and reported here. The
//! production/non-production flag is injected rather than read from the
//! environment, so callers and tests control it without process-wide state.

use std::{cell::RefCell, fmt};

/// A recorded diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// A prop was ignored because a pre-built controller takes precedence.
    IgnoredProp {
        /// Name of the ignored prop.
        prop: &'static str,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IgnoredProp { prop } => write!(
                f,
                "adapter can't receive both a {prop:?} and a \"navigation\" prop; ignoring {prop:?}"
            ),
        }
    }
}

/// Warning sink with an injected build-mode flag.
///
/// Enabled (non-production): warnings are emitted through `tracing::warn!`
/// and recorded in an observable buffer. Disabled (production): warnings are
/// suppressed entirely. The default is disabled.
#[derive(Debug, Default)]
pub struct Diagnostics {
    enabled: bool,
    recorded: RefCell<Vec<Diagnostic>>,
}

impl Diagnostics {
    /// Sink that records and logs warnings (non-production builds).
    pub fn enabled() -> Self {
        Self { enabled: true, recorded: RefCell::new(Vec::new()) }
    }

    /// Sink that suppresses all warnings (production builds).
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Whether warnings are emitted and recorded.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Diagnostics recorded so far, in emission order.
    pub fn recorded(&self) -> Vec<Diagnostic> {
        self.recorded.borrow().clone()
    }

    pub(crate) fn ignored_prop(&self, prop: &'static str) {
        if !self.enabled {
            return;
        }
        let diagnostic = Diagnostic::IgnoredProp { prop };
        tracing::warn!(%diagnostic, "conflicting adapter configuration");
        self.recorded.borrow_mut().push(diagnostic);
    }
}
