//! Adapter lifecycle state machine.
//!
//! [`RouterAdapter`] binds one navigation controller to the host framework's
//! mount/update/unmount cycle. Ownership of the controller is resolved
//! exactly once, at construction; updates only re-synchronize the external
//! context; teardown disposes the controller if and only if this adapter
//! created it.
//!
//! # Responsibilities
//!
//! - Resolve controller ownership once (adopt the supplied controller, or
//!   create one through the engine).
//! - Seed an adopted controller with the initial context on first mount.
//! - Shallow-diff the context prop on every update and push changes.
//! - Dispose an owned controller exactly once at teardown.
//! - Provide the controller and fallback to descendants when rendered.

use crate::{
    context::{RouteContext, shallow_differs},
    controller::SharedController,
    diagnostics::Diagnostics,
    engine::NavigationEngine,
    error::LifecycleError,
    ownership::{self, Ownership},
    props::RouterProps,
    provider::{Provided, RouterScope},
    view::ViewNode,
};

/// Lifecycle phase of a [`RouterAdapter`].
///
/// `Initialized → Mounted → Disposed`; no transition leaves `Disposed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed and ownership resolved, not yet mounted.
    Initialized,
    /// Mounted; updates are accepted.
    Mounted,
    /// Torn down. The controller reference is gone.
    Disposed,
}

/// Lifecycle adapter binding a navigation controller to a component tree.
///
/// The host framework drives one instance through [`RouterAdapter::mount`],
/// zero or more [`RouterAdapter::update`] calls, and finally
/// [`RouterAdapter::unmount`]; these callbacks are serialized per instance.
/// [`RouterAdapter::render`] may be called in any live phase and is pure.
///
/// The controller reference is immutable once resolved: the adapter holds
/// exactly one controller for its entire mounted lifetime and never swaps it.
pub struct RouterAdapter<E: NavigationEngine> {
    /// Resolved once at construction; `None` only after teardown.
    controller: Option<Ownership<E::Controller>>,
    props: RouterProps<E>,
    phase: Phase,
    diagnostics: Diagnostics,
}

impl<E: NavigationEngine> RouterAdapter<E> {
    /// Construct the adapter and resolve controller ownership.
    ///
    /// Adopts `props.navigation` when present, recording one diagnostic per
    /// conflicting `basename`/`routes`/`history` prop; otherwise creates a
    /// controller through `engine` from those props. The decision is made
    /// here, once, and is never revisited.
    ///
    /// # Errors
    ///
    /// Engine construction failures propagate unmodified.
    pub fn new(
        engine: &E,
        mut props: RouterProps<E>,
        diagnostics: Diagnostics,
    ) -> Result<Self, E::Error> {
        let controller = ownership::resolve(engine, &mut props, &diagnostics)?;
        tracing::debug!(ownership = ?controller, "adapter constructed");
        Ok(Self { controller: Some(controller), props, phase: Phase::Initialized, diagnostics })
    }

    /// First-mount hook.
    ///
    /// If the controller is adopted and a `context` prop is present, pushes
    /// that context once: an adopted controller may have been constructed
    /// before the caller knew the context. Owned controllers already received
    /// the context at creation, so nothing is pushed for them.
    pub fn mount(&mut self) -> Result<(), LifecycleError> {
        if self.phase != Phase::Initialized {
            return Err(self.invalid_phase("mount"));
        }
        self.phase = Phase::Mounted;

        if let (Some(Ownership::Adopted(controller)), Some(context)) =
            (&self.controller, &self.props.context)
        {
            controller.set_context(context.clone());
        }
        Ok(())
    }

    /// Prop update hook.
    ///
    /// Shallow-compares the previous and next `context` props (absent is the
    /// empty map). On any difference the next value is pushed into the
    /// controller exactly once; shallow-equal contexts produce no controller
    /// call, so the engine is never poked with redundant re-matching work.
    ///
    /// Known surprising edge: changes to `navigation`, `basename`, `routes`
    /// or `history` after construction never re-trigger ownership
    /// resolution. The adapter keeps the controller it resolved at
    /// construction; a `navigation` presence flip is only logged at debug
    /// level.
    pub fn update(&mut self, next: RouterProps<E>) -> Result<(), LifecycleError> {
        if self.phase != Phase::Mounted {
            return Err(self.invalid_phase("update"));
        }

        if self.props.navigation.is_some() != next.navigation.is_some() {
            tracing::debug!(
                "navigation prop presence changed after construction; ownership is not re-resolved"
            );
        }

        let empty = RouteContext::new();
        let previous = self.props.context.as_ref().unwrap_or(&empty);
        let current = next.context.as_ref().unwrap_or(&empty);
        if shallow_differs(previous, current) {
            let ownership = self.controller.as_ref().ok_or(LifecycleError::Disposed)?;
            ownership.controller().set_context(current.clone());
        }

        self.props = next;
        Ok(())
    }

    /// Teardown hook.
    ///
    /// Disposes the controller if and only if this adapter created it, then
    /// clears the stored reference. An adopted controller is left untouched;
    /// its owner remains responsible for it. Runs at most once per instance.
    pub fn unmount(&mut self) -> Result<(), LifecycleError> {
        if self.phase != Phase::Mounted {
            return Err(self.invalid_phase("unmount"));
        }

        let ownership = self.controller.take().ok_or(LifecycleError::Disposed)?;
        if let Ownership::Owned(controller) = ownership {
            controller.dispose();
        }
        self.phase = Phase::Disposed;
        Ok(())
    }

    /// Provider boundary.
    ///
    /// Supplies the controller and the optional fallback to descendants and
    /// selects the wrapper body: the `children` prop when present, otherwise
    /// the default matched-view consumer. Pure; no side effects beyond the
    /// provision itself.
    ///
    /// # Errors
    ///
    /// Fails with [`LifecycleError::Disposed`] after teardown.
    pub fn render(&self) -> Result<Provided<E::Controller>, LifecycleError> {
        let ownership = self.controller.as_ref().ok_or(LifecycleError::Disposed)?;
        let scope = RouterScope::new(ownership.controller().clone(), self.props.fallback.clone());
        let body = self.props.children.clone().unwrap_or(ViewNode::MatchedView);
        Ok(Provided { scope, body })
    }

    /// Handle to the live controller.
    ///
    /// # Errors
    ///
    /// Fails with [`LifecycleError::Disposed`] after teardown; a disposed
    /// instance's controller reference must never be reused.
    pub fn controller(&self) -> Result<&SharedController<E::Controller>, LifecycleError> {
        self.controller.as_ref().map(Ownership::controller).ok_or(LifecycleError::Disposed)
    }

    /// True while the adapter holds a controller it created itself.
    pub fn is_owned(&self) -> bool {
        self.controller.as_ref().is_some_and(Ownership::is_owned)
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Diagnostics recorded during construction.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    fn invalid_phase(&self, operation: &'static str) -> LifecycleError {
        LifecycleError::InvalidPhase { phase: self.phase, operation }
    }
}
