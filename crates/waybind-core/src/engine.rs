//! Navigation engine seam.
//!
//! The [`NavigationEngine`] trait decouples the adapter from any specific
//! routing implementation. The engine owns route matching, history and URL
//! handling; the adapter only ever asks it to construct a controller.

use crate::{context::RouteContext, controller::Controller};

/// Factory for navigation controllers.
///
/// Implemented by the external navigation engine. The adapter calls
/// [`NavigationEngine::create`] at most once per instance, and only when the
/// caller did not supply a pre-built controller.
///
/// # Associated Types
///
/// - [`History`](NavigationEngine::History): opaque history backend
/// - [`Routes`](NavigationEngine::Routes): opaque route table / matcher
/// - [`Error`](NavigationEngine::Error): construction failure, propagated to
///   the caller unmodified
pub trait NavigationEngine {
    /// Controller type produced by the engine.
    type Controller: Controller;

    /// Opaque history backend consumed at construction.
    type History;

    /// Opaque route table consumed at construction.
    type Routes;

    /// Construction failure. The adapter never catches or translates it.
    type Error: std::error::Error + 'static;

    /// Construct a controller for the given request.
    ///
    /// # Errors
    ///
    /// Engine-specific; failures propagate through
    /// [`RouterAdapter::new`](crate::RouterAdapter::new) unmodified.
    fn create(
        &self,
        request: ControllerRequest<Self::History, Self::Routes>,
    ) -> Result<Self::Controller, Self::Error>;
}

/// Inputs for controller construction.
#[derive(Debug)]
pub struct ControllerRequest<H, R> {
    /// Base path the controller mounts under.
    pub basename: Option<String>,
    /// Initial external context. Empty when the caller supplied none.
    pub context: RouteContext,
    /// History backend, when the caller supplied one.
    pub history: Option<H>,
    /// Route table, when the caller supplied one.
    pub routes: Option<R>,
}
